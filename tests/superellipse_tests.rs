use superellipse::float_types::{FRAC_PI_2, PI, Real};
use superellipse::superellipse::{corner_exponent, superellipse_point};
use superellipse::{
    Corners, ParameterError, ShapeParams, generate_asymmetric, generate_per_corner,
    generate_symmetric,
};

mod support;

use crate::support::{approx_eq, bounding_box, line_count, path_points};

#[test]
fn ellipse_touches_box_at_axis_angles() {
    for (w, h) in [(200.0, 100.0), (37.5, 91.0), (1.0, 1.0)] {
        let boundary = ShapeParams::symmetric(w, h, 2.0).trace(4).unwrap();
        let p = boundary.points();
        // t = 0
        assert!(approx_eq(p[0].x, w, 1e-9) && approx_eq(p[0].y, h / 2.0, 1e-9));
        // t = π/2
        assert!(approx_eq(p[1].x, w / 2.0, 1e-9) && approx_eq(p[1].y, h, 1e-9));
    }
}

#[test]
fn ellipse_path_with_four_steps() {
    let path = generate_symmetric(200.0, 100.0, 2.0, 4, 2).unwrap();
    assert_eq!(
        path,
        "M 200.00 50.00 L 100.00 100.00 L 0.00 50.00 L 100.00 0.00 L 200.00 50.00 Z"
    );
}

#[test]
fn rounded_rectangle_with_four_steps() {
    let path = generate_symmetric(200.0, 100.0, 4.0, 4, 2).unwrap();
    let points = path_points(&path);
    assert_eq!(points.len(), 5);
    assert_eq!(points.first(), points.last());

    let [min_x, min_y, max_x, max_y] = bounding_box(&points);
    assert!(min_x >= 0.0 && max_x <= 200.0);
    assert!(min_y >= 0.0 && max_y <= 100.0);
}

#[test]
fn contour_is_closed_for_every_mode() {
    let corners = Corners::new(1.5, 3.0, 7.0, 12.0);
    let paths = [
        generate_symmetric(320.0, 180.0, 5.0, 97, 3).unwrap(),
        generate_asymmetric(320.0, 180.0, 2.5, 9.0, 97, 3).unwrap(),
        generate_per_corner(320.0, 180.0, corners, 97, 3).unwrap(),
    ];
    for path in &paths {
        let points = path_points(path);
        assert_eq!(points.len(), 98);
        assert_eq!(points.first(), points.last(), "open contour: {path}");
    }
}

#[test]
fn command_count_matches_steps() {
    for steps in [1, 2, 7, 360, 1000] {
        let path = generate_symmetric(100.0, 100.0, 4.0, steps, 2).unwrap();
        assert_eq!(line_count(&path), steps);
        assert_eq!(path.matches('M').count(), 1);
        assert!(path.starts_with("M "));
        assert!(path.ends_with(" Z"));
    }
}

#[test]
fn generation_is_idempotent() {
    let corners = Corners::new(2.0, 4.0, 6.0, 8.0);
    assert_eq!(
        generate_per_corner(150.0, 90.0, corners, 360, 4).unwrap(),
        generate_per_corner(150.0, 90.0, corners, 360, 4).unwrap()
    );
    assert_eq!(
        generate_asymmetric(150.0, 90.0, 3.0, 6.0, 360, 2).unwrap(),
        generate_asymmetric(150.0, 90.0, 3.0, 6.0, 360, 2).unwrap()
    );
}

#[test]
fn single_step_yields_two_points() {
    let path = generate_symmetric(200.0, 100.0, 4.0, 1, 2).unwrap();
    assert_eq!(path, "M 200.00 50.00 L 200.00 50.00 Z");
}

#[test]
fn zero_precision_yields_integers() {
    let path = generate_asymmetric(123.0, 77.0, 3.0, 5.0, 50, 0).unwrap();
    for token in path.split_whitespace().filter(|t| !matches!(*t, "M" | "L" | "Z")) {
        assert!(!token.contains('.'), "fractional coordinate {token}");
        assert!(token.parse::<i64>().is_ok(), "not an integer: {token}");
    }
}

#[test]
fn per_corner_exponent_is_exact_at_quadrant_boundaries() {
    let corners = Corners::new(2.0, 4.0, 6.0, 8.0);
    assert_eq!(corner_exponent(&corners, 0.0), 4.0);
    assert_eq!(corner_exponent(&corners, FRAC_PI_2), 6.0);
    assert_eq!(corner_exponent(&corners, PI), 8.0);
}

#[test]
fn per_corner_blends_between_neighbours() {
    let corners = Corners::new(2.0, 4.0, 6.0, 8.0);
    let shape = ShapeParams::per_corner(100.0, 60.0, corners);
    let boundary = shape.trace(8).unwrap();
    let (a, b) = shape.semi_axes();

    // i = 1 sits halfway through the first quarter: (topRight + bottomRight) / 2
    let expected = superellipse_point(a, b, PI / 4.0, 5.0, 5.0);
    assert!((boundary.points()[1] - expected).norm() < 1e-9);

    // i = 5 sits halfway through the third quarter: (bottomLeft + topLeft) / 2
    let expected = superellipse_point(a, b, 5.0 * PI / 4.0, 5.0, 5.0);
    assert!((boundary.points()[5] - expected).norm() < 1e-9);
}

#[test]
fn higher_exponent_fills_more_of_the_box() {
    let ellipse = ShapeParams::symmetric(200.0, 100.0, 2.0).trace(720).unwrap();
    let squircle = ShapeParams::symmetric(200.0, 100.0, 4.0).trace(720).unwrap();
    let box_area: Real = 200.0 * 100.0;

    let ellipse_area = PI * 100.0 * 50.0;
    assert!(approx_eq(ellipse.area(), ellipse_area, ellipse_area * 1e-3));
    assert!(squircle.area() > ellipse.area());
    assert!(squircle.area() < box_area);
}

#[test]
fn asymmetric_axes_are_independent() {
    let mixed = ShapeParams::asymmetric(100.0, 100.0, 2.0, 8.0).trace(16).unwrap();
    let ellipse = ShapeParams::symmetric(100.0, 100.0, 2.0).trace(16).unwrap();
    let boxy = ShapeParams::symmetric(100.0, 100.0, 8.0).trace(16).unwrap();

    for ((m, e), b) in mixed.points().iter().zip(ellipse.points()).zip(boxy.points()) {
        assert!(approx_eq(m.x, e.x, 1e-9));
        assert!(approx_eq(m.y, b.y, 1e-9));
    }
}

#[test]
fn bounds_stay_inside_the_box() {
    let boundary = ShapeParams::per_corner(64.0, 48.0, Corners::new(0.5, 20.0, 3.0, 1.0))
        .trace(500)
        .unwrap();
    let rect = boundary.bounding_rect().unwrap();
    assert!(rect.min().x >= -1e-9 && rect.min().y >= -1e-9);
    assert!(rect.max().x <= 64.0 + 1e-9 && rect.max().y <= 48.0 + 1e-9);
    assert!(boundary.is_closed());
}

#[test]
fn invalid_exponents_are_rejected_for_every_mode() {
    for bad in [0.0, -1.0] {
        assert!(matches!(
            generate_symmetric(100.0, 100.0, bad, 10, 2),
            Err(ParameterError::InvalidExponent { .. })
        ));
        assert!(matches!(
            generate_asymmetric(100.0, 100.0, bad, 4.0, 10, 2),
            Err(ParameterError::InvalidExponent { name: "nx", .. })
        ));
        assert!(matches!(
            generate_asymmetric(100.0, 100.0, 4.0, bad, 10, 2),
            Err(ParameterError::InvalidExponent { name: "ny", .. })
        ));
        assert!(matches!(
            generate_per_corner(100.0, 100.0, Corners::new(4.0, 4.0, 4.0, bad), 10, 2),
            Err(ParameterError::InvalidExponent { name: "bottomLeft", .. })
        ));
    }
    assert!(generate_symmetric(100.0, 100.0, Real::NAN, 10, 2).is_err());
    assert!(generate_symmetric(100.0, 100.0, Real::INFINITY, 10, 2).is_err());
}

#[test]
fn invalid_sampling_is_rejected() {
    assert_eq!(
        generate_symmetric(100.0, 100.0, 4.0, 0, 2),
        Err(ParameterError::InvalidSteps(0.0))
    );
    assert!(matches!(
        generate_symmetric(100.0, 100.0, 4.0, 10, 101),
        Err(ParameterError::InvalidPrecision { .. })
    ));
}

#[test]
fn invalid_dimensions_are_rejected() {
    assert!(generate_symmetric(0.0, 100.0, 4.0, 10, 2).is_err());
    assert!(generate_symmetric(100.0, -5.0, 4.0, 10, 2).is_err());
    assert!(generate_symmetric(Real::INFINITY, 100.0, 4.0, 10, 2).is_err());
}

#[test]
fn small_exponents_stay_finite() {
    let path = generate_symmetric(100.0, 100.0, 0.1, 360, 2).unwrap();
    assert!(!path.contains("NaN") && !path.contains("inf"));
    let points = path_points(&path);
    let [min_x, min_y, max_x, max_y] = bounding_box(&points);
    assert!(min_x >= 0.0 && min_y >= 0.0 && max_x <= 100.0 && max_y <= 100.0);
}
