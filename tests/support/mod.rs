//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use superellipse::float_types::Real;

pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Splits an `M x y L x y … Z` description into its coordinate pairs.
///
/// Panics on anything else; tests only feed it engine output.
pub fn path_points(path: &str) -> Vec<(Real, Real)> {
    let tokens: Vec<&str> = path.split_whitespace().collect();
    assert_eq!(tokens.first(), Some(&"M"), "path must start with M: {path}");
    assert_eq!(tokens.last(), Some(&"Z"), "path must end with Z: {path}");

    tokens[..tokens.len() - 1]
        .chunks(3)
        .map(|chunk| {
            assert!(chunk[0] == "M" || chunk[0] == "L", "unexpected command {}", chunk[0]);
            let x: Real = chunk[1].parse().expect("x coordinate");
            let y: Real = chunk[2].parse().expect("y coordinate");
            (x, y)
        })
        .collect()
}

/// Number of `L` commands in a path description.
pub fn line_count(path: &str) -> usize {
    path.split_whitespace().filter(|t| *t == "L").count()
}

/// Returns `[min_x, min_y, max_x, max_y]` of a set of points.
pub fn bounding_box(points: &[(Real, Real)]) -> [Real; 4] {
    points.iter().fold(
        [Real::MAX, Real::MAX, Real::MIN, Real::MIN],
        |[min_x, min_y, max_x, max_y], &(x, y)| {
            [min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)]
        },
    )
}
