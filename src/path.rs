//! Traced boundaries and their textual path description.

use crate::float_types::{Real, tolerance};
use geo::{Area, BoundingRect, LineString, Polygon as GeoPolygon, Rect, coord};
use nalgebra::Point2;
use std::fmt::Write;

/// Closed polygon approximating a superellipse.
///
/// Points are stored in tracing order, the last one repeating the first. The
/// box size the boundary was traced in is kept so exports can size their
/// canvas without recomputing bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    points: Vec<Point2<Real>>,
    width: Real,
    height: Real,
}

impl Boundary {
    pub const fn new(points: Vec<Point2<Real>>, width: Real, height: Real) -> Self {
        Self { points, width, height }
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub const fn width(&self) -> Real {
        self.width
    }

    pub const fn height(&self) -> Real {
        self.height
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` if the first and last point coincide within [`tolerance`].
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first - last).norm() <= tolerance(),
            _ => false,
        }
    }

    /// Renders `M x0 y0 L x1 y1 … L xn yn Z` with `precision` decimal digits.
    ///
    /// Rounding only affects the text; the stored points keep full precision.
    pub fn to_path_description(&self, precision: usize) -> String {
        // "L " + two coordinates with sign, integer part, dot and digits
        let mut out = String::with_capacity(self.points.len() * (2 * precision + 12) + 2);
        for (i, p) in self.points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "{command} {} {}",
                format_coordinate(p.x, precision),
                format_coordinate(p.y, precision)
            );
        }
        out.push_str(" Z");
        out
    }

    /// Outline as a `geo` line string (closed).
    pub fn to_line_string(&self) -> LineString<Real> {
        self.points.iter().map(|p| coord! { x: p.x, y: p.y }).collect()
    }

    /// Outline as a `geo` polygon without holes.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        GeoPolygon::new(self.to_line_string(), vec![])
    }

    /// Enclosed area of the polygonal approximation.
    pub fn area(&self) -> Real {
        self.to_polygon().unsigned_area()
    }

    /// Axis-aligned bounds of the traced points, `None` when empty.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.to_line_string().bounding_rect()
    }
}

/// Fixed-point formatting of one coordinate.
///
/// Values that round to zero are printed without a sign, so a point sitting
/// a hair left of the origin reads `0.00` rather than `-0.00`.
pub fn format_coordinate(value: Real, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => unsigned.to_string(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_loses_its_sign() {
        assert_eq!(format_coordinate(-0.0, 2), "0.00");
        assert_eq!(format_coordinate(-0.001, 2), "0.00");
        assert_eq!(format_coordinate(-0.4, 0), "0");
        assert_eq!(format_coordinate(-0.5001, 0), "-1");
        assert_eq!(format_coordinate(12.345678, 3), "12.346");
    }

    #[test]
    fn path_description_of_a_square() {
        let b = Boundary::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 0.0),
            ],
            1.0,
            1.0,
        );
        assert_eq!(b.to_path_description(1), "M 0.0 0.0 L 1.0 0.0 L 1.0 1.0 L 0.0 0.0 Z");
        assert!(b.is_closed());
        assert!((b.area() - 0.5).abs() < 1e-12);
    }
}
