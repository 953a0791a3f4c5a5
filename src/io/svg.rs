//! SVG export of traced boundaries and parsing of the path descriptions
//! they are rendered as.

use super::IoError;
use crate::float_types::Real;
use crate::path::Boundary;
use nalgebra::Point2;
use nom::{
    IResult,
    character::complete::{char, multispace0, multispace1},
    combinator::all_consuming,
    multi::many0,
    number::complete::double,
    sequence::{delimited, pair, preceded},
};
use svg::Document;
use svg::node::element::Path;
use svg::node::element::tag;
use svg::parser::Event;

impl Boundary {
    /// Standalone SVG document of `width × height` holding the boundary as one filled path.
    pub fn to_svg(&self, precision: usize, fill: &str) -> String {
        let path = Path::new()
            .set("d", self.to_path_description(precision))
            .set("fill", fill);

        Document::new()
            .set("width", self.width())
            .set("height", self.height())
            .set("viewBox", (0.0, 0.0, self.width(), self.height()))
            .add(path)
            .to_string()
    }
}

fn coordinate_pair(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, x) = preceded(multispace1, double)(input)?;
    let (input, y) = preceded(multispace1, double)(input)?;
    Ok((input, (x, y)))
}

fn move_to(input: &str) -> IResult<&str, (f64, f64)> {
    preceded(pair(multispace0, char('M')), coordinate_pair)(input)
}

fn line_to(input: &str) -> IResult<&str, (f64, f64)> {
    preceded(pair(multispace0, char('L')), coordinate_pair)(input)
}

fn closed_polyline(input: &str) -> IResult<&str, Vec<(f64, f64)>> {
    let (input, first) = move_to(input)?;
    let (input, rest) = many0(line_to)(input)?;
    let (input, _) = delimited(multispace0, char('Z'), multispace0)(input)?;

    let mut points = Vec::with_capacity(rest.len() + 1);
    points.push(first);
    points.extend(rest);
    Ok((input, points))
}

/// Parses `M x y L x y … Z` back into a boundary.
///
/// Only the absolute move/line/close commands produced by
/// [`Boundary::to_path_description`] are accepted. The box size is taken
/// from the largest coordinates, which is where a traced superellipse
/// touches its box.
pub fn parse_path_description(description: &str) -> Result<Boundary, IoError> {
    let (_, coords) = all_consuming(closed_polyline)(description)
        .map_err(|e| IoError::MalformedPath(e.to_string()))?;

    let points: Vec<Point2<Real>> = coords
        .into_iter()
        .map(|(x, y)| Point2::new(x as Real, y as Real))
        .collect();
    let width = points.iter().fold(0.0, |acc: Real, p| acc.max(p.x));
    let height = points.iter().fold(0.0, |acc: Real, p| acc.max(p.y));

    Ok(Boundary::new(points, width, height))
}

/// Reads the first `<path>` of an SVG document as a boundary.
pub fn boundary_from_svg(document: &str) -> Result<Boundary, IoError> {
    let parser = svg::read(document).map_err(|e| IoError::MalformedInput(e.to_string()))?;
    for event in parser {
        match event {
            Event::Error(error) => return Err(error.into()),
            Event::Tag(tag::Path, _, attributes) => {
                let data = attributes
                    .get("d")
                    .ok_or_else(|| IoError::MalformedInput("<path> without a d attribute".into()))?;
                return parse_path_description(data);
            },
            _ => {},
        }
    }
    Err(IoError::MalformedInput("no <path> element found".into()))
}
