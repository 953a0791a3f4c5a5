//! Request/response boundary around the tracer.
//!
//! Messages mirror the JSON a browser worker exchanges with its host:
//!
//! ```text
//! { type: "symmetric",  width, height, exp,        options?: { steps?, precision? } }
//! { type: "asymmetric", width, height, expX, expY, options? }
//! { type: "per-corner", width, height, corners: { topLeft, topRight, bottomRight, bottomLeft }, options? }
//! ```
//!
//! Every request yields exactly one [`PathResponse`]. Nothing escapes
//! [`dispatch`] as a panic: decoding problems, invalid parameters and panics
//! inside the tracer are all turned into failure responses.

mod batch;
mod thread;

pub use batch::dispatch_batch;
pub use thread::{Completed, PathWorker, PendingPath, RequestId};

use crate::errors::RequestError;
use crate::float_types::Real;
use crate::shape::{Corners, SamplingOptions, ShapeParams};
use instant::Instant;
use serde::{Deserialize, Serialize};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A fully specified, typed request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PathRequest {
    Symmetric {
        width: Real,
        height: Real,
        exp: Real,
        options: SamplingOptions,
    },
    Asymmetric {
        width: Real,
        height: Real,
        #[serde(rename = "expX")]
        exp_x: Real,
        #[serde(rename = "expY")]
        exp_y: Real,
        options: SamplingOptions,
    },
    PerCorner {
        width: Real,
        height: Real,
        corners: Corners,
        options: SamplingOptions,
    },
}

impl PathRequest {
    pub const fn kind(&self) -> &'static str {
        match self {
            PathRequest::Symmetric { .. } => "symmetric",
            PathRequest::Asymmetric { .. } => "asymmetric",
            PathRequest::PerCorner { .. } => "per-corner",
        }
    }

    pub const fn shape(&self) -> ShapeParams {
        match *self {
            PathRequest::Symmetric { width, height, exp, .. } => ShapeParams::symmetric(width, height, exp),
            PathRequest::Asymmetric { width, height, exp_x, exp_y, .. } => {
                ShapeParams::asymmetric(width, height, exp_x, exp_y)
            },
            PathRequest::PerCorner { width, height, corners, .. } => {
                ShapeParams::per_corner(width, height, corners)
            },
        }
    }

    pub const fn options(&self) -> SamplingOptions {
        match *self {
            PathRequest::Symmetric { options, .. }
            | PathRequest::Asymmetric { options, .. }
            | PathRequest::PerCorner { options, .. } => options,
        }
    }

    /// Builds a request from shape parameters and sampling options.
    pub const fn from_shape(shape: ShapeParams, options: SamplingOptions) -> Self {
        use crate::shape::Exponents;
        let ShapeParams { width, height, exponents } = shape;
        match exponents {
            Exponents::Symmetric(exp) => PathRequest::Symmetric { width, height, exp, options },
            Exponents::Asymmetric { x, y } => PathRequest::Asymmetric {
                width,
                height,
                exp_x: x,
                exp_y: y,
                options,
            },
            Exponents::PerCorner(corners) => PathRequest::PerCorner { width, height, corners, options },
        }
    }
}

/// Corner exponents as they arrive on the wire; each one may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCorners {
    pub top_left: Option<f64>,
    pub top_right: Option<f64>,
    pub bottom_right: Option<f64>,
    pub bottom_left: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOptions {
    pub steps: Option<f64>,
    pub precision: Option<f64>,
}

/// A request as decoded from a message, before any field is required.
///
/// Decoding into this shape only fails on type mismatches (a string where a
/// number belongs); missing fields are reported by [`PathRequest::try_from`]
/// with a message naming what the chosen kind needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub exp: Option<f64>,
    pub exp_x: Option<f64>,
    pub exp_y: Option<f64>,
    pub corners: Option<RawCorners>,
    pub options: Option<RawOptions>,
}

/// Just the `type` tag, for messages whose other fields fail to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawKind {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn is_known_kind(kind: &str) -> bool {
    matches!(kind, "symmetric" | "asymmetric" | "per-corner")
}

fn required(value: Option<f64>, message: &str) -> Result<Real, RequestError> {
    value.map(|v| v as Real).ok_or_else(|| RequestError::missing(message))
}

impl TryFrom<RawRequest> for PathRequest {
    type Error = RequestError;

    fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
        let kind = raw.kind.ok_or(RequestError::MissingKind)?;
        if !is_known_kind(&kind) {
            return Err(RequestError::UnknownKind(kind));
        }
        let width = required(raw.width, "Width required")?;
        let height = required(raw.height, "Height required")?;
        let options = raw.options.unwrap_or_default();
        let options = SamplingOptions::from_loose(options.steps, options.precision)?;

        match kind.as_str() {
            "symmetric" => Ok(PathRequest::Symmetric {
                width,
                height,
                exp: required(raw.exp, "Exponent required for symmetric path")?,
                options,
            }),
            "asymmetric" => {
                let message = "Exponents required for asymmetric path";
                Ok(PathRequest::Asymmetric {
                    width,
                    height,
                    exp_x: required(raw.exp_x, message)?,
                    exp_y: required(raw.exp_y, message)?,
                    options,
                })
            },
            "per-corner" => {
                let message = "Corner exponents required for per-corner path";
                let corners = raw.corners.ok_or_else(|| RequestError::missing(message))?;
                Ok(PathRequest::PerCorner {
                    width,
                    height,
                    corners: Corners {
                        top_left: required(corners.top_left, message)?,
                        top_right: required(corners.top_right, message)?,
                        bottom_right: required(corners.bottom_right, message)?,
                        bottom_left: required(corners.bottom_left, message)?,
                    },
                    options,
                })
            },
            _ => Err(RequestError::UnknownKind(kind)),
        }
    }
}

/// Outcome of one request.
///
/// Serializes as `{ success, path | error, calculationTime }`; exactly one of
/// `path` and `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock milliseconds spent on the request
    pub calculation_time: f64,
}

impl PathResponse {
    pub const fn success(path: String, calculation_time: f64) -> Self {
        Self { success: true, path: Some(path), error: None, calculation_time }
    }

    pub const fn failure(error: String, calculation_time: f64) -> Self {
        Self { success: false, path: None, error: Some(error), calculation_time }
    }

    /// The path on success, the error message otherwise.
    pub fn into_result(self) -> Result<String, String> {
        match (self.success, self.path, self.error) {
            (true, Some(path), _) => Ok(path),
            (_, _, Some(error)) => Err(error),
            _ => Err(String::from("Response carries neither path nor error")),
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of strings, bools and finite floats always serializes.
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"error":"{e}","calculationTime":0}}"#)
        })
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    }
}

fn calculate(request: &PathRequest) -> Result<String, RequestError> {
    let shape = request.shape();
    let options = request.options();
    catch_unwind(AssertUnwindSafe(|| shape.path_description(&options)))
        .map_err(|payload| RequestError::Internal(panic_message(payload)))?
        .map_err(RequestError::from)
}

fn respond(started: Instant, result: Result<String, RequestError>, kind: &str) -> PathResponse {
    let elapsed = elapsed_ms(started);
    match result {
        Ok(path) => {
            tracing::debug!(kind, elapsed_ms = elapsed, bytes = path.len(), "path calculated");
            PathResponse::success(path, elapsed)
        },
        Err(err) => {
            tracing::warn!(kind, elapsed_ms = elapsed, error = %err, "path calculation failed");
            PathResponse::failure(err.to_string(), elapsed)
        },
    }
}

/// Answers a typed request.
pub fn dispatch(request: &PathRequest) -> PathResponse {
    let started = Instant::now();
    respond(started, calculate(request), request.kind())
}

fn dispatch_raw_since(started: Instant, raw: RawRequest) -> PathResponse {
    let kind = raw.kind.clone().unwrap_or_default();
    let result = PathRequest::try_from(raw).and_then(|request| calculate(&request));
    respond(started, result, &kind)
}

/// Answers a decoded but unchecked request.
pub fn dispatch_raw(raw: RawRequest) -> PathResponse {
    dispatch_raw_since(Instant::now(), raw)
}

/// Failure for a message that did not decode as a [`RawRequest`].
///
/// An unknown `type` tag is reported as such even when other fields are
/// mistyped; the kind is checked before anything else.
pub(crate) fn undecodable(started: Instant, kind: Option<String>, message: String) -> PathResponse {
    match kind {
        Some(kind) if !is_known_kind(&kind) => respond(started, Err(RequestError::UnknownKind(kind)), ""),
        kind => respond(
            started,
            Err(RequestError::Malformed(message)),
            kind.as_deref().unwrap_or_default(),
        ),
    }
}

/// Answers a JSON message.
pub fn handle_message(message: &str) -> PathResponse {
    let started = Instant::now();
    match serde_json::from_str::<RawRequest>(message) {
        Ok(raw) => dispatch_raw_since(started, raw),
        Err(e) => {
            let kind = serde_json::from_str::<RawKind>(message).ok().and_then(|k| k.kind);
            undecodable(started, kind, e.to_string())
        },
    }
}

/// Wraps an already decoded message for callers that measure decoding themselves.
#[cfg(feature = "wasm")]
pub(crate) fn dispatch_raw_started(started: Instant, raw: RawRequest) -> PathResponse {
    dispatch_raw_since(started, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_exponent_names_the_kind() {
        let raw = RawRequest {
            kind: Some("symmetric".into()),
            width: Some(100.0),
            height: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            PathRequest::try_from(raw).unwrap_err().to_string(),
            "Exponent required for symmetric path"
        );
    }

    #[test]
    fn partial_corners_are_missing() {
        let raw = RawRequest {
            kind: Some("per-corner".into()),
            width: Some(10.0),
            height: Some(10.0),
            corners: Some(RawCorners { top_left: Some(2.0), ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(
            PathRequest::try_from(raw).unwrap_err().to_string(),
            "Corner exponents required for per-corner path"
        );
    }

    #[test]
    fn typed_request_round_trips_through_shape() {
        let shape = ShapeParams::asymmetric(30.0, 20.0, 3.0, 5.0);
        let request = PathRequest::from_shape(shape, SamplingOptions::new(12, 1));
        assert_eq!(request.kind(), "asymmetric");
        assert_eq!(request.shape(), shape);
        assert_eq!(request.options(), SamplingOptions::new(12, 1));
    }

    #[test]
    fn typed_request_serializes_to_wire_shape() {
        let request = PathRequest::Asymmetric {
            width: 10.0,
            height: 20.0,
            exp_x: 3.0,
            exp_y: 4.0,
            options: SamplingOptions::new(8, 2),
        };
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["type"], "asymmetric");
        assert_eq!(value["expX"], 3.0);
        assert_eq!(value["expY"], 4.0);
        assert_eq!(value["options"]["steps"], 8);

        // and the wire shape decodes back into the same request
        let raw: RawRequest = serde_json::from_value(value).unwrap();
        assert_eq!(PathRequest::try_from(raw).unwrap(), request);
    }
}
