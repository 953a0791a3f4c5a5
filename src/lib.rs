//! Superellipse boundary tracing for shape design tools.
//!
//! A superellipse `|x/a|^n + |y/b|^n = 1` is traced into a dense closed
//! polygon and rendered as an `M … L … Z` path description, ready to be used
//! as a fill or clip boundary. Three exponent models are supported:
//! - **symmetric**: one exponent `n` for both axes
//! - **asymmetric**: independent `nx` and `ny`
//! - **per-corner**: four corner exponents blended linearly around the boundary
//!
//! Tracing is a pure function ([`ShapeParams::trace`]). The [`worker`] module
//! wraps it in a request/response boundary that never panics outward, and can
//! run it on a background thread or, with the `wasm` feature, inside a
//! browser Web Worker.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export boundaries as SVG documents and parse path descriptions back
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for batch dispatch
//! - **wasm**: `wasm-bindgen` entry point for Web Workers

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod path;
pub mod shape;
pub mod superellipse;
pub mod worker;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{ParameterError, RequestError, WorkerError};
pub use path::Boundary;
pub use shape::{Corners, Exponents, SamplingOptions, ShapeParams};
pub use superellipse::{generate_asymmetric, generate_per_corner, generate_symmetric};
pub use worker::{PathRequest, PathResponse, PathWorker, dispatch, handle_message};
