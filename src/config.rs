//! Process-wide defaults for sampling.
//!
//! Requests that leave `steps` or `precision` out fall back to
//! [`default_sampling`]. The defaults are `360` samples and `2` digits, and can be overridden:
//!  1) **Build-time**: set `SUPERELLIPSE_STEPS` and/or `SUPERELLIPSE_PRECISION`
//!  2) **Runtime**: call [`set_default_sampling`] once before the first request

use crate::shape::SamplingOptions;
use core::str::FromStr;
use std::sync::OnceLock;

pub const DEFAULT_STEPS: usize = 360;
pub const DEFAULT_PRECISION: usize = 2;

/// Largest digit count a coordinate may be formatted with.
pub const MAX_PRECISION: usize = 100;

/// Largest sample count a single boundary may be traced with.
pub const MAX_STEPS: usize = 1_000_000;

static SAMPLING_CELL: OnceLock<SamplingOptions> = OnceLock::new();

fn env_usize(value: Option<&'static str>) -> Option<usize> {
    value.and_then(|v| usize::from_str(v.trim()).ok())
}

/// Returns the sampling options used when a request does not specify them.
pub fn default_sampling() -> SamplingOptions {
    *SAMPLING_CELL.get_or_init(|| {
        let steps = env_usize(option_env!("SUPERELLIPSE_STEPS"))
            .filter(|&s| s >= 1)
            .map(|s| s.min(MAX_STEPS))
            .unwrap_or(DEFAULT_STEPS);
        let precision = env_usize(option_env!("SUPERELLIPSE_PRECISION"))
            .map(|p| p.min(MAX_PRECISION))
            .unwrap_or(DEFAULT_PRECISION);
        SamplingOptions { steps, precision }
    })
}

/// Set the default sampling once (subsequent calls are ignored).
///
/// `steps` is clamped to `1..=MAX_STEPS` and `precision` to `MAX_PRECISION`.
///
/// Returns `false` when defaults were already fixed, either by an earlier
/// call or because a request has already read them.
pub fn set_default_sampling(options: SamplingOptions) -> bool {
    let options = SamplingOptions {
        steps: options.steps.clamp(1, MAX_STEPS),
        precision: options.precision.min(MAX_PRECISION),
    };
    SAMPLING_CELL.set(options).is_ok()
}
