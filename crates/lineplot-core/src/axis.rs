// File: crates/lineplot-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and data-driven autoscale.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::grid::{linear_ticks, log_ticks, Tick};

/// Fraction of the data span added on both ends when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Smallest positive f64 (subnormal); lower bound of any log axis.
pub(crate) const MIN_LOG_VALUE: f64 = 5e-324;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ScaleKind {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "log", alias = "log10")]
    Log10,
}

impl ScaleKind {
    /// Whether `v` can be placed on an axis of this kind.
    #[inline]
    pub fn admits(self, v: f64) -> bool {
        match self {
            ScaleKind::Linear => v.is_finite(),
            ScaleKind::Log10 => v.is_finite() && v > 0.0,
        }
    }
}

impl FromStr for ScaleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(ScaleKind::Linear),
            "log" | "log10" => Ok(ScaleKind::Log10),
            other => Err(format!("unknown scale {other:?} (expected `linear` or `log`)")),
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScaleKind::Linear => "linear",
            ScaleKind::Log10 => "log",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Fit the range to `values`, ignoring values the scale cannot place.
    ///
    /// The result is always a finite, non-empty range.
    pub fn autoscale(&mut self, values: impl IntoIterator<Item = f64>) {
        let kind = self.kind;
        let (lo, hi) = values
            .into_iter()
            .filter(|&v| kind.admits(v))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        match kind {
            ScaleKind::Linear => {
                if !lo.is_finite() {
                    (self.min, self.max) = (0.0, 1.0);
                    return;
                }
                let (lo, hi) = widen_degenerate(lo, hi);
                // halves keep the span finite near f64::MAX
                let m = (hi * 0.5 - lo * 0.5) * 2.0 * AUTOSCALE_MARGIN;
                (self.min, self.max) = (clamp_finite(lo - m), clamp_finite(hi + m));
            }
            ScaleKind::Log10 => {
                if !lo.is_finite() {
                    (self.min, self.max) = (1.0, 10.0);
                    return;
                }
                let (llo, lhi) = (lo.log10(), hi.log10());
                let (llo, lhi) = if lhi - llo < 1e-12 { (llo - 0.5, lhi + 0.5) } else { (llo, lhi) };
                let m = (lhi - llo) * AUTOSCALE_MARGIN;
                (self.min, self.max) = (
                    10f64.powf(llo - m).max(MIN_LOG_VALUE),
                    10f64.powf(lhi + m).min(f64::MAX),
                );
            }
        }
    }

    /// Tick positions for the current range.
    pub fn ticks(&self) -> Vec<Tick> {
        match self.kind {
            ScaleKind::Linear => linear_ticks(self.min, self.max, 6),
            ScaleKind::Log10 => log_ticks(self.min, self.max),
        }
    }
}

/// Open up a range whose ends coincide (at the data's precision) by half the
/// magnitude of the data, or 0.5 around zero.
pub(crate) fn widen_degenerate(lo: f64, hi: f64) -> (f64, f64) {
    let mag = lo.abs().max(hi.abs());
    if hi * 0.5 - lo * 0.5 > mag * 1e-12 {
        return (lo, hi);
    }
    let pad = (mag * 0.5).max(0.5);
    (clamp_finite(lo - pad), clamp_finite(hi + pad))
}

pub(crate) fn clamp_finite(v: f64) -> f64 {
    v.clamp(-f64::MAX, f64::MAX)
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
