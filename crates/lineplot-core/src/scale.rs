// File: crates/lineplot-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

use crate::axis::{clamp_finite, widen_degenerate, Axis, ScaleKind, MIN_LOG_VALUE};

/// Maps one data dimension onto a pixel interval.
///
/// `px_at_min` is the pixel where `axis.min` lands and `px_at_max` the one
/// for `axis.max`; for a vertical axis pass bottom then top so values grow
/// upwards on screen.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    px_at_min: f32,
    px_at_max: f32,
    kind: ScaleKind,
    // low end and half the span in the transformed domain (log10 for Log10);
    // halves keep `hi - lo` finite for ranges spanning most of f64
    lo: f64,
    half_span: f64,
}

impl AxisScale {
    pub fn new(axis: &Axis, px_at_min: f32, px_at_max: f32) -> Self {
        let (lo, hi) = match axis.kind {
            ScaleKind::Linear => (clamp_finite(axis.min), clamp_finite(axis.max)),
            ScaleKind::Log10 => {
                let vmin = axis.min.max(MIN_LOG_VALUE);
                let vmax = axis.max.max(vmin).min(f64::MAX);
                (vmin.log10(), vmax.log10())
            }
        };
        let (lo, hi) = widen_degenerate(lo, hi);
        Self { px_at_min, px_at_max, kind: axis.kind, lo, half_span: hi * 0.5 - lo * 0.5 }
    }

    /// Pixel coordinate of `v`, or `None` when the axis cannot place it
    /// (non-positive on a log axis, non-finite anywhere).
    #[inline]
    pub fn to_px(&self, v: f64) -> Option<f32> {
        if !self.kind.admits(v) { return None; }
        let t = match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.log10(),
        };
        let frac = (t * 0.5 - self.lo * 0.5) / self.half_span;
        Some(self.px_at_min + frac as f32 * (self.px_at_max - self.px_at_min))
    }
}
