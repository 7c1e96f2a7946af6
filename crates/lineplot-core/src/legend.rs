// File: crates/lineplot-core/src/legend.rs
// Summary: Legend entries and legend box placement inside the plot rectangle.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use skia_safe as skia;

use crate::geometry::RectF;
use crate::style::Style;

/// Gap between the plot frame and the legend box, in pixels.
pub const LEGEND_PAD: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: Style,
    /// Color the series was drawn with (explicit or from the palette).
    pub color: skia::Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPlacement {
    /// Corner covering the fewest plotted points.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    /// Legend is not drawn; entries are still recorded on the figure.
    None,
}

impl LegendPlacement {
    /// Corners tried by `Best`, in order of preference on ties.
    const CANDIDATES: [LegendPlacement; 4] = [
        LegendPlacement::UpperRight,
        LegendPlacement::UpperLeft,
        LegendPlacement::LowerLeft,
        LegendPlacement::LowerRight,
    ];

    fn corner_rect(self, plot: RectF, w: f32, h: f32) -> Option<RectF> {
        let left = plot.left + LEGEND_PAD;
        let right = plot.right - LEGEND_PAD - w;
        let top = plot.top + LEGEND_PAD;
        let bottom = plot.bottom - LEGEND_PAD - h;
        let (x, y) = match self {
            LegendPlacement::UpperRight => (right, top),
            LegendPlacement::UpperLeft => (left, top),
            LegendPlacement::LowerLeft => (left, bottom),
            LegendPlacement::LowerRight => (right, bottom),
            LegendPlacement::Best | LegendPlacement::None => return None,
        };
        Some(RectF::from_ltwh(x, y, w, h))
    }

    /// Rectangle for a `w` x `h` legend box, or `None` when no legend is drawn.
    ///
    /// `points` are the plotted positions in pixels; `Best` picks the corner
    /// whose box covers the fewest of them.
    pub fn place(self, plot: RectF, w: f32, h: f32, points: &[(f32, f32)]) -> Option<RectF> {
        match self {
            LegendPlacement::None => None,
            LegendPlacement::Best => Self::CANDIDATES
                .iter()
                .filter_map(|c| c.corner_rect(plot, w, h))
                .min_by_key(|r| points.iter().filter(|&&(x, y)| r.contains(x, y)).count()),
            corner => corner.corner_rect(plot, w, h),
        }
    }
}

impl FromStr for LegendPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Ok(match norm.as_str() {
            "best" => LegendPlacement::Best,
            "upper-right" => LegendPlacement::UpperRight,
            "upper-left" => LegendPlacement::UpperLeft,
            "lower-left" => LegendPlacement::LowerLeft,
            "lower-right" => LegendPlacement::LowerRight,
            "none" | "off" => LegendPlacement::None,
            _ => return Err(format!("unknown legend placement {s:?}")),
        })
    }
}

impl fmt::Display for LegendPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LegendPlacement::Best => "best",
            LegendPlacement::UpperRight => "upper-right",
            LegendPlacement::UpperLeft => "upper-left",
            LegendPlacement::LowerLeft => "lower-left",
            LegendPlacement::LowerRight => "lower-right",
            LegendPlacement::None => "none",
        })
    }
}
