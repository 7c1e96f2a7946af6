// File: crates/lineplot-core/src/lib.rs
// Summary: Core library entry point; exports the loader, chart accumulator and figure rendering API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod style;
pub mod legend;
pub mod loader;
pub mod error;
mod render;

pub use chart::{Chart, Figure, FinalizeOptions, ImageFormat, RenderOptions};
pub use series::Series;
pub use axis::{Axis, ScaleKind};
pub use types::Point;
pub use theme::Theme;
pub use text::TextShaper;
pub use style::{LineKind, Marker, Style};
pub use legend::{LegendEntry, LegendPlacement};
pub use loader::{load_points, load_series};
pub use error::{PlotError, StyleError};
