// File: crates/lineplot-core/src/series.rs
// Summary: Series model: a labeled, ordered run of (x, y) points with its draw style.

use crate::axis::ScaleKind;
use crate::style::Style;
use crate::types::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: Style,
    /// File order; consecutive points are joined when the style draws a line.
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(label: impl Into<String>, style: Style, points: Vec<Point>) -> Self {
        Self { label: label.into(), style, points }
    }

    /// Build from raw pairs, mostly for tests and demos.
    pub fn with_data(label: impl Into<String>, style: Style, data: Vec<(f64, f64)>) -> Self {
        Self::new(label, style, data.into_iter().map(Point::from).collect())
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Points that can be placed on axes of the given kinds.
    pub fn visible_points(&self, x: ScaleKind, y: ScaleKind) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(move |p| x.admits(p.x) && y.admits(p.y))
    }

    /// Number of points hidden by the axis kinds (non-positive on a log axis).
    pub fn masked_count(&self, x: ScaleKind, y: ScaleKind) -> usize {
        self.len() - self.visible_points(x, y).count()
    }

    /// Maximal runs of consecutive placeable points; a masked point breaks the line.
    pub fn visible_runs(&self, x: ScaleKind, y: ScaleKind) -> Vec<&[Point]> {
        self.points
            .split(|p| !(x.admits(p.x) && y.admits(p.y)))
            .filter(|run| !run.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_break_at_masked_points() {
        let s = Series::with_data(
            "s",
            Style::default(),
            vec![(1.0, 1.0), (2.0, 0.0), (3.0, 4.0), (4.0, 8.0), (-1.0, 2.0)],
        );
        let runs = s.visible_runs(ScaleKind::Linear, ScaleKind::Log10);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], &[Point::new(1.0, 1.0)]);
        assert_eq!(runs[1].len(), 3);
        assert_eq!(s.masked_count(ScaleKind::Linear, ScaleKind::Log10), 1);
        assert_eq!(s.masked_count(ScaleKind::Log10, ScaleKind::Log10), 2);
        assert_eq!(s.masked_count(ScaleKind::Linear, ScaleKind::Linear), 0);
    }
}
