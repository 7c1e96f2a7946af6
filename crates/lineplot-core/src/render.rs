// File: crates/lineplot-core/src/render.rs
// Summary: Canvas drawing for a finalized figure: frame, grid, ticks, series, labels, legend.

use skia_safe as skia;

use crate::axis::Axis;
use crate::chart::{Figure, RenderOptions};
use crate::geometry::RectF;
use crate::legend::LegendEntry;
use crate::scale::AxisScale;
use crate::style::{LineKind, Marker, Style};
use crate::text::TextShaper;
use crate::types::Point;

const TICK_LEN: f32 = 5.0;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 17.0;
const LEGEND_FONT: f32 = 13.0;
const LEGEND_SAMPLE: f32 = 34.0;
const LEGEND_ROW: f32 = 20.0;

pub(crate) fn draw_figure(canvas: &skia::Canvas, fig: &Figure, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let plot = RectF::from_ltrb(
        opts.insets.left as f32,
        opts.insets.top as f32,
        (opts.width - opts.insets.right as i32) as f32,
        (opts.height - opts.insets.bottom as i32) as f32,
    );
    let sx = AxisScale::new(&fig.x_axis, plot.left, plot.right);
    let sy = AxisScale::new(&fig.y_axis, plot.bottom, plot.top);

    let mut bg = skia::Paint::default();
    bg.set_color(theme.plot_background);
    canvas.draw_rect(skia::Rect::from(plot), &bg);

    draw_grid_and_ticks(canvas, plot, &fig.x_axis, &fig.y_axis, &sx, &sy, opts, shaper);

    // Series, clipped to the plot area
    let mut placed: Vec<(f32, f32)> = Vec::new();
    canvas.save();
    canvas.clip_rect(skia::Rect::from(plot), None, true);
    for (s, &color) in fig.series.iter().zip(&fig.colors) {
        for run in s.visible_runs(fig.x_axis.kind, fig.y_axis.kind) {
            let px = project(run, &sx, &sy);
            draw_run(canvas, &px, &s.style, color, opts);
            placed.extend(px);
        }
    }
    canvas.restore();

    draw_frame(canvas, plot, theme.axis_line);

    if opts.draw_labels {
        let text = theme.axis_label;
        if !fig.title.is_empty() {
            shaper.draw_centered(canvas, &fig.title, plot.center_x(), plot.top - 18.0, TITLE_FONT, theme.title, true);
        }
        if !fig.x_axis.label.is_empty() {
            let y = plot.bottom + TICK_LEN + TICK_FONT + 30.0;
            shaper.draw_centered(canvas, &fig.x_axis.label, plot.center_x(), y, LABEL_FONT, text, false);
        }
        if !fig.y_axis.label.is_empty() {
            shaper.draw_vertical(canvas, &fig.y_axis.label, 18.0, plot.center_y(), LABEL_FONT, text);
        }
    }

    draw_legend(canvas, plot, &fig.legend(), &placed, opts, shaper);
}

fn project(run: &[Point], sx: &AxisScale, sy: &AxisScale) -> Vec<(f32, f32)> {
    run.iter()
        .filter_map(|p| Some((sx.to_px(p.x)?, sy.to_px(p.y)?)))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn draw_grid_and_ticks(
    canvas: &skia::Canvas,
    plot: RectF,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &AxisScale,
    sy: &AxisScale,
    opts: &RenderOptions,
    shaper: &TextShaper,
) {
    let theme = &opts.theme;
    let mut grid = skia::Paint::default();
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);

    let mut tick = skia::Paint::default();
    tick.set_anti_alias(true);
    tick.set_color(theme.axis_line);
    tick.set_stroke_width(1.0);

    for t in x_axis.ticks() {
        let Some(x) = sx.to_px(t.value) else { continue };
        grid.set_color(grid_color(theme.grid, t.major));
        canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &tick);
        if opts.draw_labels {
            shaper.draw_centered(canvas, &t.label, x, plot.bottom + TICK_LEN + TICK_FONT + 2.0, TICK_FONT, theme.tick, false);
        }
    }
    for t in y_axis.ticks() {
        let Some(y) = sy.to_px(t.value) else { continue };
        grid.set_color(grid_color(theme.grid, t.major));
        canvas.draw_line((plot.left, y), (plot.right, y), &grid);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &tick);
        if opts.draw_labels {
            shaper.draw_right(canvas, &t.label, plot.left - TICK_LEN - 3.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick);
        }
    }
}

fn grid_color(c: skia::Color, major: bool) -> skia::Color {
    if major { c } else { c.with_a(c.a() / 2) }
}

fn draw_frame(canvas: &skia::Canvas, plot: RectF, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.25);
    paint.set_color(color);
    canvas.draw_rect(skia::Rect::from(plot), &paint);
}

fn line_paint(kind: LineKind, color: skia::Color, width: f32) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color);
    if let Some(pattern) = kind.dash_pattern() {
        let intervals: Vec<f32> = pattern.iter().map(|d| d * width).collect();
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    stroke
}

/// Connect `px` with the style's line, then put a marker on every point.
fn draw_run(canvas: &skia::Canvas, px: &[(f32, f32)], style: &Style, color: skia::Color, opts: &RenderOptions) {
    if let (Some(kind), [first, rest @ ..]) = (style.line, px) {
        if !rest.is_empty() {
            let mut path = skia::Path::new();
            path.move_to(*first);
            for &p in rest {
                path.line_to(p);
            }
            canvas.draw_path(&path, &line_paint(kind, color, opts.line_width));
        }
    }
    if let Some(marker) = style.marker {
        for &(x, y) in px {
            draw_marker(canvas, marker, x, y, opts.marker_radius, color);
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, r: f32, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    if marker.is_stroked() {
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.5);
    }
    match marker {
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &paint);
        }
        Marker::Point => {
            canvas.draw_circle((x, y), r * 0.5, &paint);
        }
        Marker::Square => {
            let h = r * 0.9;
            canvas.draw_rect(skia::Rect::from_ltrb(x - h, y - h, x + h, y + h), &paint);
        }
        Marker::TriangleUp | Marker::TriangleDown => {
            let s = if marker == Marker::TriangleUp { 1.0 } else { -1.0 };
            let mut path = skia::Path::new();
            path.move_to((x, y - s * r));
            path.line_to((x + r, y + s * r * 0.8));
            path.line_to((x - r, y + s * r * 0.8));
            path.close();
            canvas.draw_path(&path, &paint);
        }
        Marker::Cross => {
            let h = r * 0.8;
            canvas.draw_line((x - h, y - h), (x + h, y + h), &paint);
            canvas.draw_line((x - h, y + h), (x + h, y - h), &paint);
        }
        Marker::Plus => {
            canvas.draw_line((x - r, y), (x + r, y), &paint);
            canvas.draw_line((x, y - r), (x, y + r), &paint);
        }
        Marker::Star => {
            let mut path = skia::Path::new();
            for i in 0..10 {
                let rad = if i % 2 == 0 { r * 1.2 } else { r * 0.5 };
                let a = std::f32::consts::PI * (i as f32 / 5.0) - std::f32::consts::FRAC_PI_2;
                let p = (x + rad * a.cos(), y + rad * a.sin());
                if i == 0 { path.move_to(p); } else { path.line_to(p); }
            }
            path.close();
            canvas.draw_path(&path, &paint);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: RectF,
    entries: &[LegendEntry],
    placed: &[(f32, f32)],
    opts: &RenderOptions,
    shaper: &TextShaper,
) {
    if entries.is_empty() {
        return;
    }
    let text_w = if opts.draw_labels {
        entries.iter().map(|e| shaper.measure_width(&e.label, LEGEND_FONT)).fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let w = 8.0 + LEGEND_SAMPLE + 8.0 + text_w + 10.0;
    let h = 6.0 + LEGEND_ROW * entries.len() as f32 + 6.0;
    let Some(bx) = opts.legend.place(plot, w, h, placed) else { return };

    let theme = &opts.theme;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    let rect = skia::Rect::from(bx);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    for (i, e) in entries.iter().enumerate() {
        let cy = bx.top + 6.0 + LEGEND_ROW * (i as f32 + 0.5);
        let x0 = bx.left + 8.0;
        let x1 = x0 + LEGEND_SAMPLE;
        if let Some(kind) = e.style.line {
            canvas.draw_line((x0, cy), (x1, cy), &line_paint(kind, e.color, opts.line_width));
        }
        if let Some(marker) = e.style.marker {
            draw_marker(canvas, marker, (x0 + x1) * 0.5, cy, opts.marker_radius, e.color);
        }
        if opts.draw_labels {
            shaper.draw_left(canvas, &e.label, x1 + 8.0, cy + LEGEND_FONT * 0.35, LEGEND_FONT, theme.axis_label);
        }
    }
}
