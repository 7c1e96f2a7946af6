// File: crates/lineplot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use lineplot_core::{Chart, FinalizeOptions, RenderOptions, Style, Theme};
use lineplot_core::series::Series;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.push(Series::with_data("diag", Style::default(), vec![(0.0, 0.0), (4.0, 4.0)]));
    let figure = chart.finalize(&FinalizeOptions::default()).unwrap();

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel lies outside the plot: opaque light background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let mut chart = Chart::new();
    chart.push(Series::with_data("s", Style::default(), vec![(0.0, 1.0), (1.0, 2.0)]));
    let figure = chart.finalize(&FinalizeOptions::default()).unwrap();

    let mut opts = RenderOptions::default();
    opts.theme = Theme::dark();
    opts.draw_labels = false;
    let (px, _, _, _) = figure.render_to_rgba8(&opts).unwrap();
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn series_pixels_use_palette_color() {
    let mut chart = Chart::new();
    // flat line across the middle of the plot, solid so every pixel on it is colored
    chart.push(Series::with_data("flat", "-".parse().unwrap(), vec![(0.0, 1.0), (10.0, 1.0)]));
    let figure = chart.finalize(&FinalizeOptions::default()).unwrap();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.line_width = 4.0;
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).unwrap();

    // autoscale centers a flat series vertically inside the plot rect
    let top = opts.insets.top as usize;
    let bottom = h as usize - opts.insets.bottom as usize;
    let cy = (top + bottom) / 2;
    let cx = (opts.insets.left as usize + w as usize - opts.insets.right as usize) / 2;
    let i = cy * stride + cx * 4;
    let expected = Theme::light().series_color(0);
    assert_eq!(&px[i..i + 3], &[expected.r(), expected.g(), expected.b()]);
}
