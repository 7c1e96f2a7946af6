// File: crates/lineplot-core/src/chart.rs
// Summary: Chart accumulator, finalize step and the Figure encode/save pipeline (Skia CPU raster).

use std::path::{Path, PathBuf};

use image::ImageEncoder;
use skia_safe as skia;
use tracing::{info, warn};

use crate::axis::{Axis, ScaleKind};
use crate::error::{PlotError, Result};
use crate::legend::{LegendEntry, LegendPlacement};
use crate::render::draw_figure;
use crate::series::Series;
use crate::style::Style;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, Point, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
    pub legend: LegendPlacement,
    pub line_width: f32,
    pub marker_radius: f32,
    pub jpeg_quality: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            legend: LegendPlacement::Best,
            line_width: 1.5,
            marker_radius: 4.0,
            jpeg_quality: 90,
        }
    }
}

/// Presentation applied by [`Chart::finalize`].
#[derive(Clone, Debug, Default)]
pub struct FinalizeOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    /// Written during `finalize` when set.
    pub output: Option<PathBuf>,
    pub render: RenderOptions,
}

/// Accumulates series until the chart is finalized.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    series: Vec<Series>,
}

impl Chart {
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    /// Queue `points` for drawing with `style` and register `label` for the legend.
    pub fn add_series(&mut self, points: Vec<Point>, style: Style, label: impl Into<String>) {
        self.push(Series::new(label, style, points));
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Resolve axes and colors, then write `opts.output` if set.
    pub fn finalize(self, opts: &FinalizeOptions) -> Result<Figure> {
        let (xk, yk) = (opts.x_scale, opts.y_scale);
        for s in &self.series {
            let masked = s.masked_count(xk, yk);
            if masked > 0 {
                warn!(series = %s.label, masked, "points outside the log axis domain are not drawn");
            }
        }

        let mut x_axis = Axis::new(opts.x_label.clone(), 0.0, 1.0).with_kind(xk);
        let mut y_axis = Axis::new(opts.y_label.clone(), 0.0, 1.0).with_kind(yk);
        x_axis.autoscale(self.series.iter().flat_map(|s| s.visible_points(xk, yk)).map(|p| p.x));
        y_axis.autoscale(self.series.iter().flat_map(|s| s.visible_points(xk, yk)).map(|p| p.y));

        let theme = &opts.render.theme;
        let mut next_palette = 0;
        let colors = self
            .series
            .iter()
            .map(|s| {
                s.style.color.unwrap_or_else(|| {
                    let c = theme.series_color(next_palette);
                    next_palette += 1;
                    c
                })
            })
            .collect();

        let figure = Figure {
            title: opts.title.clone(),
            series: self.series,
            colors,
            x_axis,
            y_axis,
            options: opts.render.clone(),
        };
        if let Some(out) = &opts.output {
            figure.save(out)?;
        }
        Ok(figure)
    }
}

/// Output encodings, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Format for `path` and the path actually written; a path without an
    /// extension gets `.png` appended.
    pub fn for_path(path: &Path) -> Result<(Self, PathBuf)> {
        let Some(ext) = path.extension() else {
            return Ok((ImageFormat::Png, path.with_extension("png")));
        };
        let ext = ext.to_string_lossy().to_ascii_lowercase();
        match ext.as_str() {
            "png" => Ok((ImageFormat::Png, path.to_path_buf())),
            "jpg" | "jpeg" => Ok((ImageFormat::Jpeg, path.to_path_buf())),
            _ => Err(PlotError::UnsupportedFormat { path: path.to_path_buf(), ext }),
        }
    }
}

/// A finalized chart: immutable, ready to encode or display.
#[derive(Clone, Debug)]
pub struct Figure {
    pub title: String,
    pub series: Vec<Series>,
    /// Resolved draw color per series, same order as `series`.
    pub colors: Vec<skia::Color>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Options captured at finalize; `save` uses these.
    pub options: RenderOptions,
}

impl Figure {
    /// One entry per series, in add order.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .zip(&self.colors)
            .map(|(s, &color)| LegendEntry { label: s.label.clone(), style: s.style, color })
            .collect()
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= opts.insets.hsum() as i32 || opts.height <= opts.insets.vsum() as i32 {
            return Err(PlotError::Render(format!(
                "{}x{} leaves no room for the plot inside {:?}",
                opts.width, opts.height, opts.insets
            )));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| PlotError::Render(format!("failed to create {}x{} raster surface", opts.width, opts.height)))?;
        let shaper = TextShaper::new();
        draw_figure(surface.canvas(), self, opts, &shaper);
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(PlotError::Render("pixel readback failed".into()));
        }
        Ok((px, w as u32, h as u32, stride))
    }

    pub fn encode(&self, format: ImageFormat, opts: &RenderOptions) -> Result<Vec<u8>> {
        match format {
            ImageFormat::Png => self.render_to_png_bytes(opts),
            ImageFormat::Jpeg => {
                let (px, w, h, _) = self.render_to_rgba8(opts)?;
                let rgba = image::RgbaImage::from_raw(w, h, px)
                    .ok_or_else(|| PlotError::Render("pixel buffer size mismatch".into()))?;
                let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
                let mut out = Vec::new();
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, opts.jpeg_quality)
                    .write_image(rgb.as_raw(), w, h, image::ExtendedColorType::Rgb8)
                    .map_err(|e| PlotError::Render(format!("encode JPEG failed: {e}")))?;
                Ok(out)
            }
        }
    }

    /// Encode with the finalize-time options and write to `path`.
    /// Returns the path written (`.png` appended when `path` has no extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.save_with(path, &self.options)
    }

    pub fn save_with(&self, path: impl AsRef<Path>, opts: &RenderOptions) -> Result<PathBuf> {
        let (format, path) = ImageFormat::for_path(path.as_ref())?;
        // Encode fully before touching the filesystem so a failure leaves no file.
        let bytes = self.encode(format, opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlotError::io(parent, e))?;
        }
        std::fs::write(&path, &bytes).map_err(|e| PlotError::io(&path, e))?;
        info!(path = %path.display(), bytes = bytes.len(), series = self.series.len(), "wrote chart");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        let (f, p) = ImageFormat::for_path(Path::new("out/quicksort_eficiencia")).unwrap();
        assert_eq!(f, ImageFormat::Png);
        assert_eq!(p, PathBuf::from("out/quicksort_eficiencia.png"));

        let (f, _) = ImageFormat::for_path(Path::new("HashGraph.JPG")).unwrap();
        assert_eq!(f, ImageFormat::Jpeg);

        assert!(matches!(
            ImageFormat::for_path(Path::new("chart.bmp")),
            Err(PlotError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn palette_skips_explicit_colors() {
        let mut chart = Chart::new();
        chart.add_series(vec![], Style::default(), "a");
        chart.add_series(vec![], "r-".parse().unwrap(), "b");
        chart.add_series(vec![], Style::default(), "c");
        let fig = chart.finalize(&FinalizeOptions::default()).unwrap();
        let theme = Theme::light();
        assert_eq!(fig.colors, vec![theme.series_color(0), skia::Color::from_rgb(255, 0, 0), theme.series_color(1)]);
    }

    #[test]
    fn autoscale_follows_scales() {
        let mut chart = Chart::new();
        chart.add_series(vec![Point::new(1.0, 10.0), Point::new(100.0, 0.0), Point::new(1000.0, 1e4)], Style::default(), "s");
        let opts = FinalizeOptions { x_scale: ScaleKind::Log10, y_scale: ScaleKind::Log10, ..Default::default() };
        let fig = chart.finalize(&opts).unwrap();
        assert_eq!(fig.x_axis.kind, ScaleKind::Log10);
        // the (100, 0) point is masked on a log y axis and ignored on x too
        assert!(fig.x_axis.min < 1.0 && fig.x_axis.max > 1000.0);
        assert!(fig.y_axis.min > 1.0 && fig.y_axis.min < 10.0);
    }
}
