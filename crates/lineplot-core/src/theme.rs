// File: crates/lineplot-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and the series color cycle.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Colors handed to series without an explicit color, cycling in add order.
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 228, 228, 232),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            title: skia::Color::from_argb(255, 10, 10, 15),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            // tab10
            palette: [
                skia::Color::from_rgb(0x1f, 0x77, 0xb4),
                skia::Color::from_rgb(0xff, 0x7f, 0x0e),
                skia::Color::from_rgb(0x2c, 0xa0, 0x2c),
                skia::Color::from_rgb(0xd6, 0x27, 0x28),
                skia::Color::from_rgb(0x94, 0x67, 0xbd),
                skia::Color::from_rgb(0x8c, 0x56, 0x4b),
                skia::Color::from_rgb(0xe3, 0x77, 0xc2),
                skia::Color::from_rgb(0x7f, 0x7f, 0x7f),
                skia::Color::from_rgb(0xbc, 0xbd, 0x22),
                skia::Color::from_rgb(0x17, 0xbe, 0xcf),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 27),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_rgb(64, 160, 255),
                skia::Color::from_rgb(255, 160, 64),
                skia::Color::from_rgb(40, 200, 120),
                skia::Color::from_rgb(220, 80, 80),
                skia::Color::from_rgb(180, 140, 255),
                skia::Color::from_rgb(200, 150, 110),
                skia::Color::from_rgb(255, 130, 210),
                skia::Color::from_rgb(170, 170, 170),
                skia::Color::from_rgb(220, 220, 70),
                skia::Color::from_rgb(70, 220, 235),
            ],
        }
    }

    /// Palette color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
