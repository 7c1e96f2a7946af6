// File: crates/lineplot-cli/src/config.rs
// Summary: TOML plot description, -s series arguments and CLI override merging.

//! Plot description: TOML file plus command-line overrides.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use lineplot_core::{theme, FinalizeOptions, LegendPlacement, RenderOptions, ScaleKind, Style};
use serde::Deserialize;
use thiserror::Error;

/// Output used when neither `--output` nor `--show` is given.
pub const DEFAULT_OUTPUT: &str = "plot.png";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown theme {0:?} (expected `light` or `dark`)")]
    UnknownTheme(String),
    #[error("no input series; pass -s PATH[@LABEL] or list [[series]] in a config file")]
    NoSeries,
}

/// One input file and how to draw it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    pub path: PathBuf,
    /// Defaults to the file stem.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<Style>,
}

impl SeriesConfig {
    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            self.path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string())
        })
    }

    pub fn style(&self) -> Style {
        self.style.unwrap_or_default()
    }
}

/// `-s PATH[@LABEL]`. The label is split at the last `@`, since series
/// files are commonly named like `n=36.txt`.
impl FromStr for SeriesConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, label) = match s.rsplit_once('@') {
            Some((path, label)) => (path, Some(label.to_string())),
            None => (s, None),
        };
        if path.is_empty() {
            return Err(format!("missing path in series argument {s:?}"));
        }
        Ok(SeriesConfig { path: PathBuf::from(path), label, style: None })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub x_scale: Option<ScaleKind>,
    #[serde(default)]
    pub y_scale: Option<ScaleKind>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub legend: Option<LegendPlacement>,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

impl PlotConfig {
    /// Read a TOML plot description. Relative series paths resolve against
    /// the config file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let mut cfg: PlotConfig = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        if let Some(base) = path.parent() {
            for s in &mut cfg.series {
                if s.path.is_relative() {
                    s.path = base.join(&s.path);
                }
            }
        }
        Ok(cfg)
    }

    /// Overlay `other` on top of `self`: set fields win, series append.
    pub fn merge(mut self, other: PlotConfig) -> Self {
        macro_rules! take {
            ($($f:ident),*) => { $( if other.$f.is_some() { self.$f = other.$f; } )* };
        }
        take!(title, x_label, y_label, x_scale, y_scale, output, show, width, height, theme, legend);
        self.series.extend(other.series);
        self
    }

    /// Final series list, finalize options and whether to open a window.
    pub fn into_plan(self) -> Result<Plan, ConfigError> {
        if self.series.is_empty() {
            return Err(ConfigError::NoSeries);
        }
        let mut render = RenderOptions::default();
        if let Some(w) = self.width { render.width = w; }
        if let Some(h) = self.height { render.height = h; }
        if let Some(l) = self.legend { render.legend = l; }
        if let Some(name) = &self.theme {
            render.theme = theme::find(name).ok_or_else(|| ConfigError::UnknownTheme(name.clone()))?;
        }

        let show = self.show.unwrap_or(false);
        let output = match self.output {
            Some(o) => Some(o),
            None if show => None,
            None => Some(PathBuf::from(DEFAULT_OUTPUT)),
        };

        Ok(Plan {
            series: self.series,
            finalize: FinalizeOptions {
                title: self.title.unwrap_or_default(),
                x_label: self.x_label.unwrap_or_default(),
                y_label: self.y_label.unwrap_or_default(),
                x_scale: self.x_scale.unwrap_or_default(),
                y_scale: self.y_scale.unwrap_or_default(),
                output,
                render,
            },
            show,
        })
    }
}

#[derive(Debug)]
pub struct Plan {
    pub series: Vec<SeriesConfig>,
    pub finalize: FinalizeOptions,
    pub show: bool,
}
