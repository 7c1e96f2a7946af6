// File: crates/lineplot-cli/src/main.rs
// Summary: `lineplot` binary; loads x,y files into one chart, saves it and optionally shows it.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lineplot_core::{load_points, Chart, LegendPlacement, ScaleKind, Style};
use tracing::info;

use crate::config::{PlotConfig, SeriesConfig};

/// Plot one or more `x,y` text files as line series on a single chart.
#[derive(Parser, Debug)]
#[command(name = "lineplot", version, about, long_about = None)]
struct Args {
    /// TOML plot description; command-line flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input file, optionally labelled: PATH or PATH@LABEL (repeatable)
    #[arg(short, long = "series", value_name = "PATH[@LABEL]")]
    series: Vec<SeriesConfig>,

    /// Style applied to every -s series, e.g. "o--", "r-", "s:"
    #[arg(long)]
    style: Option<Style>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    xlabel: Option<String>,

    #[arg(long)]
    ylabel: Option<String>,

    /// linear | log
    #[arg(long)]
    xscale: Option<ScaleKind>,

    /// linear | log
    #[arg(long)]
    yscale: Option<ScaleKind>,

    /// Output image (.png or .jpg); `.png` is appended when there is no extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// light | dark
    #[arg(long)]
    theme: Option<String>,

    /// best | upper-right | upper-left | lower-left | lower-right | none
    #[arg(long)]
    legend: Option<LegendPlacement>,

    /// Open an interactive window after saving
    #[arg(long)]
    show: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(self) -> PlotConfig {
        let style = self.style;
        PlotConfig {
            title: self.title,
            x_label: self.xlabel,
            y_label: self.ylabel,
            x_scale: self.xscale,
            y_scale: self.yscale,
            output: self.output,
            show: self.show.then_some(true),
            width: self.width,
            height: self.height,
            theme: self.theme,
            legend: self.legend,
            series: self
                .series
                .into_iter()
                .map(|s| SeriesConfig { style: s.style.or(style), ..s })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let base = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "Loading plot description");
            PlotConfig::from_file(path)?
        }
        None => PlotConfig::default(),
    };
    let plan = base.merge(args.overrides()).into_plan()?;

    let mut chart = Chart::new();
    for s in &plan.series {
        let points = load_points(&s.path).with_context(|| format!("loading series {}", s.label()))?;
        chart.add_series(points, s.style(), s.label());
    }

    let figure = chart.finalize(&plan.finalize)?;

    if plan.show {
        show(&figure)?;
    }
    Ok(())
}

#[cfg(feature = "viewer")]
fn show(figure: &lineplot_core::Figure) -> Result<()> {
    lineplot_viewer::show(figure).context("interactive display")
}

#[cfg(not(feature = "viewer"))]
fn show(_figure: &lineplot_core::Figure) -> Result<()> {
    tracing::warn!("built without the `viewer` feature; --show ignored");
    Ok(())
}
