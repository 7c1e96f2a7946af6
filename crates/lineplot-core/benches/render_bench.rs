use std::io::Write;

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lineplot_core::{load_points, Chart, FinalizeOptions, ScaleKind, Style};

fn write_series_file(n: usize) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    for i in 1..=n {
        let x = i as f64;
        writeln!(f, "{},{}", x, 1e4 / x + (x * 0.01).sin().abs()).expect("write");
    }
    f
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_points");
    for &n in &[1_000usize, 100_000usize] {
        let file = write_series_file(n);
        group.bench_function(format!("pairs_{n}"), |b| {
            b.iter(|| -> Result<()> {
                black_box(load_points(file.path())?);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 20_000usize] {
        group.bench_function(format!("log_log_{n}"), |b| {
            let file = write_series_file(n);
            let mut chart = Chart::new();
            chart.add_series(load_points(file.path()).expect("load"), Style::default(), "bench");
            let mut opts = FinalizeOptions { x_scale: ScaleKind::Log10, y_scale: ScaleKind::Log10, ..Default::default() };
            opts.render.width = 800;
            opts.render.height = 500;
            opts.render.draw_labels = false;
            let fig = chart.finalize(&opts).expect("finalize");
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&fig.options)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);
