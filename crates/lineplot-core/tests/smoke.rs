// File: crates/lineplot-core/tests/smoke.rs
// Purpose: End-to-end load -> add -> finalize run writing a PNG.

use lineplot_core::{load_points, Chart, FinalizeOptions, Point, ScaleKind, Style};

#[test]
fn load_add_finalize_writes_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("n=36.txt");
    std::fs::write(&input, "1,10\n2,20\n3,40\n").unwrap();

    let points = load_points(&input).expect("load");
    assert_eq!(points, vec![Point::new(1.0, 10.0), Point::new(2.0, 20.0), Point::new(3.0, 40.0)]);

    let mut chart = Chart::new();
    chart.add_series(points, Style::default(), "N=36");

    let out = dir.path().join("out/quicksort_eficiencia.png");
    let opts = FinalizeOptions {
        title: "T".into(),
        x_scale: ScaleKind::Log10,
        y_scale: ScaleKind::Log10,
        output: Some(out.clone()),
        ..Default::default()
    };
    let figure = chart.finalize(&opts).expect("finalize should succeed");

    let legend = figure.legend();
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].label, "N=36");

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Also verify in-memory API works
    let again = figure.render_to_png_bytes(&figure.options).expect("render bytes");
    assert!(!again.is_empty());
}

#[test]
fn output_without_extension_gets_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut chart = Chart::new();
    chart.add_series(vec![Point::new(1.0, 1.0), Point::new(2.0, 4.0)], Style::default(), "s");
    let figure = chart.finalize(&FinalizeOptions::default()).unwrap();

    let written = figure.save(dir.path().join("HashGraph")).expect("save");
    assert_eq!(written, dir.path().join("HashGraph.png"));
    assert!(written.exists());
}
