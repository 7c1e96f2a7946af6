// File: crates/lineplot-core/tests/loader.rs
// Purpose: Series file loading properties: order, exact values, failure modes.

use std::fmt::Write as _;

use lineplot_core::{load_points, load_series, PlotError, Point, Style};

#[test]
fn written_pairs_load_back_exactly() {
    let pairs: Vec<(f64, f64)> = (1..=50)
        .map(|i| {
            let n = i as f64;
            (n * 36.0, 1.0 / n + n.sqrt() * 1e-3)
        })
        .collect();
    let mut text = String::new();
    for (x, y) in &pairs {
        writeln!(text, "{x},{y}").unwrap();
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timings.txt");
    std::fs::write(&path, text).unwrap();

    let loaded = load_points(&path).unwrap();
    assert_eq!(loaded.len(), pairs.len());
    for (p, &(x, y)) in loaded.iter().zip(&pairs) {
        assert_eq!(*p, Point::new(x, y));
    }
}

#[test]
fn unsorted_and_duplicate_points_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw.txt");
    std::fs::write(&path, "3,1\n1,1\n1,1\n2,-5\n").unwrap();
    let xs: Vec<f64> = load_points(&path).unwrap().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 1.0, 2.0]);
}

#[test]
fn malformed_line_fails_without_partial_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "1,2\n2,4\n8\n").unwrap();

    let err = load_series(&path, "bad", Style::default()).unwrap_err();
    match &err {
        PlotError::Parse { path: p, line, .. } => {
            assert_eq!(p, &path);
            assert_eq!(*line, 3);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    // diagnostic names file and line
    let msg = err.to_string();
    assert!(msg.contains("bad.txt:3"), "{msg}");
}

#[test]
fn header_row_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.txt");
    std::fs::write(&path, "x,y\n1,2\n").unwrap();
    assert!(matches!(load_points(&path), Err(PlotError::Parse { line: 1, .. })));
}

#[test]
fn empty_file_is_an_empty_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();
    assert!(load_points(&path).unwrap().is_empty());
}

#[test]
fn missing_file_reports_path() {
    let err = load_points("definitely/not/here/n=576.txt").unwrap_err();
    assert!(matches!(err, PlotError::NotFound { .. }));
    assert!(err.to_string().contains("n=576.txt"));
}
