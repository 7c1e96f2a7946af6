// File: crates/lineplot-core/src/loader.rs
// Summary: Reads `x,y` text files (one pair per line, no header) into ordered points.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, Result};
use crate::series::Series;
use crate::style::Style;
use crate::types::Point;

/// Load every `x,y` line of `path`, in file order.
///
/// Blank lines are skipped and whitespace around each field is ignored. Any
/// other line must hold exactly two finite float literals, otherwise the
/// whole load fails and nothing is returned.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PlotError::NotFound { path: path.to_path_buf() },
        _ => PlotError::io(path, e),
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| csv_error(path, e))?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        if rec.len() == 1 && rec[0].is_empty() {
            continue;
        }
        if rec.len() != 2 {
            return Err(parse_error(path, line, format!("expected 2 comma-separated fields, found {}", rec.len())));
        }
        let x = parse_field(path, line, &rec[0])?;
        let y = parse_field(path, line, &rec[1])?;
        out.push(Point { x, y });
    }

    debug!(path = %path.display(), points = out.len(), "loaded series file");
    Ok(out)
}

/// Load `path` and wrap the points into a labeled series.
pub fn load_series(path: impl AsRef<Path>, label: impl Into<String>, style: Style) -> Result<Series> {
    Ok(Series::new(label, style, load_points(path)?))
}

fn parse_field(path: &Path, line: u64, field: &str) -> Result<f64> {
    let v: f64 = field
        .parse()
        .map_err(|_| parse_error(path, line, format!("{field:?} is not a number")))?;
    if !v.is_finite() {
        return Err(parse_error(path, line, format!("{field:?} is not a finite number")));
    }
    Ok(v)
}

fn parse_error(path: &Path, line: u64, reason: String) -> PlotError {
    PlotError::Parse { path: path.to_path_buf(), line, reason }
}

fn csv_error(path: &Path, err: csv::Error) -> PlotError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => PlotError::io(path, e),
        csv::ErrorKind::Utf8 { err, .. } => parse_error(path, line, err.to_string()),
        other => parse_error(path, line, format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_with(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(content.as_bytes()).expect("write");
        f
    }

    #[test]
    fn loads_in_file_order() {
        let f = file_with("1,10\n2,20\n3,40\n");
        let pts = load_points(f.path()).unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 10.0), Point::new(2.0, 20.0), Point::new(3.0, 40.0)]);
    }

    #[test]
    fn tolerates_whitespace_and_blank_lines() {
        let f = file_with(" 1.5 , 2e3\r\n\n4,-0.25\n   \n");
        let pts = load_points(f.path()).unwrap();
        assert_eq!(pts, vec![Point::new(1.5, 2000.0), Point::new(4.0, -0.25)]);
    }

    #[test]
    fn no_trailing_newline() {
        let f = file_with("7,8");
        assert_eq!(load_points(f.path()).unwrap(), vec![Point::new(7.0, 8.0)]);
    }

    #[test]
    fn one_field_is_a_parse_error_with_line() {
        let f = file_with("1,2\n3\n4,5\n");
        match load_points(f.path()) {
            Err(PlotError::Parse { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 1"), "{reason}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn three_fields_is_a_parse_error() {
        let f = file_with("1,2,3\n");
        assert!(matches!(load_points(f.path()), Err(PlotError::Parse { line: 1, .. })));
    }

    #[test]
    fn non_numeric_and_non_finite_tokens() {
        let f = file_with("1,2\n3,abc\n");
        assert!(matches!(load_points(f.path()), Err(PlotError::Parse { line: 2, .. })));
        let f = file_with("nan,1\n");
        assert!(matches!(load_points(f.path()), Err(PlotError::Parse { line: 1, .. })));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("n=36.txt");
        match load_points(&missing) {
            Err(PlotError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn load_series_keeps_label_and_style() {
        let f = file_with("1,1\n");
        let s = load_series(f.path(), "N=36", "x:".parse().unwrap()).unwrap();
        assert_eq!(s.label, "N=36");
        assert_eq!(s.len(), 1);
        assert_eq!(s.style.marker, Some(crate::style::Marker::Cross));
    }
}
