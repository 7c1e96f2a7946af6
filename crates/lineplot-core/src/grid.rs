// File: crates/lineplot-core/src/grid.rs
// Summary: Grid/tick layout helpers for linear and log10 axes.

/// One tick on an axis: its data value and the text drawn next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Decade ticks on log axes; every tick on linear axes.
    pub major: bool,
}

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&n| n >= norm - 1e-9)
        .unwrap_or(10.0);
    nice * mag
}

/// Evenly spaced ticks at a "nice" step, roughly `target` of them.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<Tick> {
    let n = target.max(1) as f64;
    // divide first so ranges near f64::MAX do not overflow
    let raw = max / n - min / n;
    if !(raw.is_finite() && raw > 0.0) { return Vec::new(); }
    let step = nice_step(raw);
    if !step.is_finite() { return Vec::new(); }
    let decimals = decimals_for(step);
    let scientific = step >= 1e6;
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|i| {
            let mut value = i as f64 * step;
            if value.abs() < step * 1e-9 { value = 0.0; }
            let label = if scientific { format!("{value:e}") } else { format!("{value:.decimals$}") };
            Tick { value, label, major: true }
        })
        .collect()
}

/// Decade ticks, with 2x/5x (or every mantissa) when the range is narrow.
pub fn log_ticks(min: f64, max: f64) -> Vec<Tick> {
    if !(min > 0.0 && max > min && max.is_finite()) { return Vec::new(); }
    let (lmin, lmax) = (min.log10(), max.log10());
    let decades = lmax - lmin;
    let mantissas: &[f64] = if decades >= 3.0 {
        &[1.0]
    } else if decades >= 1.0 {
        &[1.0, 2.0, 5.0]
    } else {
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
    };
    // at most ~10 labelled decades
    let every = ((decades / 10.0).ceil() as i32).max(1);
    let (lo, hi) = (min * (1.0 - 1e-9), max * (1.0 + 1e-9));
    let mut out = Vec::new();
    for k in (lmin.floor() as i32)..=(lmax.ceil() as i32) {
        if k.rem_euclid(every) != 0 { continue; }
        for &m in mantissas {
            let value = m * 10f64.powi(k);
            if !value.is_finite() || value < lo || value > hi { continue; }
            out.push(Tick { value, label: format_log(m, k), major: m == 1.0 });
        }
    }
    out
}

fn decimals_for(step: f64) -> usize {
    let mut d = (-step.log10().floor()).max(0.0) as usize;
    // 2.5 * 10^k needs one more digit than the power alone.
    let scaled = step * 10f64.powi(d as i32);
    if (scaled - scaled.round()).abs() > 1e-6 { d += 1; }
    d
}

fn format_log(mantissa: f64, exp: i32) -> String {
    if (-3..4).contains(&exp) {
        let decimals = (-exp).max(0) as usize;
        format!("{:.*}", decimals, mantissa * 10f64.powi(exp))
    } else {
        format!("{}e{}", mantissa as i64, exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ticks: &[Tick]) -> Vec<&str> {
        ticks.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn nice_steps() {
        approx::assert_relative_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.7), 2.0);
        assert_eq!(nice_step(2.2), 2.5);
        assert_eq!(nice_step(32.0), 50.0);
    }

    #[test]
    fn linear_ticks_cover_range() {
        let t = linear_ticks(-0.5, 10.5, 6);
        assert_eq!(labels(&t), ["0", "2", "4", "6", "8", "10"]);
        let t = linear_ticks(0.0, 1.0, 4);
        assert_eq!(labels(&t), ["0.00", "0.25", "0.50", "0.75", "1.00"]);
    }

    #[test]
    fn log_ticks_by_width() {
        let wide = log_ticks(0.5, 2e5);
        assert_eq!(labels(&wide), ["1", "10", "100", "1000", "1e4", "1e5"]);
        assert!(wide.iter().all(|t| t.major));

        let mid = log_ticks(1.0, 100.0);
        assert_eq!(labels(&mid), ["1", "2", "5", "10", "20", "50", "100"]);

        let huge = log_ticks(1e-15, f64::MAX);
        assert!(huge.len() <= 12, "{}", huge.len());
        assert!(huge.iter().all(|t| t.value.is_finite()));

        let narrow = log_ticks(11.0, 19.0);
        assert!(narrow.is_empty());
        let narrow = log_ticks(11.0, 45.0);
        assert_eq!(labels(&narrow), ["20", "30", "40"]);
    }

    #[test]
    fn log_small_values() {
        let t = log_ticks(0.001, 0.1);
        assert_eq!(labels(&t), ["0.001", "0.002", "0.005", "0.01", "0.02", "0.05", "0.1"]);
    }

    #[test]
    fn huge_linear_ranges_keep_ticks() {
        let t = linear_ticks(4.5e16, 1.55e17, 6);
        assert!(!t.is_empty());
        assert_eq!(t[0].label, "6e16");

        let t = linear_ticks(-1.1e308, 1.1e308, 6);
        assert!(!t.is_empty());
        assert!(t.iter().all(|t| t.value.is_finite()));
        assert!(t.iter().any(|t| t.label == "0e0"));
    }
}
