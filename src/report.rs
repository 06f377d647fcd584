//! Console report: simulated vs. theoretical commute time, and a text histogram.

use crate::stats::Histogram;
use crate::{Error, Result};
use std::fmt::{self, Write as _};

/// Numbers printed for one `(u, v)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub u: String,
    pub v: String,
    pub mean_uv: f64,
    pub mean_vu: f64,
    pub simulated_commute: f64,
    pub resistance: f64,
    pub theoretical_commute: f64,
}

impl Report {
    /// `|simulated - theoretical| / theoretical`.
    pub fn relative_error(&self) -> f64 {
        (self.simulated_commute - self.theoretical_commute).abs() / self.theoretical_commute
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (u, v) = (&self.u, &self.v);
        writeln!(f, "----- SIMULATION RESULTS -----")?;
        writeln!(f, "Average H_uv ({u} → {v}): {:.2}", self.mean_uv)?;
        writeln!(f, "Average H_vu ({v} → {u}): {:.2}", self.mean_vu)?;
        writeln!(f, "Simulated Commute Time: {:.2}", self.simulated_commute)?;
        writeln!(f)?;
        writeln!(f, "----- THEORETICAL RESULTS -----")?;
        writeln!(f, "Effective Resistance R_uv: {:.4}", self.resistance)?;
        write!(f, "Theoretical Commute Time (2mR): {:.2}", self.theoretical_commute)
    }
}

const GLYPHS: [char; 4] = ['#', '=', '+', '*'];

/// Render histograms that share bin edges as horizontal bars, one row per
/// series per bin, scaled so the tallest count spans `bar_width` columns.
pub fn render_histogram(title: &str, series: &[(&str, &Histogram)], bar_width: usize) -> Result<String> {
    let Some((_, first)) = series.first() else {
        return Err(Error::InvalidParameter("no histogram series to render".into()));
    };
    if series.len() > GLYPHS.len() {
        return Err(Error::InvalidParameter(format!("at most {} series", GLYPHS.len())));
    }
    if series.iter().any(|(_, h)| h.edges != first.edges) {
        return Err(Error::InvalidParameter("histogram series must share bin edges".into()));
    }

    let peak = series.iter().map(|(_, h)| h.max_count()).max().unwrap_or(0).max(1);
    let name_w = series.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
    let last = first.bins() - 1;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{:>15}   Frequency", "Number of Steps");
    for bin in 0..first.bins() {
        let lo = first.edges[bin];
        let hi = first.edges[bin + 1];
        let close = if bin == last { ']' } else { ')' };
        for (k, (name, h)) in series.iter().enumerate() {
            let count = h.counts[bin];
            let len = (count * bar_width).div_ceil(peak);
            let range = if k == 0 { format!("[{lo:>4},{hi:>4}{close}") } else { String::new() };
            let bar: String = std::iter::repeat(GLYPHS[k]).take(len).collect();
            let _ = writeln!(out, "{range:>11} {name:<name_w$} |{bar} {count}");
        }
    }
    let _ = write!(out, "Legend:");
    for (k, (name, _)) in series.iter().enumerate() {
        let _ = write!(out, "  {} {name}", GLYPHS[k]);
    }
    let _ = writeln!(out);
    Ok(out)
}
