//! Sample summaries: means and fixed-width histograms.

use crate::{Error, Result};

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(samples: &[usize]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().map(|&x| x as f64).sum::<f64>() / samples.len() as f64
}

/// Bin edges `start, start + width, ...` strictly below `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramConfig {
    pub start: usize,
    pub stop: usize,
    pub width: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { start: 0, stop: 110, width: 3 }
    }
}

/// Counts per bin. Bin `i` covers `[edges[i], edges[i + 1])`; the last bin is
/// closed on the right. Samples outside `[edges[0], edges[last]]` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub edges: Vec<usize>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn new(samples: &[usize], config: HistogramConfig) -> Result<Self> {
        if config.width == 0 {
            return Err(Error::InvalidParameter("histogram bin width must be positive".into()));
        }
        let edges: Vec<usize> = (config.start..config.stop).step_by(config.width).collect();
        if edges.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "histogram range {}..{} holds fewer than two edges",
                config.start, config.stop
            )));
        }
        let lo = edges[0];
        let hi = edges[edges.len() - 1];
        let bins = edges.len() - 1;
        let mut counts = vec![0usize; bins];
        for &x in samples {
            if x < lo || x > hi {
                continue;
            }
            let i = ((x - lo) / config.width).min(bins - 1);
            counts[i] += 1;
        }
        Ok(Self { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Samples that landed in some bin.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
