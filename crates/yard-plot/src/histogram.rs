//! Histogram Binning
//!
//! Equal-width bins spanning the observed range of the values.

/// One bar of a histogram, covering `[min, max)` (the last bin also holds `max`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Counts of values per equal-width bin
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Bin `values` into `bin_count` equal-width bins from their min to max.
    ///
    /// When every value is equal the range is widened to one unit so the
    /// bins still have positive width.
    pub fn from_values(values: &[f64], bin_count: usize) -> Result<Self, crate::PlotError> {
        if values.is_empty() {
            return Err(crate::PlotError::EmptyValues);
        }
        if bin_count == 0 {
            return Err(crate::PlotError::ZeroBins);
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max == min {
            max += 1.0;
        }

        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                min: min + width * i as f64,
                max: min + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for &v in values {
            let index = (((v - min) / width) as usize).min(bin_count - 1);
            bins[index].count += 1;
        }

        Ok(Self { bins })
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of values binned.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Count of the fullest bin.
    pub fn peak(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
