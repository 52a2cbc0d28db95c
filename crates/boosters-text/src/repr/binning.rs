//! Per-feature discretization table.

/// Bin boundaries for one input feature.
///
/// `n_levels` is owned by the binning algorithm (the number of binary levels
/// used to index the bins); the codec persists it without interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBinning<T> {
    n_levels: u32,
    boundaries: Vec<T>,
}

impl<T> FeatureBinning<T> {
    /// Create a binning from its level count and boundary values.
    pub fn new(n_levels: u32, boundaries: Vec<T>) -> Self {
        Self {
            n_levels,
            boundaries,
        }
    }

    /// Create a binning by consuming a range of boundary values.
    pub fn from_range<I>(n_levels: u32, boundaries: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(n_levels, boundaries.into_iter().collect())
    }

    /// Number of discretization levels.
    #[inline]
    pub fn n_levels(&self) -> u32 {
        self.n_levels
    }

    /// Bin boundary values.
    #[inline]
    pub fn boundaries(&self) -> &[T] {
        &self.boundaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_range_collects_in_order() {
        let binning = FeatureBinning::from_range(2, [0.0f32, 0.25, 0.5, 1.0].iter().copied());
        assert_eq!(binning.n_levels(), 2);
        assert_eq!(binning.boundaries(), &[0.0, 0.25, 0.5, 1.0]);
        assert_eq!(binning, FeatureBinning::new(2, vec![0.0, 0.25, 0.5, 1.0]));
    }
}
