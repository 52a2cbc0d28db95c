//! Canonical tree representation.

use super::Cut;

/// A decision tree stored as parallel arrays.
///
/// The three sequences are owned by the model: their lengths relate to each
/// other through the tree depth, but neither this type nor the codec checks
/// that relationship.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    cuts: Vec<Cut>,
    boost_weights: Vec<f32>,
    purities: Vec<f32>,
}

impl Tree {
    /// Create a tree from its cuts, boost weights and purities.
    pub fn new(cuts: Vec<Cut>, boost_weights: Vec<f32>, purities: Vec<f32>) -> Self {
        Self {
            cuts,
            boost_weights,
            purities,
        }
    }

    /// Cuts in level order.
    #[inline]
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// Boost weight for each node.
    #[inline]
    pub fn boost_weights(&self) -> &[f32] {
        &self.boost_weights
    }

    /// Purity for each node.
    #[inline]
    pub fn purities(&self) -> &[f32] {
        &self.purities
    }

    /// Number of cuts (internal node slots).
    #[inline]
    pub fn n_cuts(&self) -> usize {
        self.cuts.len()
    }

    /// Decompose into `(cuts, boost_weights, purities)`.
    pub fn into_parts(self) -> (Vec<Cut>, Vec<f32>, Vec<f32>) {
        (self.cuts, self.boost_weights, self.purities)
    }
}
