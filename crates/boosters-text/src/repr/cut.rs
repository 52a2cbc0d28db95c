//! Decision node descriptor.

/// A single decision node of a [`Tree`](super::Tree).
///
/// Cuts are stored in level order; a cut with `valid == false` is a
/// placeholder for a node that was not split.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cut {
    /// Index into the input feature vector.
    pub feature: u32,
    /// Bin index used as the split threshold.
    pub index: u32,
    /// Whether this node is an active split.
    pub valid: bool,
    /// Split gain.
    pub gain: f32,
}

impl Cut {
    /// Create an active split.
    pub fn new(feature: u32, index: u32, gain: f32) -> Self {
        Self {
            feature,
            index,
            valid: true,
            gain,
        }
    }

    /// Create a placeholder node that does not split.
    pub fn placeholder() -> Self {
        Self::default()
    }
}
