//! Canonical forest representation (collection of trees).

use super::Tree;

/// Additive ensemble of decision trees.
///
/// Trees are kept in boosting-stage order: the first tree pushed is the first
/// correction applied on top of `f0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Forest {
    trees: Vec<Tree>,
    f0: f64,
    shrinkage: f64,
}

impl Forest {
    /// Create an empty forest with the given shrinkage and baseline prediction.
    pub fn new(shrinkage: f64, f0: f64) -> Self {
        Self {
            trees: Vec::new(),
            f0,
            shrinkage,
        }
    }

    /// Append a tree as the next boosting stage.
    pub fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    /// Baseline prediction before any tree is applied.
    #[inline]
    pub fn f0(&self) -> f64 {
        self.f0
    }

    /// Learning rate applied to each tree's contribution.
    #[inline]
    pub fn shrinkage(&self) -> f64 {
        self.shrinkage
    }

    /// Number of trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Get a reference to a specific tree.
    #[inline]
    pub fn tree(&self, idx: usize) -> &Tree {
        &self.trees[idx]
    }

    /// Iterate over trees in boosting order.
    pub fn trees(&self) -> impl ExactSizeIterator<Item = &Tree> {
        self.trees.iter()
    }
}

impl Extend<Tree> for Forest {
    fn extend<I: IntoIterator<Item = Tree>>(&mut self, iter: I) {
        self.trees.extend(iter);
    }
}
