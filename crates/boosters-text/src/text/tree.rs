//! Tree codec.
//!
//! ```text
//! cutCount
//! Cut*            one per line
//! boostWeightSeq  float sequence
//! puritySeq       float sequence
//! ```

use std::io::{BufRead, Write};

use crate::repr::Tree;

use super::error::{ReadError, WriteError};
use super::reader::TextReader;
use super::seq::MAX_PREALLOC;
use super::writer::TextWriter;

impl<W: Write + ?Sized> TextWriter<'_, W> {
    /// Write a tree: its cuts, then boost weights, then purities.
    pub fn write_tree(&mut self, tree: &Tree) -> Result<(), WriteError> {
        self.write_line(&tree.n_cuts())?;
        for cut in tree.cuts() {
            self.write_cut(cut)?;
        }
        self.write_seq("tree.boost_weights", tree.boost_weights())?;
        self.write_seq("tree.purities", tree.purities())
    }
}

impl<R: BufRead> TextReader<R> {
    /// Read a tree. Either the whole tree is decoded or an error is returned.
    pub fn read_tree(&mut self) -> Result<Tree, ReadError> {
        let n_cuts = self.read_count("tree.cut_count")?;
        let mut cuts = Vec::with_capacity(n_cuts.min(MAX_PREALLOC));
        for _ in 0..n_cuts {
            cuts.push(self.read_cut()?);
        }
        let boost_weights = self.read_seq("tree.boost_weights")?;
        let purities = self.read_seq("tree.purities")?;
        Ok(Tree::new(cuts, boost_weights, purities))
    }
}
