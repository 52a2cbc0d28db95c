//! Forest codec.
//!
//! ```text
//! F0
//! shrinkage
//! treeCount
//! Tree*
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::repr::Forest;

use super::error::{ReadError, WriteError};
use super::reader::TextReader;
use super::writer::TextWriter;

impl<W: Write + ?Sized> TextWriter<'_, W> {
    /// Write a forest: `F0`, shrinkage, then every tree in boosting order.
    pub fn write_forest(&mut self, forest: &Forest) -> Result<(), WriteError> {
        debug!(n_trees = forest.n_trees(), "writing forest");
        self.write_line(&forest.f0())?;
        self.write_line(&forest.shrinkage())?;
        self.write_line(&forest.n_trees())?;
        for tree in forest.trees() {
            self.write_tree(tree)?;
        }
        Ok(())
    }
}

impl<R: BufRead> TextReader<R> {
    /// Read a forest, appending trees in stream order.
    pub fn read_forest(&mut self) -> Result<Forest, ReadError> {
        let f0 = self.read_value("forest.f0")?;
        let shrinkage = self.read_value("forest.shrinkage")?;
        let mut forest = Forest::new(shrinkage, f0);

        let n_trees = self.read_count("forest.tree_count")?;
        for _ in 0..n_trees {
            forest.push_tree(self.read_tree()?);
        }
        debug!(n_trees, "read forest");
        Ok(forest)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::repr::{Cut, Tree};
    use crate::text::error::MalformedInput;

    fn read(input: &str) -> Result<Forest, ReadError> {
        TextReader::new(Cursor::new(input.as_bytes())).read_forest()
    }

    #[test]
    fn empty_forest_layout() {
        let mut out: Vec<u8> = Vec::new();
        TextWriter::new(&mut out)
            .write_forest(&Forest::new(0.1, 0.5))
            .unwrap();
        assert_eq!(out, b"0.5\n0.1\n0\n");

        let forest = read("0.5\n0.1\n0\n").unwrap();
        assert_eq!(forest.n_trees(), 0);
        assert_eq!(forest.f0(), 0.5);
        assert_eq!(forest.shrinkage(), 0.1);
    }

    #[test]
    fn scalars_precede_trees() {
        let mut forest = Forest::new(0.1, 0.5);
        forest.push_tree(Tree::new(vec![Cut::new(2, 7, 1.25)], vec![0.3], vec![0.9]));

        let mut out: Vec<u8> = Vec::new();
        TextWriter::new(&mut out).write_forest(&forest).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.5\n0.1\n1\n1\n2 7 1 1.25\n1 0.3\n1 0.9\n"
        );
    }

    #[test]
    fn bad_shrinkage_aborts() {
        let err = read("0.5\nfast\n0\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::Malformed(MalformedInput::InvalidValue { field: "forest.shrinkage", .. })
        ));
    }

    #[test]
    fn truncated_second_tree_aborts() {
        let err = read("0\n1\n2\n0\n0\n0\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::Malformed(MalformedInput::UnexpectedEnd { context: "tree.cut_count" })
        ));
    }
}
