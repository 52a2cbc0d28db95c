//! FeatureBinning codec.
//!
//! ```text
//! FeatureBinning<T>    := nLevels count value*
//! FeatureBinning<T>Seq := count FeatureBinning<T>*
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::repr::FeatureBinning;

use super::error::{ReadError, WriteError};
use super::reader::TextReader;
use super::seq::MAX_PREALLOC;
use super::value::TextValue;
use super::writer::TextWriter;

impl<W: Write + ?Sized> TextWriter<'_, W> {
    /// Write one binning: level count, then boundaries.
    pub fn write_feature_binning<T: TextValue>(
        &mut self,
        binning: &FeatureBinning<T>,
    ) -> Result<(), WriteError> {
        self.write_line(&binning.n_levels())?;
        self.write_seq("feature_binning.boundaries", binning.boundaries())
    }

    /// Write a count-prefixed list of binnings.
    pub fn write_feature_binnings<T: TextValue>(
        &mut self,
        binnings: &[FeatureBinning<T>],
    ) -> Result<(), WriteError> {
        debug!(n_features = binnings.len(), "writing feature binnings");
        self.write_line(&binnings.len())?;
        for binning in binnings {
            self.write_feature_binning(binning)?;
        }
        Ok(())
    }
}

impl<R: BufRead> TextReader<R> {
    /// Read one binning.
    pub fn read_feature_binning<T: TextValue>(&mut self) -> Result<FeatureBinning<T>, ReadError> {
        let n_levels = self.read_value("feature_binning.n_levels")?;
        let boundaries: Vec<T> = self.read_seq("feature_binning.boundaries")?;
        Ok(FeatureBinning::from_range(n_levels, boundaries))
    }

    /// Read a count-prefixed list of binnings.
    pub fn read_feature_binnings<T: TextValue>(
        &mut self,
    ) -> Result<Vec<FeatureBinning<T>>, ReadError> {
        let n_features = self.read_count("feature_binnings.count")?;
        let mut binnings = Vec::with_capacity(n_features.min(MAX_PREALLOC));
        for _ in 0..n_features {
            binnings.push(self.read_feature_binning()?);
        }
        debug!(n_features, "read feature binnings");
        Ok(binnings)
    }
}
