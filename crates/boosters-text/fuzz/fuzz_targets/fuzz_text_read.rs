//! Fuzz target for the text model reader.
//!
//! Feeds arbitrary bytes to the forest and binning decoders. Any input must
//! either decode or return an error, never panic or allocate unboundedly.
//!
//! Run with:
//! ```sh
//! cargo +nightly fuzz run fuzz_text_read
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

use boosters_text::{FeatureBinning, TextReadOptions, TextReader};

fuzz_target!(|data: &[u8]| {
    let options = TextReadOptions::builder().max_sequence_len(1 << 16).build();

    let mut reader = TextReader::with_options(data, options);
    let _ = reader.read_forest();

    let mut reader = TextReader::with_options(data, options);
    let _: Result<Vec<FeatureBinning<f32>>, _> = reader.read_feature_binnings();
});
