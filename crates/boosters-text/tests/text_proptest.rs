//! Property-based tests for the text format.
//!
//! These tests use proptest to generate arbitrary forests and binnings and
//! verify that encoding and decoding preserves them.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use boosters_text::{
    feature_binnings_from_str, feature_binnings_to_string, forest_from_str, forest_to_string, Cut,
    FeatureBinning, FloatFormat, Forest, TextReader, TextWriteOptions, Tree,
};

// =============================================================================
// Arbitrary Model Generators
// =============================================================================

/// Strategy for generating finite f32 values, including the extremes.
fn arb_finite_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        18 => prop::num::f32::NORMAL | prop::num::f32::ZERO | prop::num::f32::SUBNORMAL,
        1 => Just(f32::MAX),
        1 => Just(-f32::MAX),
    ]
}

fn arb_finite_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        18 => prop::num::f64::NORMAL | prop::num::f64::ZERO,
        1 => Just(f64::MAX),
        1 => Just(-f64::MAX),
    ]
}

fn arb_cut() -> impl Strategy<Value = Cut> {
    (any::<u32>(), any::<u32>(), any::<bool>(), arb_finite_f32()).prop_map(
        |(feature, index, valid, gain)| Cut {
            feature,
            index,
            valid,
            gain,
        },
    )
}

/// Strategy for generating a tree of depth 0..=3 in level-order layout.
fn arb_tree() -> impl Strategy<Value = Tree> {
    (0u32..=3).prop_flat_map(|depth| {
        let n_cuts = (1usize << depth) - 1;
        let n_nodes = (1usize << (depth + 1)) - 1;
        (
            prop_vec(arb_cut(), n_cuts),
            prop_vec(arb_finite_f32(), n_nodes),
            prop_vec(arb_finite_f32(), n_nodes),
        )
            .prop_map(|(cuts, weights, purities)| Tree::new(cuts, weights, purities))
    })
}

fn arb_forest() -> impl Strategy<Value = Forest> {
    (arb_finite_f64(), arb_finite_f64(), prop_vec(arb_tree(), 0..8)).prop_map(
        |(shrinkage, f0, trees)| {
            let mut forest = Forest::new(shrinkage, f0);
            forest.extend(trees);
            forest
        },
    )
}

fn arb_binnings() -> impl Strategy<Value = Vec<FeatureBinning<f32>>> {
    prop_vec(
        (0u32..8, prop_vec(arb_finite_f32(), 0..16))
            .prop_map(|(n_levels, boundaries)| FeatureBinning::new(n_levels, boundaries)),
        0..6,
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn forest_roundtrip_is_exact(forest in arb_forest()) {
        let text = forest_to_string(&forest, &TextWriteOptions::default());
        let decoded = forest_from_str(&text).unwrap();
        prop_assert_eq!(decoded, forest);
    }

    #[test]
    fn significant_encoding_is_idempotent(forest in arb_forest(), digits in 1u8..=17) {
        let options = TextWriteOptions::builder()
            .float_format(FloatFormat::Significant(digits))
            .build();
        let first = forest_to_string(&forest, &options);
        let second = forest_to_string(&forest_from_str(&first).unwrap(), &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn binnings_roundtrip_is_exact(binnings in arb_binnings()) {
        let text = feature_binnings_to_string(&binnings, &TextWriteOptions::default());
        let decoded = feature_binnings_from_str::<f32>(&text).unwrap();
        prop_assert_eq!(decoded, binnings);
    }

    #[test]
    fn arbitrary_input_never_panics(bytes in prop_vec(any::<u8>(), 0..512)) {
        let mut reader = TextReader::new(bytes.as_slice());
        let _ = reader.read_forest();
        let mut reader = TextReader::new(bytes.as_slice());
        let _ = reader.read_feature_binnings::<f64>();
    }

    #[test]
    fn any_strict_prefix_fails(forest in arb_forest(), cut in 0.0f64..1.0) {
        let text = forest_to_string(&forest, &TextWriteOptions::default());
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let keep = ((tokens.len() as f64) * cut) as usize;
        prop_assume!(keep < tokens.len());
        let truncated = tokens[..keep].join(" ");
        let err = forest_from_str(&truncated).unwrap_err();
        prop_assert!(err.is_malformed());
    }
}
