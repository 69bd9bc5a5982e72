//! Final substitutions into the output phonetic alphabet.
//!
//! The pipeline works with single-character stand-ins for phones the output
//! alphabet spells with two characters. They are expanded here, last.

use crate::rewrite::Rule;

pub const POSTPROCESS: &[Rule] = &[
    // voiced postalveolar affricate
    Rule::new("ɮ", "ʒʒ"),
    // velar fricative, written as in the orthography
    Rule::new("x", "ch"),
];
