//! Late-stage rules: hiatus glides and probable cluster simplifications.

use crate::rewrite::{CharClass, Context, Rule};

/// Insert `j` between `i`/`í` and a following vowel.
///
/// Runs after unification so `y`/`ý` have already become `i`/`í`.
pub const HIATUS: &[Rule] = &[Rule::in_context(
    "",
    "j",
    Context::ANYWHERE
        .preceded_by(CharClass::OneOf("ií"))
        .followed_by(CharClass::OneOf("aeiouáéíóú")),
)];

/// Substitutions that are not certain but very probable.
pub const HEURISTIC: &[Rule] = &[
    // velar and labiodental nasals
    Rule::new("nk", "ŋk"),
    Rule::new("ng", "ŋg"),
    Rule::new("mv", "ɱv"),
    Rule::new("mf", "ɱf"),
    // n assimilates to a following palatal
    Rule::new("nť", "ňť"),
    Rule::new("nď", "ňď"),
    Rule::new("nň", "ň"),
    // double consonants are pronounced single
    Rule::new("cc", "c"),
    Rule::new("dd", "d"),
    Rule::new("jj", "j"),
    Rule::new("kk", "k"),
    Rule::new("ll", "l"),
    Rule::new("nn", "n"),
    Rule::new("mm", "m"),
    Rule::new("ss", "s"),
    Rule::new("tt", "t"),
    Rule::new("zz", "z"),
    Rule::new("čč", "č"),
    Rule::new("šš", "š"),
];
