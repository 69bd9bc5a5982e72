//! Generic ordered rule rewriter.
//!
//! Every table-driven stage of the transcription pipeline (lexical
//! exceptions, digraphs, palatalization, unification, hiatus, heuristics and
//! the final postprocessing) is a [`RuleSet`] compiled from a slice of
//! [`Rule`]s.

pub mod rule;
pub mod rule_set;

pub use rule::{CharClass, Context, Rule};
pub use rule_set::RuleSet;
