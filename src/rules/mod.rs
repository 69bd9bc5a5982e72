//! Built-in rule tables, in the order the pipeline applies them.

pub mod cleanup;
pub mod graphemes;
pub mod lexicon;
pub mod palatal;

pub use cleanup::{HEURISTIC, HIATUS};
pub use graphemes::{DIGRAPHS, FOREIGN, UNIFY};
pub use lexicon::LEXICAL_EXCEPTIONS;
pub use palatal::{E_CARON, I_VOWELS};
