//! Grapheme folding: foreign letters, digraphs and orthographic variants.

use crate::rewrite::Rule;

/// Letters that only occur in foreign words.
pub const FOREIGN: &[Rule] = &[Rule::new("w", "v")];

/// Collapse digraphs to one symbol and expand letters that stand for two phones.
///
/// `ch` becomes the internal `x`, which is why `x` itself is expanded first.
/// `dž` becomes the internal `ɮ`.
pub const DIGRAPHS: &[Rule] = &[
    Rule::new("x", "ks"),
    Rule::new("qu", "kv"),
    Rule::new("q", "kv"),
    Rule::new("ch", "x"),
    Rule::new("dz", "ʒ"),
    Rule::new("dž", "ɮ"),
];

/// Letters that spell the same phone.
pub const UNIFY: &[Rule] = &[
    Rule::new("ů", "ú"),
    Rule::new("y", "i"),
    Rule::new("ý", "í"),
];
