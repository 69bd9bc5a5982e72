//! Voicing classes of the internal phonetic alphabet.
//!
//! Two internal symbols stand in for multi-character spellings until the
//! postprocessor expands them: `ɮ` is the voiced postalveolar affricate
//! (written `ʒʒ` in the output) and `x` is the velar fricative (written `ch`).

/// Voiced consonants and the voiceless consonant each devoices to.
///
/// `h` and `ɣ` both devoice to `x`; `x` only ever voices back to `ɣ`.
pub const VOICED_TO_DEVOICED: [(char, char); 11] = [
    ('b', 'p'),
    ('d', 't'),
    ('ď', 'ť'),
    ('g', 'k'),
    ('z', 's'),
    ('ž', 'š'),
    ('ʒ', 'c'),
    ('ɮ', 'č'),
    ('h', 'x'),
    ('ɣ', 'x'),
    ('v', 'f'),
];

/// Voiceless consonants and the voiced consonant each voices to.
pub const DEVOICED_TO_VOICED: [(char, char); 10] = [
    ('p', 'b'),
    ('t', 'd'),
    ('ť', 'ď'),
    ('k', 'g'),
    ('s', 'z'),
    ('š', 'ž'),
    ('c', 'ʒ'),
    ('č', 'ɮ'),
    ('x', 'ɣ'),
    ('f', 'v'),
];

/// Symbols that may be devoiced.
pub fn is_voiced(ch: char) -> bool {
    VOICED_TO_DEVOICED.iter().any(|&(v, _)| v == ch)
}

/// Symbols that may be voiced.
pub fn is_devoiced(ch: char) -> bool {
    DEVOICED_TO_VOICED.iter().any(|&(d, _)| d == ch)
}

/// A following phone that makes a voiced consonant voiceless.
pub fn triggers_devoicing(ch: char) -> bool {
    is_devoiced(ch)
}

/// A following phone that makes a voiceless consonant voiced.
///
/// Excludes `v`, which devoices like any obstruent but leaves what precedes
/// it alone (`svůj`, `tvůj`).
pub fn triggers_voicing(ch: char) -> bool {
    ch != 'v' && is_voiced(ch)
}

/// Voiceless counterpart of `ch`, or `ch` itself if it has none.
pub fn devoice(ch: char) -> char {
    VOICED_TO_DEVOICED
        .iter()
        .find(|&&(v, _)| v == ch)
        .map_or(ch, |&(_, d)| d)
}

/// Voiced counterpart of `ch`, or `ch` itself if it has none.
pub fn voice(ch: char) -> char {
    DEVOICED_TO_VOICED
        .iter()
        .find(|&&(d, _)| d == ch)
        .map_or(ch, |&(_, v)| v)
}
