//! Anticipatory voicing assimilation.
//!
//! A Czech obstruent takes its voicing from the obstruent that follows it,
//! and clusters assimilate as a whole: `kdo` is [gdo], `vstát` is [fstát].
//! Assimilation also crosses a plain word boundary (`leč dobře` →
//! [leɮ dobře]), while a word or utterance that ends in a voiced obstruent
//! is pronounced voiceless before a pause.
//!
//! The scan runs right to left so that every decision can look at the phone
//! after it, which has already been decided. Only a single space is skipped
//! when looking for that phone; punctuation tokens are neither voiced nor
//! voiceless and therefore stop propagation.

use crate::phone::{devoice, is_devoiced, is_voiced, triggers_devoicing, triggers_voicing, voice};
use tracing::trace;

/// Scan state: what has been emitted to the right of the current position.
#[derive(Debug, Clone, Copy, Default)]
struct Lookahead {
    /// First character of the already processed suffix.
    front: Option<char>,
    /// First non-space character of that suffix, skipping at most one space.
    phone: Option<char>,
}

impl Lookahead {
    fn advance(self, emitted: char) -> Self {
        let phone = if emitted == ' ' { self.front } else { Some(emitted) };
        Self {
            front: Some(emitted),
            phone,
        }
    }
}

/// Realize one character given what follows it.
///
/// The word-final default is applied first and its result is what the
/// following-phone check sees, so a word-final consonant before a voiced
/// word-initial consonant ends up voiced again.
fn realize(ch: char, next: Lookahead) -> char {
    let Some(front) = next.front else {
        // utterance-final
        return if is_voiced(ch) { devoice(ch) } else { ch };
    };

    let ch = if front == ' ' && is_voiced(ch) {
        devoice(ch)
    } else {
        ch
    };

    match next.phone {
        Some(phone) if triggers_devoicing(phone) && is_voiced(ch) => devoice(ch),
        Some(phone) if triggers_voicing(phone) && is_devoiced(ch) => voice(ch),
        _ => ch,
    }
}

/// Apply voicing assimilation to a whole utterance.
pub fn assimilate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    let mut next = Lookahead::default();

    for idx in (0..chars.len()).rev() {
        let ch = chars[idx];
        let realized = realize(ch, next);
        if realized != ch {
            trace!(position = idx, from = %ch, to = %realized, "voicing changed");
        }
        out.push(realized);
        next = next.advance(realized);
    }

    out.reverse();
    out.into_iter().collect()
}
