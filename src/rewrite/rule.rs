//! Rewrite rules and the contexts that guard them.

use std::borrow::Cow;

/// A set of characters a guard accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any one of the listed characters.
    OneOf(&'static str),
    /// Anything but whitespace.
    NonSpace,
}

impl CharClass {
    /// Whether `ch` belongs to this class.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            CharClass::OneOf(chars) => chars.contains(ch),
            CharClass::NonSpace => !ch.is_whitespace(),
        }
    }

    pub(crate) fn to_regex(self) -> String {
        match self {
            CharClass::OneOf(chars) => {
                let mut class = String::with_capacity(chars.len() + 2);
                class.push('[');
                for ch in chars.chars() {
                    class.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
                }
                class.push(']');
                class
            }
            CharClass::NonSpace => r"\S".to_string(),
        }
    }
}

/// Where a rule's pattern may match.
///
/// Guard characters are part of the match: they are kept in the output but
/// consumed by the scan, so two matches never share a guard character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    /// Only at the start of a word.
    pub word_initial: bool,
    /// The character right before the pattern.
    pub preceded_by: Option<CharClass>,
    /// The character right after the pattern.
    pub followed_by: Option<CharClass>,
}

impl Context {
    pub const ANYWHERE: Context = Context {
        word_initial: false,
        preceded_by: None,
        followed_by: None,
    };

    pub const fn word_initial() -> Self {
        Context {
            word_initial: true,
            ..Self::ANYWHERE
        }
    }

    pub const fn preceded_by(self, class: CharClass) -> Self {
        Context {
            preceded_by: Some(class),
            ..self
        }
    }

    pub const fn followed_by(self, class: CharClass) -> Self {
        Context {
            followed_by: Some(class),
            ..self
        }
    }

    /// True when the rule can be applied as a plain substring replacement.
    pub fn is_unguarded(&self) -> bool {
        *self == Self::ANYWHERE
    }
}

/// A single pattern → replacement rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Cow<'static, str>,
    pub replacement: Cow<'static, str>,
    pub context: Context,
}

impl Rule {
    /// Replace `pattern` wherever it occurs.
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self::in_context(pattern, replacement, Context::ANYWHERE)
    }

    /// Replace `pattern` only at the start of a word.
    pub const fn word_initial(pattern: &'static str, replacement: &'static str) -> Self {
        Self::in_context(pattern, replacement, Context::word_initial())
    }

    pub const fn in_context(
        pattern: &'static str,
        replacement: &'static str,
        context: Context,
    ) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            replacement: Cow::Borrowed(replacement),
            context,
        }
    }

    /// A rule built at runtime, e.g. from the user's configuration.
    pub fn owned(pattern: String, replacement: String, context: Context) -> Self {
        Self {
            pattern: Cow::Owned(pattern),
            replacement: Cow::Owned(replacement),
            context,
        }
    }

    /// Regex source matching this rule, with guards captured as `pre` / `post`.
    pub(crate) fn to_regex(&self) -> String {
        let mut re = String::new();
        if self.context.word_initial {
            re.push_str(r"\b");
        }
        if let Some(class) = self.context.preceded_by {
            re.push_str("(?P<pre>");
            re.push_str(&class.to_regex());
            re.push(')');
        }
        re.push_str(&regex::escape(&self.pattern));
        if let Some(class) = self.context.followed_by {
            re.push_str("(?P<post>");
            re.push_str(&class.to_regex());
            re.push(')');
        }
        re
    }
}
