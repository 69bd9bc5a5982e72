//! Ordered rule tables compiled for repeated application.

use super::rule::Rule;
use crate::error::{Result, TranscriptionError};
use regex::{Captures, Regex};

enum Matcher {
    /// Plain substring replacement.
    Literal(String),
    /// Guarded pattern; guard text is captured as `pre` / `post` and put back.
    Guarded(Regex),
}

struct CompiledRule {
    matcher: Matcher,
    replacement: String,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Result<Self> {
        let matcher = if rule.context.is_unguarded() {
            Matcher::Literal(rule.pattern.to_string())
        } else {
            let source = rule.to_regex();
            let regex = Regex::new(&source).map_err(|source_err| {
                TranscriptionError::RuleCompile {
                    pattern: source,
                    source: source_err,
                }
            })?;
            Matcher::Guarded(regex)
        };
        Ok(Self {
            matcher,
            replacement: rule.replacement.to_string(),
        })
    }

    fn apply(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::Literal(pattern) if pattern.is_empty() => text.to_string(),
            Matcher::Literal(pattern) => text.replace(pattern.as_str(), &self.replacement),
            Matcher::Guarded(regex) => regex
                .replace_all(text, |caps: &Captures<'_>| {
                    let pre = caps.name("pre").map_or("", |m| m.as_str());
                    let post = caps.name("post").map_or("", |m| m.as_str());
                    let mut out =
                        String::with_capacity(pre.len() + self.replacement.len() + post.len());
                    out.push_str(pre);
                    out.push_str(&self.replacement);
                    out.push_str(post);
                    out
                })
                .into_owned(),
        }
    }
}

/// A named, ordered table of rules.
///
/// Each rule rewrites the whole current string before the next rule runs, so
/// later rules see the output of earlier ones.
pub struct RuleSet {
    name: &'static str,
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile<'a, I>(name: &'static str, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Rule>,
    {
        let rules = rules
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule.apply(&current);
        }
        current
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}
