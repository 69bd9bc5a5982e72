//! The `Stage` trait and the built-in stage list.

use crate::config::Config;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::postprocess::POSTPROCESS;
use crate::rewrite::{Rule, RuleSet};
use crate::rules;
use crate::voicing;

/// One step of the transcription pipeline.
///
/// Stages are pure functions of their input; each stage receives the full
/// output of the previous one.
pub trait Stage: Send + Sync {
    fn apply(&self, text: &str) -> String;

    /// Name for logging/diagnostics.
    fn name(&self) -> &'static str;
}

impl Stage for RuleSet {
    fn apply(&self, text: &str) -> String {
        RuleSet::apply(self, text)
    }

    fn name(&self) -> &'static str {
        RuleSet::name(self)
    }
}

impl Stage for Normalizer {
    fn apply(&self, text: &str) -> String {
        self.normalize(text)
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}

/// Stage wrapper around [`voicing::assimilate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VoicingAssimilator;

impl Stage for VoicingAssimilator {
    fn apply(&self, text: &str) -> String {
        voicing::assimilate(text)
    }

    fn name(&self) -> &'static str {
        "voicing"
    }
}

/// Build the stage list from configuration.
///
/// The configuration is validated first, so a `Config` assembled in code is
/// held to the same rules as one loaded from a file. Disabled table stages are left out entirely. User lexicon rules run right
/// after the built-in exceptions, as part of the same stage.
pub fn build_stages(config: &Config) -> Result<Vec<Box<dyn Stage>>> {
    config.validate()?;
    let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(Normalizer::new()?)];

    let user_rules: Vec<Rule> = config.lexicon.rules.iter().map(|r| r.to_rule()).collect();
    let builtin: &[Rule] = if config.pipeline.lexical_exceptions {
        rules::LEXICAL_EXCEPTIONS
    } else {
        &[]
    };
    if !builtin.is_empty() || !user_rules.is_empty() {
        stages.push(Box::new(RuleSet::compile(
            "lexical-exceptions",
            builtin.iter().chain(user_rules.iter()),
        )?));
    }

    stages.push(Box::new(RuleSet::compile("foreign", rules::FOREIGN)?));
    stages.push(Box::new(RuleSet::compile("digraphs", rules::DIGRAPHS)?));
    stages.push(Box::new(RuleSet::compile("e-caron", rules::E_CARON)?));
    stages.push(Box::new(RuleSet::compile("i-vowels", rules::I_VOWELS)?));
    stages.push(Box::new(VoicingAssimilator));
    stages.push(Box::new(RuleSet::compile("unify", rules::UNIFY)?));

    if config.pipeline.hiatus {
        stages.push(Box::new(RuleSet::compile("hiatus", rules::HIATUS)?));
    }
    if config.pipeline.heuristic {
        stages.push(Box::new(RuleSet::compile("heuristic", rules::HEURISTIC)?));
    }

    stages.push(Box::new(RuleSet::compile("postprocess", POSTPROCESS)?));

    Ok(stages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserRule;
    use crate::error::TranscriptionError;

    fn names(stages: &[Box<dyn Stage>]) -> Vec<&'static str> {
        stages.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_default_stage_order() {
        let stages = build_stages(&Config::default()).expect("stages should build");
        assert_eq!(
            names(&stages),
            vec![
                "normalize",
                "lexical-exceptions",
                "foreign",
                "digraphs",
                "e-caron",
                "i-vowels",
                "voicing",
                "unify",
                "hiatus",
                "heuristic",
                "postprocess",
            ]
        );
    }

    #[test]
    fn test_disabled_stages_are_left_out() {
        let mut config = Config::default();
        config.pipeline.lexical_exceptions = false;
        config.pipeline.hiatus = false;
        config.pipeline.heuristic = false;
        let stages = build_stages(&config).expect("stages should build");
        let names = names(&stages);
        assert!(!names.contains(&"lexical-exceptions"));
        assert!(!names.contains(&"hiatus"));
        assert!(!names.contains(&"heuristic"));
        assert!(names.contains(&"voicing"));
    }

    #[test]
    fn test_user_rules_keep_exception_stage_alive() {
        let mut config = Config::default();
        config.pipeline.lexical_exceptions = false;
        config.lexicon.rules.push(UserRule {
            from: "iphone".to_string(),
            to: "ajfoun".to_string(),
            word_initial: false,
        });
        let stages = build_stages(&config).expect("stages should build");
        assert_eq!(stages[1].name(), "lexical-exceptions");
        assert_eq!(stages[1].apply("nový iphone"), "nový ajfoun");
    }

    #[test]
    fn test_empty_user_rule_is_rejected() {
        let mut config = Config::default();
        config.lexicon.rules.push(UserRule {
            from: String::new(),
            to: "q".to_string(),
            word_initial: true,
        });
        let result = build_stages(&config);
        assert!(
            matches!(
                result,
                Err(TranscriptionError::ConfigInvalidValue { ref key, .. })
                    if key == "lexicon.rules[0].from"
            ),
            "empty user rule should be rejected"
        );
    }

    #[test]
    fn test_voicing_stage_delegates() {
        assert_eq!(VoicingAssimilator.apply("kde"), "gde");
        assert_eq!(VoicingAssimilator.name(), "voicing");
    }
}
