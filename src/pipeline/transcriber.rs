//! Composition of the pipeline stages into a reusable transcriber.

use super::stage::{Stage, build_stages};
use crate::config::Config;
use crate::error::Result;
use crate::utterance::Utterance;
use tracing::{debug, info};

/// Text after one stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub stage: &'static str,
    pub text: String,
}

/// Compiled transcription pipeline.
///
/// Building one compiles every rule table; reuse it for many utterances.
/// It holds no mutable state and can be shared across threads.
pub struct Transcriber {
    stages: Vec<Box<dyn Stage>>,
}

impl Transcriber {
    /// Transcriber with all built-in stages enabled.
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let stages = build_stages(config)?;
        info!(
            stages = stages.len(),
            user_rules = config.lexicon.rules.len(),
            "Transcriber ready"
        );
        Ok(Self { stages })
    }

    /// Transcribe one orthographic sentence.
    pub fn transcribe(&self, ort: &str) -> Utterance {
        let mut text = ort.to_string();
        for stage in &self.stages {
            text = stage.apply(&text);
            debug!(stage = stage.name(), output = %text, "stage applied");
        }
        Utterance::new(ort.to_string(), text)
    }

    /// Run the pipeline and keep every stage's output.
    pub fn trace(&self, ort: &str) -> Vec<StageOutput> {
        let mut outputs = Vec::with_capacity(self.stages.len());
        let mut text = ort.to_string();
        for stage in &self.stages {
            text = stage.apply(&text);
            outputs.push(StageOutput {
                stage: stage.name(),
                text: text.clone(),
            });
        }
        outputs
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl std::fmt::Debug for Transcriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcriber")
            .field("stages", &self.stage_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcriber() -> Transcriber {
        Transcriber::new().expect("default transcriber should build")
    }

    #[test]
    fn test_reference_sentence() {
        let t = transcriber();
        let utt = t.transcribe("hřích by za ty choutky stál leč dobře");
        assert_eq!(utt.fon(), "hříɣ bi za ti choutki stál leʒʒ dobře");
        assert_eq!(utt.ort(), "hřích by za ty choutky stál leč dobře");
    }

    #[test]
    fn test_empty_input() {
        let utt = transcriber().transcribe("");
        assert_eq!(utt.fon(), "");
    }

    #[test]
    fn test_trace_ends_with_transcription() {
        let t = transcriber();
        let trace = t.trace("Leč dobře");
        let last = trace.last().expect("trace should not be empty");
        assert_eq!(last.stage, "postprocess");
        assert_eq!(last.text, t.transcribe("Leč dobře").fon());
        assert_eq!(trace.len(), t.stage_names().len());
    }

    #[test]
    fn test_trace_shows_intermediate_symbols() {
        let trace = transcriber().trace("chata");
        let digraphs = trace
            .iter()
            .find(|s| s.stage == "digraphs")
            .expect("digraph stage should run");
        assert_eq!(digraphs.text, "xata");
    }

    #[test]
    fn test_transcriber_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transcriber>();
    }

    #[test]
    fn test_debug_lists_stages() {
        let debug = format!("{:?}", transcriber());
        assert!(debug.contains("voicing"), "got: {}", debug);
    }
}
