//! Transcription pipeline.
//!
//! Stages run strictly in sequence over whole strings:
//! normalize → lexical exceptions → foreign → digraphs → ě → i/í →
//! voicing → unify → hiatus → heuristic → postprocess.

pub mod stage;
pub mod transcriber;

pub use stage::{Stage, VoicingAssimilator, build_stages};
pub use transcriber::{StageOutput, Transcriber};
