use serde::Serialize;
use std::fmt;

/// An orthographic sentence and its phonetic transcription.
///
/// Produced by [`crate::Transcriber::transcribe`]; both strings are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utterance {
    ort: String,
    fon: String,
}

impl Utterance {
    pub(crate) fn new(ort: String, fon: String) -> Self {
        Self { ort, fon }
    }

    /// The input exactly as given.
    pub fn ort(&self) -> &str {
        &self.ort
    }

    /// The phonetic transcription.
    pub fn fon(&self) -> &str {
        &self.fon
    }

    /// Split into `(ort, fon)`.
    pub fn into_parts(self) -> (String, String) {
        (self.ort, self.fon)
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fon)
    }
}
