//! A single request to the speech engine

/// Language every utterance is spoken in
pub const UTTERANCE_LANG: &str = "en-US";

/// Normalized speaking rate; 1.0 is the engine's normal rate
pub const UTTERANCE_RATE: f32 = 1.0;

/// Normalized pitch; 1.0 is the engine's normal pitch
pub const UTTERANCE_PITCH: f32 = 1.0;

/// Text plus the voice parameters it should be spoken with
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    /// Utterance with the fixed language, rate and pitch
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: UTTERANCE_LANG.to_string(),
            rate: UTTERANCE_RATE,
            pitch: UTTERANCE_PITCH,
        }
    }
}
