//! Speech engine abstraction
//!
//! The reader only ever asks an engine to stop talking or to start on a new
//! utterance. Playback itself is asynchronous and owned by the engine.

use super::backends::native::NativeSynth;
use super::Utterance;
use crate::Result;
use log::info;

/// Commands sent to a speech engine
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCommand {
    /// Start speaking an utterance
    Speak(Utterance),
    /// Silence whatever is being spoken
    Cancel,
}

/// Speech engine trait
///
/// Backends implement this to turn utterances into audio.
pub trait Synth: Send {
    /// Short backend name for logging
    fn name(&self) -> &str;

    /// Submit an utterance for asynchronous playback
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Cancel every utterance this engine is speaking
    fn cancel(&mut self) -> Result<()>;

    /// Whether the engine is still producing audio; engines that cannot
    /// tell report `false`
    fn is_speaking(&self) -> Result<bool> {
        Ok(false)
    }

    /// Send a raw command to the backend
    fn send(&mut self, cmd: SpeechCommand) -> Result<()> {
        match cmd {
            SpeechCommand::Speak(utterance) => self.speak(&utterance),
            SpeechCommand::Cancel => self.cancel(),
        }
    }
}

/// Create the platform speech engine
///
/// `None` means the platform has no usable speech synthesis.
pub fn create_synth() -> Option<Box<dyn Synth>> {
    let platform = std::env::consts::OS;
    info!("Creating native speech synthesizer for platform: {}", platform);

    match NativeSynth::new() {
        Ok(synth) => {
            info!("Initialized native TTS backend");
            Some(Box::new(synth))
        }
        Err(e) => {
            info!("No speech engine on platform '{}': {}", platform, e);
            None
        }
    }
}
