//! Read text or page elements aloud
//!
//! Every request cancels what the engine is saying before submitting the
//! new utterance, so at most one utterance is audible at a time.

use super::{SpeakInput, Synth, Utterance, UtteranceSlot};
use crate::alert::Alert;
use crate::dom::Document;
use crate::Result;
use log::{debug, warn};

/// Message shown when the platform has no speech engine
pub const UNSUPPORTED_MESSAGE: &str = "Text-to-speech not supported on this platform.";

/// Speech front end for a page
pub struct SpeechReader {
    /// `None` when the platform has no speech synthesis
    synth: Option<Box<dyn Synth>>,
    alert: Box<dyn Alert>,
    /// Utterance most recently handed to the engine
    active: UtteranceSlot,
}

impl SpeechReader {
    pub fn new(synth: Option<Box<dyn Synth>>, alert: Box<dyn Alert>) -> Self {
        Self {
            synth,
            alert,
            active: UtteranceSlot::new(),
        }
    }

    /// Whether a speech engine is available
    pub fn is_supported(&self) -> bool {
        self.synth.is_some()
    }

    /// Speak `input`, fire-and-forget
    ///
    /// Engine failures are logged and otherwise ignored; the only failure a
    /// user sees is the unsupported-platform alert.
    pub fn speak(&mut self, doc: &dyn Document, input: impl Into<SpeakInput>) {
        if let Err(e) = self.try_speak(doc, input) {
            warn!("Speech request failed: {}", e);
        }
    }

    /// Speak `input` and report what was submitted
    ///
    /// Returns `Ok(None)` after alerting when there is no speech engine.
    pub fn try_speak(
        &mut self,
        doc: &dyn Document,
        input: impl Into<SpeakInput>,
    ) -> Result<Option<Utterance>> {
        let Some(synth) = self.synth.as_mut() else {
            self.alert.alert(UNSUPPORTED_MESSAGE);
            return Ok(None);
        };

        let input = input.into();
        let utterance = Utterance::new(input.resolve(doc));
        debug!("Resolved {:?} -> {:?}", input, utterance.text);

        synth.cancel()?;
        if let Err(e) = synth.speak(&utterance) {
            self.active.clear();
            return Err(e);
        }
        if let Some(old) = self.active.replace(utterance.clone()) {
            debug!("Preempted utterance {:?}", old.text);
        }

        Ok(Some(utterance))
    }

    /// Stop speaking and forget the active utterance
    pub fn cancel(&mut self) -> Result<()> {
        self.active.clear();
        match self.synth.as_mut() {
            Some(synth) => synth.cancel(),
            None => Ok(()),
        }
    }

    /// Whether the engine is still speaking
    pub fn is_speaking(&self) -> bool {
        match self.synth.as_ref() {
            Some(synth) => synth.is_speaking().unwrap_or_else(|e| {
                warn!("Failed to query speech state: {}", e);
                false
            }),
            None => false,
        }
    }

    /// Utterance most recently submitted, if any
    pub fn active(&self) -> Option<Utterance> {
        self.active.current()
    }
}
