//! Single-slot mailbox for the active utterance
//!
//! Each new request replaces whatever was there; the slot never holds more
//! than one utterance.

use super::Utterance;

#[derive(Debug, Default)]
pub struct UtteranceSlot {
    slot: Option<Utterance>,
}

impl UtteranceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `utterance` in the slot, returning the one it preempted
    pub fn replace(&mut self, utterance: Utterance) -> Option<Utterance> {
        self.slot.replace(utterance)
    }

    /// Copy of the active utterance
    pub fn current(&self) -> Option<Utterance> {
        self.slot.clone()
    }

    /// Empty the slot, returning what was there
    pub fn clear(&mut self) -> Option<Utterance> {
        self.slot.take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
