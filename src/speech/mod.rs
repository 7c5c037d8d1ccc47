//! Speech synthesis

pub mod backends;
pub mod input;
pub mod reader;
pub mod slot;
pub mod synth;
pub mod utterance;

pub use input::SpeakInput;
pub use reader::SpeechReader;
pub use slot::UtteranceSlot;
pub use synth::{create_synth, SpeechCommand, Synth};
pub use utterance::Utterance;
