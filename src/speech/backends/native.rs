//! Native Rust TTS backend using the tts crate
//!
//! The `tts` crate fronts Speech Dispatcher on Linux, AVFoundation on macOS
//! and SAPI/WinRT on Windows. Utterance rate and pitch are normalized (1.0
//! is the engine's normal value) and are scaled into each engine's range
//! here.

use crate::speech::{Synth, Utterance};
use crate::{PagereadError, Result};
use log::{debug, error, warn};
use tts::Tts as TtsCrate;

/// Native TTS backend using the tts crate
pub struct NativeSynth {
    tts: TtsCrate,

    /// Language of the voice last selected, to skip repeated voice lookups
    voice_lang: Option<String>,
}

impl NativeSynth {
    /// Initialize the platform-appropriate TTS engine
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| PagereadError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            voice_lang: None,
        })
    }

    fn apply_rate(&mut self, rate: f32) -> Result<()> {
        if !self.tts.supported_features().rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let scaled = scale(
            rate,
            self.tts.min_rate(),
            self.tts.normal_rate(),
            self.tts.max_rate(),
        );
        self.tts
            .set_rate(scaled)
            .map_err(|e| PagereadError::Speech(format!("Failed to set rate: {}", e)))?;
        Ok(())
    }

    fn apply_pitch(&mut self, pitch: f32) -> Result<()> {
        if !self.tts.supported_features().pitch {
            warn!("Pitch control not supported on this platform");
            return Ok(());
        }

        let scaled = scale(
            pitch,
            self.tts.min_pitch(),
            self.tts.normal_pitch(),
            self.tts.max_pitch(),
        );
        self.tts
            .set_pitch(scaled)
            .map_err(|e| PagereadError::Speech(format!("Failed to set pitch: {}", e)))?;
        Ok(())
    }

    fn apply_lang(&mut self, lang: &str) -> Result<()> {
        if self.voice_lang.as_deref() == Some(lang) {
            return Ok(());
        }
        // Remembered before the lookup so a failing engine is not asked again
        self.voice_lang = Some(lang.to_string());

        if !self.tts.supported_features().voice {
            warn!("Voice selection not supported on this platform");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| PagereadError::Speech(format!("Failed to get voices: {}", e)))?;

        match voices
            .iter()
            .find(|v| v.language().as_str().eq_ignore_ascii_case(lang))
        {
            Some(voice) => {
                debug!("Selecting voice {} for {}", voice.name(), lang);
                self.tts
                    .set_voice(voice)
                    .map_err(|e| PagereadError::Speech(format!("Failed to set voice: {}", e)))?;
            }
            None => warn!(
                "No {} voice among {} voices, keeping default",
                lang,
                voices.len()
            ),
        }

        Ok(())
    }
}

/// Voice, rate and pitch are optional: a failure is logged and the
/// utterance is still spoken with whatever the engine has
fn best_effort(step: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("Skipping {} setup: {}", step, e);
    }
}

/// Map a normalized value (1.0 = normal) onto an engine's range
fn scale(value: f32, min: f32, normal: f32, max: f32) -> f32 {
    (normal * value).clamp(min, max)
}

impl Synth for NativeSynth {
    fn name(&self) -> &str {
        "native"
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        let lang = self.apply_lang(&utterance.lang);
        best_effort("voice", lang);
        let rate = self.apply_rate(utterance.rate);
        best_effort("rate", rate);
        let pitch = self.apply_pitch(utterance.pitch);
        best_effort("pitch", pitch);

        if utterance.text.is_empty() {
            debug!("Empty utterance, nothing to say");
            return Ok(());
        }

        debug!("Speaking: {}", utterance.text);
        self.tts.speak(utterance.text.as_str(), true).map_err(|e| {
            error!("Failed to speak: {}", e);
            PagereadError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        if !self.tts.supported_features().stop {
            warn!("Stopping speech not supported on this platform");
            return Ok(());
        }

        debug!("Canceling speech");
        self.tts.stop().map_err(|e| {
            error!("Failed to cancel speech: {}", e);
            PagereadError::Speech(format!("Cancel failed: {}", e))
        })?;

        Ok(())
    }

    fn is_speaking(&self) -> Result<bool> {
        if !self.tts.supported_features().is_speaking {
            return Ok(false);
        }
        self.tts
            .is_speaking()
            .map_err(|e| PagereadError::Speech(format!("Failed to query speech state: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_synth() {
        // May fail without speech-dispatcher or audio (CI)
        match NativeSynth::new() {
            Ok(_) => println!("✓ Native TTS backend initialized successfully"),
            Err(e) => println!("⚠ TTS initialization failed (may be expected in CI): {}", e),
        }
    }

    #[test]
    fn test_unknown_language_still_speaks() {
        if let Ok(mut synth) = NativeSynth::new() {
            let mut utterance = Utterance::new("");
            utterance.lang = "zz-ZZ".to_string();

            assert!(synth.speak(&utterance).is_ok());
            assert_eq!(synth.voice_lang.as_deref(), Some("zz-ZZ"));
        }
    }

    #[test]
    fn test_best_effort_swallows_errors() {
        best_effort("voice", Err(PagereadError::Speech("no voices".into())));
        best_effort("rate", Ok(()));
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(1.0, 0.1, 1.0, 10.0), 1.0);
        assert_eq!(scale(1.0, 0.0, 50.0, 100.0), 50.0);
        assert_eq!(scale(2.0, 0.0, 50.0, 100.0), 100.0);
        assert_eq!(scale(5.0, 0.0, 50.0, 100.0), 100.0);
        assert_eq!(scale(0.0, 10.0, 50.0, 100.0), 10.0);
    }
}
