//! Page state
//!
//! `State` plays the part of a loaded page: it owns the document, the
//! origin's preference store and both components, and runs page-ready when
//! it is created.

pub mod config;

use crate::alert::{Alert, StderrAlert};
use crate::dom::{Document, MemoryDocument};
use crate::speech::{create_synth, SpeakInput, SpeechReader, Synth};
use crate::store::{IniStore, PreferenceStore};
use crate::theme::{ThemePreference, ThemeToggle};
use crate::Result;
use config::Config;
use log::info;

/// A loaded page and its components
pub struct State {
    /// Configuration loaded from ~/.pageread.cfg
    pub config: Config,

    /// The page DOM
    pub document: Box<dyn Document>,

    /// Preference store for the page's origin
    pub store: Box<dyn PreferenceStore>,

    /// Theme toggle, bound at page-ready
    pub theme: ThemeToggle,

    /// Speech front end
    pub reader: SpeechReader,
}

impl State {
    /// Load a page with the platform store, speech engine and alerts
    pub fn new(config: Config, document: MemoryDocument) -> Result<Self> {
        let store = IniStore::open(&config.store_path(), &config.origin())?;
        info!(
            "Preference store {:?} for origin {}",
            store.path(),
            store.origin()
        );

        let synth = create_synth();
        if synth.is_none() {
            info!("Speech synthesis unavailable");
        }

        Ok(Self::with_parts(
            config,
            Box::new(document),
            Box::new(store),
            synth,
            Box::new(StderrAlert),
        ))
    }

    /// Load a page from explicit collaborators
    pub fn with_parts(
        config: Config,
        mut document: Box<dyn Document>,
        store: Box<dyn PreferenceStore>,
        synth: Option<Box<dyn Synth>>,
        alert: Box<dyn Alert>,
    ) -> Self {
        let theme = ThemeToggle::on_page_ready(config.theme(), store.as_ref(), document.as_mut());
        info!(
            "Page ready: theme {}, toggle {}",
            theme.current(document.as_ref()),
            if theme.is_bound() { "bound" } else { "absent" }
        );

        Self {
            config,
            document,
            store,
            theme,
            reader: SpeechReader::new(synth, alert),
        }
    }

    /// Visual mode currently applied
    pub fn current_theme(&self) -> ThemePreference {
        self.theme.current(self.document.as_ref())
    }

    /// Click the theme toggle control
    pub fn toggle_theme(&mut self) -> Result<Option<ThemePreference>> {
        self.theme.click(self.store.as_mut(), self.document.as_mut())
    }

    /// Speak `input`, or the configured default target when `None`
    pub fn speak(&mut self, input: Option<&str>) {
        let input = match input {
            Some(value) => SpeakInput::from(value),
            None => SpeakInput::Element(self.config.speech_target()),
        };
        self.reader.speak(self.document.as_ref(), input);
    }
}
