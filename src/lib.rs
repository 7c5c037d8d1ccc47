//! pageread - page theme toggle and read-aloud
//!
//! Persists a light/dark theme preference per origin and reads page text
//! aloud through the platform speech engine.

pub mod alert;
pub mod dom;
pub mod error;
pub mod speech;
pub mod state;
pub mod store;
pub mod theme;

pub use error::{PagereadError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "pageread";
