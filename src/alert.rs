//! User-facing alerts

use log::debug;

/// Blocking notice shown to the user
pub trait Alert {
    fn alert(&mut self, message: &str);
}

/// Writes alerts to standard error, the CLI's user-facing channel
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&mut self, message: &str) {
        debug!("Alert: {}", message);
        eprintln!("{}", message);
    }
}
