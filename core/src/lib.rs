#![deny(warnings)]

//! Harmless educational simulator of file-encrypting malware behavior.
//!
//! An attack renames the direct children of a target directory with a
//! locked-file suffix, drops a warning note, and records every rename in a
//! session inside a hidden manifest. A restore reverses the most recent
//! session's renames where safe and consumes the session. No file content
//! is ever touched.

pub mod attack;
pub mod config;
pub mod error;
pub mod logger;
pub mod manifest;
pub mod names;
pub mod restore;
pub mod samples;

use attack::{AttackReport, Attacker};
use config::Config;
use error::Result;
use logger::Logger;
use restore::{Restorer, RestoreReport};
use std::path::Path;

/// Facade composing configuration, logging, and the two operations.
///
/// Each call performs one full load → mutate → save cycle on the target's
/// manifest; nothing is cached across operations.
pub struct Simulator {
    config: Config,
    logger: Logger,
}

impl Simulator {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let logger = Logger::new(logger::generate_rid());
        Ok(Self { config, logger })
    }

    /// Runs the attack operation against `target`. When `note_text` is
    /// `None` the configured default note is written.
    pub fn attack(&self, target: &Path, note_text: Option<&str>) -> Result<AttackReport> {
        let note = note_text.unwrap_or(&self.config.default_note_text);
        Attacker::new(&self.logger, &self.config, target.to_path_buf()).run(note)
    }

    /// Restores the most recent session recorded for `target`.
    pub fn restore(&self, target: &Path) -> Result<RestoreReport> {
        Restorer::new(&self.logger, &self.config, target.to_path_buf()).run()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
