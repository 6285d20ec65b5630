use crate::config::Config;
use crate::error::{ErrorCode, Result, SimError};
use crate::logger::Logger;
use crate::manifest;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RestoreReport {
    /// Id of the consumed session, or `None` when the manifest was empty.
    pub session_id: Option<String>,
    pub restored: usize,
    pub skipped: usize,
}

pub struct Restorer<'a> {
    logger: &'a Logger,
    config: &'a Config,
    target: PathBuf,
}

impl<'a> Restorer<'a> {
    pub fn new(logger: &'a Logger, config: &'a Config, target: PathBuf) -> Self {
        Self { logger, config, target }
    }

    /// Reverses the most recent session's renames where safe, removes the
    /// note, and deletes the consumed session from the manifest.
    ///
    /// A session is consumed in full on one restore attempt: it is deleted
    /// even when some of its records had to be skipped.
    pub fn run(&self) -> Result<RestoreReport> {
        if !self.target.is_dir() {
            return Err(SimError::Target {
                code: ErrorCode::TargetMissing,
                message: "target directory does not exist".to_string(),
                path: self.target.clone(),
            });
        }

        let mut manifest = manifest::load(&self.target, self.config, self.logger);
        let session_id = match manifest.latest_session_id() {
            Some(id) => id.to_string(),
            None => {
                self.logger.info("restore", "scan", "no sessions found, nothing to restore");
                return Ok(RestoreReport { session_id: None, restored: 0, skipped: 0 });
            }
        };

        // The session is consumed regardless of per-record outcomes.
        let session = manifest.sessions.remove(&session_id).unwrap_or_default();

        let mut restored = 0usize;
        let mut skipped = 0usize;
        for record in &session.renamed {
            let locked = self.target.join(&record.locked);
            let original = self.target.join(&record.original);
            if !locked.exists() {
                self.logger.error(
                    "restore",
                    "rename",
                    &format!("locked file not found: {}", locked.display()),
                );
                skipped += 1;
                continue;
            }
            if original.exists() {
                // Never overwrite live data; the locked file stays put.
                self.logger.error(
                    "restore",
                    "rename",
                    &format!("original already exists, skipping: {}", original.display()),
                );
                skipped += 1;
                continue;
            }
            match self.unlock_file(&locked, &original) {
                Ok(()) => restored += 1,
                Err(e) => {
                    self.logger.error("restore", "rename", &e.to_string());
                    skipped += 1;
                }
            }
        }

        let note_path = self.target.join(&self.config.note_name);
        if note_path.exists() {
            // Best-effort cleanup.
            if let Err(e) = fs::remove_file(&note_path) {
                self.logger.error(
                    "restore",
                    "remove_note",
                    &format!("could not remove note: {}", e),
                );
            }
        }

        manifest::save(&self.target, self.config, &manifest)?;

        self.logger.info(
            "restore",
            "done",
            &format!("restored {} file(s) from session {}", restored, session_id),
        );
        Ok(RestoreReport { session_id: Some(session_id), restored, skipped })
    }

    fn unlock_file(&self, locked: &Path, original: &Path) -> Result<()> {
        fs::rename(locked, original).map_err(|e| SimError::File {
            code: ErrorCode::RenameFailed,
            message: format!("could not restore {}: {}", locked.display(), e),
            path: locked.to_path_buf(),
        })
    }
}
