use crate::config::Config;
use crate::error::{ErrorCode, Result, SimError};
use crate::logger::Logger;
use crate::manifest::{self, RenameRecord, Session};
use crate::names::next_available_filename;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

pub struct AttackReport {
    pub session_id: String,
    pub locked: usize,
    pub failed: usize,
}

pub struct Attacker<'a> {
    logger: &'a Logger,
    config: &'a Config,
    target: PathBuf,
}

impl<'a> Attacker<'a> {
    pub fn new(logger: &'a Logger, config: &'a Config, target: PathBuf) -> Self {
        Self { logger, config, target }
    }

    /// Renames every eligible file in the target directory to its locked
    /// name, records the mapping in a fresh session, and drops the note.
    ///
    /// A rename failure for one file is logged and the batch continues; the
    /// manifest is persisted once at the end, as a complete snapshot.
    pub fn run(&self, note_text: &str) -> Result<AttackReport> {
        if !self.target.is_dir() {
            return Err(SimError::Target {
                code: ErrorCode::TargetMissing,
                message: "target directory does not exist".to_string(),
                path: self.target.clone(),
            });
        }

        let mut manifest = manifest::load(&self.target, self.config, self.logger);
        let session_id = format!("session_{}", Utc::now().format("%Y%m%dT%H%M%SZ"));
        let mut session = Session::default();

        let mut locked = 0usize;
        let mut failed = 0usize;
        for name in self.eligible_files()? {
            let desired = format!("{}{}", name, self.config.locked_suffix);
            let locked_name = next_available_filename(&self.target, &desired);
            match self.lock_file(&name, &locked_name) {
                Ok(()) => {
                    session.renamed.push(RenameRecord { original: name, locked: locked_name });
                    locked += 1;
                }
                Err(e) => {
                    self.logger.error("attack", "rename", &e.to_string());
                    failed += 1;
                }
            }
        }

        let note_path = self.target.join(&self.config.note_name);
        if let Err(e) = self.write_note(&note_path, note_text) {
            // Reported but never fatal to the manifest save.
            self.logger.error("attack", "write_note", &e.to_string());
        }

        manifest.sessions.insert(session_id.clone(), session);
        manifest::save(&self.target, self.config, &manifest)?;

        self.logger.info(
            "attack",
            "done",
            &format!("locked {} file(s) in session {}", locked, session_id),
        );
        Ok(AttackReport { session_id, locked, failed })
    }

    /// Snapshot of the direct regular-file children eligible for locking,
    /// in enumeration order. The manifest, its quarantine backup, the note,
    /// and files already carrying the locked suffix are excluded so a second
    /// attack run is a no-op on them.
    fn eligible_files(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.target).map_err(|e| SimError::Target {
            code: ErrorCode::EnumerateFailed,
            message: format!("could not enumerate target directory: {}", e),
            path: self.target.clone(),
        })?;

        let backup_name = self.config.manifest_backup_name();
        let mut names = Vec::new();
        for entry in entries.flatten() {
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    self.logger.error(
                        "attack",
                        "enumerate",
                        &format!("skipping non-UTF-8 filename: {:?}", raw),
                    );
                    continue;
                }
            };
            if name == self.config.manifest_name
                || name == backup_name
                || name == self.config.note_name
                || name.ends_with(&self.config.locked_suffix)
            {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    fn lock_file(&self, original: &str, locked: &str) -> Result<()> {
        let src = self.target.join(original);
        let dest = self.target.join(locked);
        fs::rename(&src, &dest).map_err(|e| SimError::File {
            code: ErrorCode::RenameFailed,
            message: format!("could not lock {}: {}", original, e),
            path: src,
        })
    }

    fn write_note(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|e| SimError::File {
            code: ErrorCode::NoteWriteFailed,
            message: format!("could not write ransom note: {}", e),
            path: path.to_path_buf(),
        })
    }
}
