use crate::config::Config;
use crate::error::{ErrorCode, Result, SimError};
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One file's transformation within a session.
///
/// `original` is the exact name the file had before the attack touched it;
/// `locked` is unique within the directory at the time it was chosen,
/// including any collision-disambiguation counter. Neither carries a
/// directory component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub original: String,
    pub locked: String,
}

/// One simulated attack run: the renames it performed, in processing order.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Session {
    #[serde(default)]
    pub renamed: Vec<RenameRecord>,
}

/// The root persisted document.
///
/// Session ids are `session_<UTC timestamp>` strings, so the `BTreeMap`
/// keeps them in creation order and the most recent session is the last key.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Manifest {
    #[serde(default)]
    pub sessions: BTreeMap<String, Session>,
}

impl Manifest {
    /// Id of the most recently created session, by identifier sort.
    pub fn latest_session_id(&self) -> Option<&str> {
        self.sessions.keys().next_back().map(String::as_str)
    }
}

/// Reads the manifest from its well-known path inside `target`.
///
/// A missing file yields an empty manifest. An unreadable or unparsable file
/// is quarantined under a backup name (best-effort; a failed rename is
/// logged and swallowed) and an empty manifest is returned, so corruption
/// never aborts the calling operation.
pub fn load(target: &Path, config: &Config, logger: &Logger) -> Manifest {
    let path = target.join(&config.manifest_name);
    if !path.exists() {
        return Manifest::default();
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| {
            serde_json::from_str::<Manifest>(&content).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(manifest) => manifest,
        Err(reason) => {
            logger.error(
                "manifest",
                "load",
                &format!("unreadable manifest at {}: {}", path.display(), reason),
            );
            let backup = target.join(config.manifest_backup_name());
            match fs::rename(&path, &backup) {
                Ok(()) => logger.info(
                    "manifest",
                    "quarantine",
                    &format!("moved corrupt manifest to {}", backup.display()),
                ),
                Err(e) => logger.error(
                    "manifest",
                    "quarantine",
                    &format!("could not move corrupt manifest aside: {}", e),
                ),
            }
            Manifest::default()
        }
    }
}

/// Serializes the manifest to its well-known path, overwriting prior
/// contents. Saved once per operation, always as a complete snapshot.
pub fn save(target: &Path, config: &Config, manifest: &Manifest) -> Result<()> {
    let path = target.join(&config.manifest_name);
    let content = serde_json::to_string_pretty(manifest).map_err(|e| SimError::Manifest {
        code: ErrorCode::ManifestWriteFailed,
        message: format!("could not serialize manifest: {}", e),
        path: path.clone(),
    })?;

    fs::write(&path, content).map_err(|e| SimError::Manifest {
        code: ErrorCode::ManifestWriteFailed,
        message: format!("could not write manifest: {}", e),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_logger() -> Logger {
        Logger::new(1)
    }

    #[test]
    fn load_missing_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = load(dir.path(), &Config::new(), &test_logger());
        assert!(manifest.sessions.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new();
        let mut manifest = Manifest::default();
        manifest.sessions.insert(
            "session_20240101T000000Z".to_string(),
            Session {
                renamed: vec![RenameRecord {
                    original: "a.txt".to_string(),
                    locked: "a.txt.locked".to_string(),
                }],
            },
        );
        save(dir.path(), &config, &manifest).unwrap();

        let loaded = load(dir.path(), &config, &test_logger());
        assert_eq!(loaded.sessions.len(), 1);
        let session = &loaded.sessions["session_20240101T000000Z"];
        assert_eq!(session.renamed[0].original, "a.txt");
        assert_eq!(session.renamed[0].locked, "a.txt.locked");
    }

    #[test]
    fn corrupt_manifest_is_quarantined_and_reset() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new();
        let path = dir.path().join(&config.manifest_name);
        std::fs::write(&path, b"{ not json").unwrap();

        let manifest = load(dir.path(), &config, &test_logger());
        assert!(manifest.sessions.is_empty());
        assert!(!path.exists());
        let backup = dir.path().join(config.manifest_backup_name());
        assert_eq!(std::fs::read(backup).unwrap(), b"{ not json");
    }

    #[test]
    fn wrong_document_shape_resets_like_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new();
        let path = dir.path().join(&config.manifest_name);
        std::fs::write(&path, b"[1, 2, 3]").unwrap();

        let manifest = load(dir.path(), &config, &test_logger());
        assert!(manifest.sessions.is_empty());
        assert!(dir.path().join(config.manifest_backup_name()).exists());
    }

    #[test]
    fn latest_session_id_sorts_lexicographically() {
        let mut manifest = Manifest::default();
        manifest
            .sessions
            .insert("session_20240101T000000Z".to_string(), Session::default());
        manifest
            .sessions
            .insert("session_20231231T235959Z".to_string(), Session::default());
        assert_eq!(manifest.latest_session_id(), Some("session_20240101T000000Z"));
    }
}
