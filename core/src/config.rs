use crate::error::{ErrorCode, Result, SimError};

/// Default note dropped into the target directory during an attack.
pub const DEFAULT_NOTE_TEXT: &str = "Your files have been encrypted!\n\n\
To recover them, send 1 Bitcoin to the address below:\n\
[FAKE BITCOIN ADDRESS]\n\n\
Contact: fakehacker@example.com\n\
(This is a simulated, harmless demonstration. No real encryption was performed.)\n";

/// Directory-relative filenames and markers used by the simulation.
///
/// These are configuration values rather than hard-coded literals so tests
/// can point a `Simulator` at scratch names without touching a directory's
/// real working files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hidden manifest filename inside the target directory.
    pub manifest_name: String,
    /// Ransom-note filename inside the target directory.
    pub note_name: String,
    /// Suffix appended to locked files, including the leading dot.
    pub locked_suffix: String,
    /// Note text written when the caller supplies none.
    pub default_note_text: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            manifest_name: ".ransomware_manifest.json".to_string(),
            note_name: "README_RESTORE_FILES.txt".to_string(),
            locked_suffix: ".locked".to_string(),
            default_note_text: DEFAULT_NOTE_TEXT.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.locked_suffix.starts_with('.') || self.locked_suffix.len() < 2 {
            return Err(SimError::Config {
                code: ErrorCode::InvalidConfig,
                message: "must be a non-empty extension starting with '.'".to_string(),
                field: format!("locked_suffix = {:?}", self.locked_suffix),
            });
        }
        for (field, name) in [
            ("manifest_name", &self.manifest_name),
            ("note_name", &self.note_name),
        ] {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(SimError::Config {
                    code: ErrorCode::InvalidConfig,
                    message: "must be a bare filename with no directory component".to_string(),
                    field: format!("{} = {:?}", field, name),
                });
            }
        }
        Ok(())
    }

    /// Backup name the manifest is quarantined under when it fails to parse.
    pub fn manifest_backup_name(&self) -> String {
        format!("{}.bak", self.manifest_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
