use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // --- Target validation ---
    TargetMissing,
    EnumerateFailed,

    // --- Manifest ---
    ManifestWriteFailed,

    // --- File I/O ---
    RenameFailed,
    NoteWriteFailed,
    FileWriteFailed,

    // --- Configuration ---
    InvalidConfig,
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Target Error: {message} (path: {path:?})")]
    Target { code: ErrorCode, message: String, path: PathBuf },

    #[error("Manifest Error: {message} (path: {path:?})")]
    Manifest { code: ErrorCode, message: String, path: PathBuf },

    #[error("File Error: {message} (path: {path:?})")]
    File { code: ErrorCode, message: String, path: PathBuf },

    #[error("Config Error: {message} (field: {field})")]
    Config { code: ErrorCode, message: String, field: String },
}
