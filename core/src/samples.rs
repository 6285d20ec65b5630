use crate::error::{ErrorCode, Result, SimError};
use std::fs;
use std::path::Path;

const SAMPLE_CONTENT: &str = "This is a safe test file for ransomware simulation.\n";

/// Populates `target` with `count` sample files named `file_<i>.txt`,
/// creating the directory if needed. Files that already exist are left
/// alone. Returns the number of files created.
pub fn create_sample_files(target: &Path, count: usize) -> Result<usize> {
    fs::create_dir_all(target).map_err(|e| SimError::File {
        code: ErrorCode::FileWriteFailed,
        message: format!("could not create target directory: {}", e),
        path: target.to_path_buf(),
    })?;

    let mut created = 0usize;
    for i in 0..count {
        let path = target.join(format!("file_{}.txt", i));
        if path.exists() {
            continue;
        }
        fs::write(&path, SAMPLE_CONTENT).map_err(|e| SimError::File {
            code: ErrorCode::FileWriteFailed,
            message: format!("could not write sample file: {}", e),
            path: path.clone(),
        })?;
        created += 1;
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_requested_files_once() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(create_sample_files(dir.path(), 3).unwrap(), 3);
        assert!(dir.path().join("file_0.txt").exists());
        assert!(dir.path().join("file_2.txt").exists());

        // Existing files are not recreated.
        assert_eq!(create_sample_files(dir.path(), 3).unwrap(), 0);
    }

    #[test]
    fn creates_missing_target_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("victim");
        assert_eq!(create_sample_files(&nested, 1).unwrap(), 1);
        assert!(nested.join("file_0.txt").exists());
    }
}
