use std::path::{Path, PathBuf};

/// Finds a non-colliding path for `desired` inside `dir`.
///
/// A free name is returned unchanged. Otherwise the name is split into base
/// and extension at the last `.` (a dotless name has no extension) and
/// `base.<n><ext>` is probed for n = 1, 2, … until an unused name is found.
/// The result does not exist at call time; there is no atomicity guarantee
/// against concurrent external creation before the eventual rename.
pub fn next_available_name(dir: &Path, desired: &str) -> PathBuf {
    dir.join(next_available_filename(dir, desired))
}

/// Like [`next_available_name`], but yields the chosen filename itself.
pub fn next_available_filename(dir: &Path, desired: &str) -> String {
    if !dir.join(desired).exists() {
        return desired.to_string();
    }

    let (base, ext) = match desired.rsplit_once('.') {
        Some((base, ext)) => (base, format!(".{}", ext)),
        None => (desired, String::new()),
    };

    let mut counter: u64 = 1;
    loop {
        let name = format!("{}.{}{}", base, counter, ext);
        if !dir.join(&name).exists() {
            return name;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn free_name_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = next_available_name(dir.path(), "report.txt");
        assert_eq!(path, dir.path().join("report.txt"));
    }

    #[test]
    fn counter_is_inserted_before_last_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt.locked"), b"x").unwrap();
        let path = next_available_name(dir.path(), "a.txt.locked");
        assert_eq!(path, dir.path().join("a.txt.1.locked"));
    }

    #[test]
    fn dotless_name_gets_counter_appended() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Makefile"), b"x").unwrap();
        let path = next_available_name(dir.path(), "Makefile");
        assert_eq!(path, dir.path().join("Makefile.1"));
    }

    #[test]
    fn smallest_free_counter_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();
        fs::write(dir.path().join("a.1.txt"), b"x").unwrap();
        fs::write(dir.path().join("a.2.txt"), b"x").unwrap();
        let path = next_available_name(dir.path(), "a.txt");
        assert_eq!(path, dir.path().join("a.3.txt"));
    }
}
