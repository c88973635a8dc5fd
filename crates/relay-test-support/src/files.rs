//! Temporary text files for filesystem-backed operations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A text file living inside its own temporary directory.
///
/// The directory and file are removed when the fixture is dropped.
pub struct TextFixture {
    dir: TempDir,
    path: PathBuf,
}

impl TextFixture {
    /// Write `contents` to a fresh file named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or file cannot be created.
    pub fn new(name: &str, contents: &str) -> Result<Self> {
        Self::from_bytes(name, contents.as_bytes())
    }

    /// Write raw `bytes` to a fresh file named `name`, for content that is
    /// not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or file cannot be created.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("relay-fixture-")
            .tempdir()
            .context("failed to create fixture directory")?;
        let path = dir.path().join(name);
        fs::write(&path, bytes)
            .with_context(|| format!("failed to write fixture {}", path.display()))?;
        Ok(Self { dir, path })
    }

    /// Path of the fixture file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path inside the fixture directory that does not exist.
    #[must_use]
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("missing.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_writes_and_cleans_up() -> Result<()> {
        let fixture = TextFixture::new("sample.txt", "a\nb")?;
        assert_eq!(fs::read_to_string(fixture.path())?, "a\nb");
        assert!(!fixture.missing_path().exists());

        let dir = fixture.path().parent().map(Path::to_path_buf);
        drop(fixture);
        assert!(dir.is_some_and(|dir| !dir.exists()));
        Ok(())
    }

    #[test]
    fn fixture_keeps_raw_bytes() -> Result<()> {
        let fixture = TextFixture::from_bytes("raw.bin", &[0xff, 0xfe])?;
        assert_eq!(fs::read(fixture.path())?, vec![0xff, 0xfe]);
        Ok(())
    }
}
