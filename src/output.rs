//! Output writing
//!
//! Rendered text goes to disk byte for byte, replacing any existing file.
//! Missing parent directories are not created here, and any storage failure
//! is reported as a write error naming the destination.

use std::path::Path;

use crate::error::{ForgeError, Result};

/// Write `text` to `path`, replacing any existing file
///
/// The parent directory must already exist.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|source| ForgeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_output(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_parent_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_output(dir.path().join("missing/out.txt"), "x").unwrap_err();
        assert_eq!(err.kind(), "WriteError");
        assert!(!dir.path().join("missing").exists());
    }
}
