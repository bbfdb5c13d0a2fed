//! Plain-text output for the final ASCII art.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Write a text block to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_text<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ascii_image.txt");

        write_text("@@\n  ", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "@@\n  ");
    }

    #[test]
    fn test_unwritable_location() {
        assert!(write_text("x", "/nonexistent/dir/out.txt").is_err());
    }
}
