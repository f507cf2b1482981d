//! Idempotent file writer
//!
//! Regenerating from an unchanged table must produce zero filesystem writes,
//! so incremental build systems watching modification times see no churn.

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Writes `content` to `path` only if it differs from what is on disk.
///
/// A missing or unreadable prior file counts as "no prior content"; the
/// comparison is byte-exact. Returns whether a write actually happened.
/// Write failures are fatal.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    let old = fs::read(path).ok();
    if old.as_deref() == Some(content.as_bytes()) {
        return Ok(false);
    }
    fs::write(path, content)?;
    log::info!("Updating {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_when_absent_then_skips_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.cc");

        assert!(write_if_changed(&path, "int x = 1;\n").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "int x = 1;\n");

        assert!(!write_if_changed(&path, "int x = 1;\n").unwrap());
    }

    #[test]
    fn test_rewrites_on_content_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.cc");

        assert!(write_if_changed(&path, "a").unwrap());
        assert!(write_if_changed(&path, "b").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
    }

    #[test]
    fn test_comparison_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.cc");

        // 行尾差异也算不同，不做任何规范化
        assert!(write_if_changed(&path, "int x = 1;\n").unwrap());
        assert!(write_if_changed(&path, "int x = 1;\r\n").unwrap());
    }
}
