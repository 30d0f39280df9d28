//! Export run summaries to JSON.
//!
//! The export is meant to be easy to consume in notebooks or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::AppError;

/// Write `value` as pretty-printed JSON.
pub fn write_summary_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export '{}': {e}", path.display())))?;

    write_json(BufWriter::new(file), value)
        .map_err(|e| AppError::new(4, format!("Failed to write export '{}': {e}", path.display())))?;

    info!(path = %path.display(), "wrote summary export");
    Ok(())
}

/// Serialize and flush; buffered bytes only reach the target on flush.
fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryCount;

    /// Accepts writes, fails on flush (like a full disk behind a buffer).
    struct FlushFails;

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("device full"))
        }
    }

    #[test]
    fn writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let rows = vec![CategoryCount::new("FRA", 2)];

        write_summary_json(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["label"], "FRA");
        assert_eq!(parsed[0]["count"], 2);
    }

    #[test]
    fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("summary.json");
        let err = write_summary_json(&path, &1u8).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn flush_failure_is_reported() {
        let rows = vec![CategoryCount::new("FRA", 2)];
        let err = write_json(BufWriter::new(FlushFails), &rows).unwrap_err();
        assert_eq!(err.to_string(), "device full");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_is_an_export_error() {
        let rows = vec![CategoryCount::new("FRA", 2)];
        let err = write_summary_json(Path::new("/dev/full"), &rows).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
