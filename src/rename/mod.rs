mod name_builder;
mod types;

pub use name_builder::subtitle_name_for;
pub use types::{RenameOperation, RenameResult};

use std::fs;
use std::io;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Errors that can occur while renaming a single file
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Destination already exists: {to}")]
    DestinationExists { from: String, to: String },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FilesystemError {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },
}

/// Rename `op.source_path` to `op.destination_path`.
///
/// An existing destination is an error on every platform. A case-only change
/// passes only when no entry carries the exact destination name, i.e. the
/// filesystem folds case and the "existing" destination is the source.
pub fn apply_rename(op: &RenameOperation) -> Result<(), RenameError> {
    if op.is_noop() {
        debug!(name = %op.source_name, "Name unchanged, nothing to rename");
        return Ok(());
    }

    if destination_taken(op)? {
        return Err(RenameError::DestinationExists {
            from: op.source_name.clone(),
            to: op.destination_name.clone(),
        });
    }

    fs::rename(&op.source_path, &op.destination_path).map_err(|e| {
        RenameError::FilesystemError {
            from: op.source_name.clone(),
            to: op.destination_name.clone(),
            source: e,
        }
    })?;

    info!(
        kind = op.kind.label(),
        "Renamed: {} -> {}", op.source_name, op.destination_name
    );

    Ok(())
}

fn destination_taken(op: &RenameOperation) -> Result<bool, RenameError> {
    if !op.destination_path.exists() {
        return Ok(false);
    }
    if !op.is_case_change() {
        return Ok(true);
    }

    let to_fs_error = |e: io::Error| RenameError::FilesystemError {
        from: op.source_name.clone(),
        to: op.destination_name.clone(),
        source: e,
    };

    let dir = op
        .destination_path
        .parent()
        .ok_or_else(|| to_fs_error(io::Error::new(io::ErrorKind::NotFound, "No parent directory")))?;

    for entry in fs::read_dir(dir).map_err(to_fs_error)? {
        let entry = entry.map_err(to_fs_error)?;
        if entry.file_name().to_str() == Some(op.destination_name.as_str()) {
            trace!(name = %op.destination_name, "Exact destination name present");
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::MediaKind;
    use tempfile::tempdir;

    #[test]
    fn test_apply_rename_moves_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Show.S01E7.srt"), "1").unwrap();

        let op = RenameOperation::new(
            dir.path(),
            "Show.S01E7.srt",
            "Show.S01E07.srt",
            MediaKind::Subtitle,
            "S01E07",
        );
        apply_rename(&op).unwrap();

        assert!(!dir.path().join("Show.S01E7.srt").exists());
        assert_eq!(fs::read_to_string(dir.path().join("Show.S01E07.srt")).unwrap(), "1");
    }

    #[test]
    fn test_apply_rename_noop() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Show.S01E07.srt"), "").unwrap();

        let op = RenameOperation::new(
            dir.path(),
            "Show.S01E07.srt",
            "Show.S01E07.srt",
            MediaKind::Subtitle,
            "S01E07",
        );

        assert!(apply_rename(&op).is_ok());
        assert!(dir.path().join("Show.S01E07.srt").exists());
    }

    #[test]
    fn test_apply_rename_refuses_existing_destination() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.srt"), "a").unwrap();
        fs::write(dir.path().join("b.srt"), "b").unwrap();

        let op = RenameOperation::new(dir.path(), "a.srt", "b.srt", MediaKind::Subtitle, "S01E01");
        let result = apply_rename(&op);

        assert!(matches!(result, Err(RenameError::DestinationExists { .. })));
        assert_eq!(fs::read_to_string(dir.path().join("b.srt")).unwrap(), "b");
        assert!(dir.path().join("a.srt").exists());
    }

    /// Both spellings can only coexist on a case-sensitive filesystem
    fn holds_both(dir: &std::path::Path, a: &str, b: &str) -> bool {
        let names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.iter().any(|n| n == a) && names.iter().any(|n| n == b)
    }

    #[test]
    fn test_apply_rename_case_change_refuses_distinct_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("show.s01e07.srt"), "lower").unwrap();
        fs::write(dir.path().join("Show.S01E07.srt"), "existing").unwrap();

        if !holds_both(dir.path(), "show.s01e07.srt", "Show.S01E07.srt") {
            return;
        }

        let op = RenameOperation::new(
            dir.path(),
            "show.s01e07.srt",
            "Show.S01E07.srt",
            MediaKind::Subtitle,
            "S01E07",
        );
        let result = apply_rename(&op);

        assert!(matches!(result, Err(RenameError::DestinationExists { .. })));
        assert_eq!(
            fs::read_to_string(dir.path().join("Show.S01E07.srt")).unwrap(),
            "existing"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("show.s01e07.srt")).unwrap(),
            "lower"
        );
    }

    #[test]
    fn test_apply_rename_case_change_alone() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("show.s01e07.srt"), "lower").unwrap();

        let op = RenameOperation::new(
            dir.path(),
            "show.s01e07.srt",
            "Show.S01E07.srt",
            MediaKind::Subtitle,
            "S01E07",
        );
        apply_rename(&op).unwrap();

        assert!(holds_both(dir.path(), "Show.S01E07.srt", "Show.S01E07.srt"));
        assert_eq!(
            fs::read_to_string(dir.path().join("Show.S01E07.srt")).unwrap(),
            "lower"
        );
    }

    #[test]
    fn test_apply_rename_missing_source() {
        let dir = tempdir().unwrap();

        let op = RenameOperation::new(dir.path(), "gone.srt", "new.srt", MediaKind::Subtitle, "S01E01");
        let result = apply_rename(&op);

        match result {
            Err(RenameError::FilesystemError { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected filesystem error, got {:?}", other),
        }
    }
}
