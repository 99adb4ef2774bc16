use std::path::{Path, PathBuf};

use crate::scanner::MediaKind;

/// A single rename inside the working directory
#[derive(Debug, Clone)]
pub struct RenameOperation {
    /// Full path to the file being renamed
    pub source_path: PathBuf,
    /// Current file name
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// New file name
    pub destination_name: String,
    pub kind: MediaKind,
    /// Episode token that drove the rename
    pub token: String,
}

impl RenameOperation {
    pub fn new(
        directory: &Path,
        source_name: &str,
        destination_name: &str,
        kind: MediaKind,
        token: &str,
    ) -> Self {
        Self {
            source_path: directory.join(source_name),
            source_name: source_name.to_string(),
            destination_path: directory.join(destination_name),
            destination_name: destination_name.to_string(),
            kind,
            token: token.to_string(),
        }
    }

    /// Source and destination are the same name
    pub fn is_noop(&self) -> bool {
        self.source_name == self.destination_name
    }

    /// Names differ only in letter case
    pub fn is_case_change(&self) -> bool {
        !self.is_noop() && self.source_name.eq_ignore_ascii_case(&self.destination_name)
    }
}

/// Renames performed (or planned) during one matching pass
#[derive(Debug, Clone)]
pub struct RenameResult {
    pub operations: Vec<RenameOperation>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl RenameResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn count_of(&self, kind: MediaKind) -> usize {
        self.operations.iter().filter(|op| op.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}
