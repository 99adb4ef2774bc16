//! Safety gate against running inside a system directory.

use std::path::Path;
use tracing::{info, warn};

use crate::progress::Progress;
use crate::prompt::Prompter;

/// Directory names that require confirmation before anything is renamed
pub const DEFAULT_PROTECTED_DIRS: &[&str] = &["System32"];

/// Result of the safety gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Path is not protected
    Clear,
    /// Path is protected and the user agreed to continue
    Confirmed,
    /// Path is protected and the user declined
    Declined,
}

impl GateDecision {
    pub fn may_proceed(&self) -> bool {
        !matches!(self, GateDecision::Declined)
    }
}

/// First protected name the path textually contains, if any
pub fn protected_match<'a>(dir: &Path, protected: &'a [String]) -> Option<&'a str> {
    let text = dir.to_string_lossy();
    protected
        .iter()
        .map(String::as_str)
        .find(|name| !name.is_empty() && text.contains(name))
}

/// Ask for confirmation when `dir` looks like a system directory.
///
/// With `assume_yes` the question is skipped.
pub fn check_directory(
    dir: &Path,
    protected: &[String],
    assume_yes: bool,
    prompter: &mut dyn Prompter,
    progress: &mut Progress,
) -> GateDecision {
    let Some(name) = protected_match(dir, protected) else {
        return GateDecision::Clear;
    };

    warn!(path = ?dir, protected = name, "Working directory is a system directory");
    progress.warn(&format!(
        "Running in {}. This is a system directory!",
        dir.display()
    ));

    if assume_yes {
        info!("Proceeding in protected directory (--yes)");
        return GateDecision::Confirmed;
    }

    if prompter.confirm("Are you sure you want to proceed in this directory? (Y/N): ") {
        info!("User confirmed protected directory");
        GateDecision::Confirmed
    } else {
        info!("User declined protected directory");
        progress.aborted();
        GateDecision::Declined
    }
}
