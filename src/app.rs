//! One complete run: safety gate, directory listing, matching pass, summary.

use std::io::Write;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;
use crate::gate::check_directory;
use crate::matcher::{match_and_rename, MatchReport};
use crate::output::{display_dry_run, display_execution_result};
use crate::progress::Progress;
use crate::prompt::Prompter;
use crate::scanner::scan_directory;

/// Run a matching pass over `config.working_dir`.
///
/// Returns `None` when the user declined the safety gate; nothing is touched
/// in that case.
pub fn run(
    config: &Config,
    prompter: &mut dyn Prompter,
    progress: &mut Progress,
    out: &mut impl Write,
) -> Result<Option<MatchReport>, AppError> {
    let dir = &config.working_dir;

    let decision = check_directory(
        dir,
        &config.protected_dirs,
        config.assume_yes,
        prompter,
        progress,
    );
    if !decision.may_proceed() {
        info!(path = ?dir, "Aborted at safety gate");
        return Ok(None);
    }

    progress.scan_start(dir);
    let listing = scan_directory(dir)?;
    progress.files_listed(&listing.files);
    for path in &listing.unreadable {
        progress.unreadable_name(path);
    }
    progress.media_found(&listing.videos, &listing.subtitles);

    info!(
        "Found {} videos and {} subtitles",
        listing.videos.len(),
        listing.subtitles.len()
    );
    for video in &listing.videos {
        debug!("  video: {}", video);
    }
    for subtitle in &listing.subtitles {
        debug!("  subtitle: {}", subtitle);
    }

    let options = config.match_options();
    let report = match_and_rename(
        &listing.videos,
        &listing.subtitles,
        dir,
        &options,
        progress,
    )?;

    progress.finished(report.renames.len(), config.dry_run);

    let written = if config.dry_run {
        display_dry_run(&report, out)
    } else {
        display_execution_result(&report, out)
    };
    written.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(Some(report))
}
