//! Progress output for user-facing status updates.
//!
//! Every decision of a matching pass (listing, matching, renaming, skips) is
//! reported here. From `-vv` on output is suppressed since debug-level
//! tracing carries the same information.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::scanner::MediaKind;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    // Standard: https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self::new_with_ui(false, should_use_colors())
    }

    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (debug tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        if !colors_enabled {
            colored::control::set_override(false);
        }

        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    fn line(&mut self, plain: &str, styled: impl FnOnce(&str) -> String) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", styled(plain));
        } else {
            let _ = writeln!(self.writer, "{}", plain);
        }
    }

    /// Report the directory being processed
    pub fn scan_start(&mut self, dir: &Path) {
        let msg = format!("Starting in directory: {}", dir.display());
        self.line(&msg, |m| m.bold().to_string());
    }

    /// Report the full directory listing
    pub fn files_listed(&mut self, files: &[String]) {
        let msg = format!("Files in the directory: {}", join_names(files));
        self.line(&msg, |m| m.dimmed().to_string());
    }

    /// Report a file left alone because its name is not valid UTF-8
    pub fn unreadable_name(&mut self, path: &Path) {
        self.warn(&format!(
            "Skipping file with a name that is not valid UTF-8: {}",
            path.display()
        ));
    }

    /// Report the videos and subtitles picked out of the listing
    pub fn media_found(&mut self, videos: &[String], subtitles: &[String]) {
        if videos.is_empty() {
            self.warn("No video files (.mkv, .mp4) found.");
        }
        if subtitles.is_empty() {
            self.warn("No .srt files found.");
        }

        let msg = format!("Found video files: {}", join_names(videos));
        self.line(&msg, |m| m.cyan().to_string());
        let msg = format!("Found subtitle files: {}", join_names(subtitles));
        self.line(&msg, |m| m.cyan().to_string());
    }

    /// Report the video currently being processed and its padded name
    pub fn video_start(&mut self, current: usize, total: usize, video: &str, padded: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                video,
                "→".cyan(),
                padded.dimmed()
            );
        } else {
            let _ = writeln!(
                self.writer,
                "[{}/{}] Processing video file: {} -> Padded: {}",
                current, total, video, padded
            );
        }
    }

    /// Report the token extracted from the padded name
    pub fn token_found(&mut self, token: &str) {
        let msg = format!("  Matching pattern for video: {}", token);
        self.line(&msg, |m| m.dimmed().to_string());
    }

    /// Report a subtitle candidate being checked
    pub fn checking_subtitle(&mut self, subtitle: &str) {
        let msg = format!("  Checking subtitle file: {}", subtitle);
        self.line(&msg, |m| m.dimmed().to_string());
    }

    /// Report a rename about to happen (or planned, in dry run)
    pub fn renaming(&mut self, kind: MediaKind, from: &str, to: &str, dry_run: bool) {
        if self.silent {
            return;
        }
        let verb = if dry_run { "Would rename" } else { "Renaming" };
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {} {} {} {}",
                verb.green(),
                kind.label(),
                from.dimmed(),
                "→".green(),
                to
            );
        } else {
            let _ = writeln!(
                self.writer,
                "  {} {} '{}' to '{}'",
                verb,
                kind.label(),
                from,
                to
            );
        }
    }

    /// Report a file whose name is already correct
    pub fn already_named(&mut self, name: &str) {
        let msg = format!("  Already named correctly: {}", name);
        self.line(&msg, |m| m.dimmed().to_string());
    }

    /// Report a video without a recognizable episode token
    pub fn no_pattern(&mut self, video: &str) {
        self.warn(&format!("Could not find episode pattern in video: {}", video));
    }

    /// Report a video without a subtitle
    pub fn no_match(&mut self, video: &str) {
        self.warn(&format!("No matching subtitle found for video: {}", video));
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report that processing was stopped at the safety gate
    pub fn aborted(&mut self) {
        if self.silent {
            return;
        }
        let msg = "Aborted to prevent accidental file changes in a system directory.";
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✗".red().bold(), msg.red());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report end of the matching pass
    pub fn finished(&mut self, renamed: usize, dry_run: bool) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if dry_run {
            let msg = format!("Dry run complete. {} files would be renamed.", renamed);
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{}", msg.dimmed());
            } else {
                let _ = writeln!(self.writer, "{}", msg);
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("Finished, {} files renamed", renamed).green()
            );
        } else {
            let _ = writeln!(self.writer, "Finished. {} files renamed.", renamed);
        }
    }
}

fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        return "(none)".to_string();
    }
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_progress() -> (Progress, std::sync::Arc<std::sync::Mutex<Vec<u8>>>) {
        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    struct TestWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output_of(buffer: &std::sync::Arc<std::sync::Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_video_progress() {
        let (mut progress, buffer) = create_test_progress();

        progress.video_start(1, 2, "Show.S01E7.mkv", "Show.S01E07.mkv");
        progress.token_found("S01E07");

        let output = output_of(&buffer);
        assert!(output.contains("[1/2]"));
        assert!(output.contains("Padded: Show.S01E07.mkv"));
        assert!(output.contains("Matching pattern for video: S01E07"));
    }

    #[test]
    fn test_renaming_dry_run_wording() {
        let (mut progress, buffer) = create_test_progress();

        progress.renaming(MediaKind::Subtitle, "a.srt", "b.srt", true);
        progress.renaming(MediaKind::Video, "a.mkv", "b.mkv", false);

        let output = output_of(&buffer);
        assert!(output.contains("Would rename subtitle 'a.srt' to 'b.srt'"));
        assert!(output.contains("Renaming video 'a.mkv' to 'b.mkv'"));
    }

    #[test]
    fn test_media_found_reports_missing_kinds() {
        let (mut progress, buffer) = create_test_progress();

        progress.media_found(&[], &[]);

        let output = output_of(&buffer);
        assert!(output.contains("No video files (.mkv, .mp4) found."));
        assert!(output.contains("No .srt files found."));
        assert!(output.contains("Found video files: (none)"));
    }

    #[test]
    fn test_unreadable_name_report() {
        let (mut progress, buffer) = create_test_progress();

        progress.unreadable_name(Path::new("/shows/bad.mkv"));

        let output = output_of(&buffer);
        assert!(output.contains("not valid UTF-8: /shows/bad.mkv"));
    }

    #[test]
    fn test_skip_reports() {
        let (mut progress, buffer) = create_test_progress();

        progress.no_pattern("movie.mkv");
        progress.no_match("Show.S01E09.mkv");

        let output = output_of(&buffer);
        assert!(output.contains("Could not find episode pattern in video: movie.mkv"));
        assert!(output.contains("No matching subtitle found for video: Show.S01E09.mkv"));
    }

    #[test]
    fn test_silent_writes_nothing() {
        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut progress = Progress::with_writer(Box::new(TestWriter(buffer.clone())));
        progress.silent = true;

        progress.no_pattern("movie.mkv");
        progress.finished(3, false);

        assert!(output_of(&buffer).is_empty());
    }
}
