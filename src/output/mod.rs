use crate::matcher::{MatchReport, VideoOutcome};
use crate::scanner::MediaKind;
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(report: &MatchReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Videos:     {}", report.outcomes.len())?;
    writeln!(writer, "Operations: {}", report.renames.len())?;
    writeln!(writer)?;

    if report.outcomes.is_empty() {
        writeln!(writer, "No video files found.")?;
        return Ok(());
    }

    if report.renames.is_empty() {
        writeln!(writer, "No files to rename.")?;
    } else {
        writeln!(writer, "Planned changes:")?;
        writeln!(writer)?;

        for (i, op) in report.renames.operations.iter().enumerate() {
            writeln!(writer, "  {}. [{}] {}", i + 1, op.token, op.kind.label())?;
            writeln!(writer, "     From: {}", op.source_name)?;
            writeln!(writer, "     To:   {}", op.destination_name)?;
            writeln!(writer)?;
        }
    }

    write_skipped(report, writer)?;

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} videos would be renamed",
        report.renames.count_of(MediaKind::Video)
    )?;
    writeln!(
        writer,
        "  {} subtitles would be renamed",
        report.renames.count_of(MediaKind::Subtitle)
    )?;
    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(report: &MatchReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;

    if report.outcomes.is_empty() {
        writeln!(writer, "No video files found.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "Matched {} of {} videos.",
        report.matched_count(),
        report.outcomes.len()
    )?;
    writeln!(
        writer,
        "Renamed {} videos and {} subtitles.",
        report.renames.count_of(MediaKind::Video),
        report.renames.count_of(MediaKind::Subtitle)
    )?;

    write_pairs(report, writer)?;
    write_skipped(report, writer)
}

fn write_pairs(report: &MatchReport, writer: &mut impl Write) -> io::Result<()> {
    let mut header_written = false;

    for outcome in &report.outcomes {
        if let VideoOutcome::Matched {
            video,
            token,
            subtitle,
            subtitle_target,
        } = outcome
        {
            if !header_written {
                writeln!(writer)?;
                writeln!(writer, "Paired subtitles:")?;
                header_written = true;
            }
            writeln!(writer, "  [{}] {}", token, video)?;
            writeln!(writer, "     {} -> {}", subtitle, subtitle_target)?;
        }
    }

    Ok(())
}

fn write_skipped(report: &MatchReport, writer: &mut impl Write) -> io::Result<()> {
    let unmatched: Vec<&VideoOutcome> = report.unmatched().collect();
    if !unmatched.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No matching subtitle:")?;
        for outcome in unmatched {
            writeln!(writer, "  - {}", outcome.video())?;
        }
    }

    let without_pattern: Vec<&VideoOutcome> = report.without_pattern().collect();
    if !without_pattern.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No episode pattern:")?;
        for outcome in without_pattern {
            writeln!(writer, "  - {}", outcome.video())?;
        }
    }

    Ok(())
}
