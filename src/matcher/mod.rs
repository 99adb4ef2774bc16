mod types;

pub use types::{MatchOptions, MatchReport, VideoOutcome};

use std::path::Path;
use tracing::{debug, info, warn};

use crate::episode::{find_episode_token, zero_pad_episode, EpisodeToken};
use crate::progress::Progress;
use crate::rename::{apply_rename, subtitle_name_for, RenameError, RenameOperation, RenameResult};
use crate::scanner::MediaKind;

/// Whether `subtitle` belongs to the episode identified by `token`.
///
/// The name is checked as-is and in its zero-padded form, so an unpadded
/// `Show.S01E7.srt` still pairs with `S01E07`.
pub fn subtitle_matches(token: &EpisodeToken, subtitle: &str) -> bool {
    token.is_contained_in(subtitle) || token.is_contained_in(&zero_pad_episode(subtitle))
}

/// Pair every video with the first subtitle carrying its episode token and
/// rename both to the padded video name.
///
/// Videos are processed in the given order and subtitles are scanned in the
/// given order. Filesystem errors abort the pass; renames already done stay.
pub fn match_and_rename(
    videos: &[String],
    subtitles: &[String],
    working_dir: &Path,
    options: &MatchOptions,
    progress: &mut Progress,
) -> Result<MatchReport, RenameError> {
    let mut report = MatchReport::new(options.dry_run);
    let mut consumed = vec![false; subtitles.len()];
    let total = videos.len();

    if videos.is_empty() {
        debug!("No videos to match");
        return Ok(report);
    }

    info!(
        videos = total,
        subtitles = subtitles.len(),
        exclusive = options.exclusive,
        "Matching subtitles to videos"
    );

    for (i, video) in videos.iter().enumerate() {
        let padded = zero_pad_episode(video);
        debug!(video = %video, padded = %padded, "Processing video");
        progress.video_start(i + 1, total, video, &padded);

        let Some(token) = find_episode_token(&padded) else {
            warn!(video = %video, "Could not find episode pattern");
            progress.no_pattern(video);
            report.outcomes.push(VideoOutcome::NoPattern {
                video: video.clone(),
            });
            continue;
        };

        debug!(token = %token, "Matching pattern");
        progress.token_found(token.as_str());

        if padded != *video {
            let op = RenameOperation::new(
                working_dir,
                video,
                &padded,
                MediaKind::Video,
                token.as_str(),
            );
            perform(op, options, progress, &mut report.renames)?;
        }

        let target = subtitle_name_for(&padded);
        let mut matched = None;

        for (j, subtitle) in subtitles.iter().enumerate() {
            if options.exclusive && consumed[j] {
                continue;
            }

            debug!(subtitle = %subtitle, token = %token, "Checking subtitle");
            progress.checking_subtitle(subtitle);

            if subtitle_matches(&token, subtitle) {
                debug!(subtitle = %subtitle, token = %token, "Subtitle matched");
                consumed[j] = true;

                let op = RenameOperation::new(
                    working_dir,
                    subtitle,
                    &target,
                    MediaKind::Subtitle,
                    token.as_str(),
                );
                perform(op, options, progress, &mut report.renames)?;

                matched = Some(subtitle.clone());
                break;
            }
        }

        match matched {
            Some(subtitle) => report.outcomes.push(VideoOutcome::Matched {
                video: video.clone(),
                token: token.to_string(),
                subtitle,
                subtitle_target: target,
            }),
            None => {
                warn!(video = %video, token = %token, "No matching subtitle");
                progress.no_match(video);
                report.outcomes.push(VideoOutcome::NoSubtitle {
                    video: video.clone(),
                    token: token.to_string(),
                });
            }
        }
    }

    info!(
        matched = report.matched_count(),
        renamed = report.renames.len(),
        "Matching pass complete"
    );

    Ok(report)
}

fn perform(
    op: RenameOperation,
    options: &MatchOptions,
    progress: &mut Progress,
    result: &mut RenameResult,
) -> Result<(), RenameError> {
    if op.is_noop() {
        progress.already_named(&op.source_name);
        return Ok(());
    }

    progress.renaming(op.kind, &op.source_name, &op.destination_name, options.dry_run);

    if !options.dry_run {
        apply_rename(&op)?;
    }

    result.add_operation(op);
    Ok(())
}
