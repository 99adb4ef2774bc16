use std::path::Path;

use crate::scanner::SUBTITLE_EXTENSION;

/// Build the subtitle name that belongs to a (padded) video name.
///
/// Only the last extension is swapped, so `Show.S01E07.en.mkv` maps to
/// `Show.S01E07.en.srt`.
pub fn subtitle_name_for(video_name: &str) -> String {
    Path::new(video_name)
        .with_extension(SUBTITLE_EXTENSION)
        .to_string_lossy()
        .to_string()
}
