mod types;

pub use types::EpisodeToken;

use once_cell::sync::Lazy;
use regex::Regex;

// Season/episode marker: S<digits>E<digits>, any case, first occurrence only.
// Examples: "Show.S01E7.mkv", "show s2e113 720p.mp4"
// Not anchored to delimiters, so "XS1E2" inside a release tag also matches.
static EPISODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(S([0-9]+)E)([0-9]+)").unwrap());

/// Minimum width of the episode number after padding
pub const EPISODE_WIDTH: usize = 2;

/// Find the first season/episode token in a filename
pub fn find_episode_token(filename: &str) -> Option<EpisodeToken> {
    let captures = EPISODE_REGEX.captures(filename)?;

    Some(EpisodeToken::new(
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str(),
        captures.get(3)?.as_str(),
    ))
}

/// Rewrite the first episode number in `filename` to at least two digits.
///
/// `E7` becomes `E07`; longer runs such as `E17`, `E123` or `E007` are left
/// alone. Names without a token come back unchanged.
pub fn zero_pad_episode(filename: &str) -> String {
    let Some(captures) = EPISODE_REGEX.captures(filename) else {
        return filename.to_string();
    };

    let (Some(whole), Some(prefix), Some(episode)) =
        (captures.get(0), captures.get(1), captures.get(3))
    else {
        return filename.to_string();
    };

    if episode.as_str().len() >= EPISODE_WIDTH {
        return filename.to_string();
    }

    format!(
        "{}{}{:0>width$}{}",
        &filename[..whole.start()],
        prefix.as_str(),
        episode.as_str(),
        &filename[whole.end()..],
        width = EPISODE_WIDTH
    )
}
