use std::fmt;

/// A season/episode marker such as `S01E07`, exactly as it appears in a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeToken {
    text: String,
    season: String,
    episode: String,
}

impl EpisodeToken {
    pub(crate) fn new(season_prefix: &str, season: &str, episode: &str) -> Self {
        Self {
            text: format!("{}{}", season_prefix, episode),
            season: season.to_string(),
            episode: episode.to_string(),
        }
    }

    /// The token text with its original case, e.g. `s01E07`
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Raw season digits, leading zeros included
    pub fn season_digits(&self) -> &str {
        &self.season
    }

    /// Raw episode digits, leading zeros included
    pub fn episode_digits(&self) -> &str {
        &self.episode
    }

    pub fn season(&self) -> Option<u32> {
        self.season.parse().ok()
    }

    pub fn episode(&self) -> Option<u32> {
        self.episode.parse().ok()
    }

    /// Case-insensitive substring test against a filename.
    ///
    /// The search is unanchored: `S01E07` is also found inside `S01E070`.
    pub fn is_contained_in(&self, name: &str) -> bool {
        name.to_ascii_lowercase()
            .contains(&self.text.to_ascii_lowercase())
    }

    /// Tokens compare equal regardless of letter case
    pub fn matches(&self, other: &EpisodeToken) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
    }
}

impl fmt::Display for EpisodeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
