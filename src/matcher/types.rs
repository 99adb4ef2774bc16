use crate::rename::RenameResult;

/// Options for a matching pass
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// Plan and report renames without touching the filesystem
    pub dry_run: bool,
    /// Drop a subtitle from the candidate pool once it has been paired
    pub exclusive: bool,
}

/// What happened to one video during the pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoOutcome {
    /// No season/episode token in the name
    NoPattern { video: String },
    /// Token found but no subtitle carries it
    NoSubtitle { video: String, token: String },
    /// Paired with `subtitle`, which now is (or would be) `subtitle_target`
    Matched {
        video: String,
        token: String,
        subtitle: String,
        subtitle_target: String,
    },
}

impl VideoOutcome {
    pub fn video(&self) -> &str {
        match self {
            VideoOutcome::NoPattern { video } => video,
            VideoOutcome::NoSubtitle { video, .. } => video,
            VideoOutcome::Matched { video, .. } => video,
        }
    }
}

/// Outcome of a full matching pass
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcomes: Vec<VideoOutcome>,
    pub renames: RenameResult,
}

impl MatchReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            renames: RenameResult::new(dry_run),
        }
    }

    pub fn matched_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, VideoOutcome::Matched { .. }))
            .count()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &VideoOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, VideoOutcome::NoSubtitle { .. }))
    }

    pub fn without_pattern(&self) -> impl Iterator<Item = &VideoOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, VideoOutcome::NoPattern { .. }))
    }
}
