pub mod app;
pub mod cli;
pub mod config;
pub mod episode;
pub mod error;
pub mod gate;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod rename;
pub mod scanner;

pub use config::Config;
pub use episode::{find_episode_token, zero_pad_episode, EpisodeToken};
pub use error::{AppError, ExitCode};
pub use gate::{check_directory, GateDecision};
pub use matcher::{match_and_rename, subtitle_matches, MatchOptions, MatchReport, VideoOutcome};
pub use prompt::{Prompter, ScriptedPrompter, StdinPrompter};
pub use rename::{apply_rename, RenameError, RenameOperation, RenameResult};
pub use scanner::{scan_directory, MediaKind, MediaListing, ScannerError};
