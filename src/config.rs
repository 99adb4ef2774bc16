//! Run configuration assembled from command-line arguments and environment.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::cli::Args;
use crate::error::AppError;
use crate::gate::DEFAULT_PROTECTED_DIRS;
use crate::matcher::MatchOptions;

/// Comma-separated list overriding the protected directory names
pub const ENV_PROTECTED_DIRS: &str = "SRTMATCH_PROTECTED_DIRS";

#[derive(Debug, Clone)]
pub struct Config {
    pub working_dir: PathBuf,
    pub dry_run: bool,
    pub verbose: u8,
    pub assume_yes: bool,
    pub exclusive: bool,
    pub pause: bool,
    pub protected_dirs: Vec<String>,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        let working_dir = match &args.target_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err(AppError::InvalidArgument {
                    message: "Target directory must not be empty".to_string(),
                });
            }
            Some(dir) => dir.clone(),
            None => env::current_dir()
                .map_err(|e| AppError::Other(format!("Cannot determine current directory: {}", e)))?,
        };

        // Resolve symlinks so the safety gate sees the real location
        let working_dir = fs::canonicalize(&working_dir).unwrap_or(working_dir);

        Ok(Self {
            working_dir,
            dry_run: args.dry,
            verbose: args.verbose,
            assume_yes: args.yes,
            exclusive: args.exclusive,
            pause: args.pause,
            protected_dirs: protected_dirs_from_env(),
        })
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            dry_run: self.dry_run,
            exclusive: self.exclusive,
        }
    }
}

/// Protected directory names from the environment, or the built-in list
pub fn protected_dirs_from_env() -> Vec<String> {
    match env::var(ENV_PROTECTED_DIRS) {
        Ok(value) => parse_protected_dirs(&value),
        Err(_) => DEFAULT_PROTECTED_DIRS.iter().map(|s| s.to_string()).collect(),
    }
}

fn parse_protected_dirs(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
