use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "srtmatch")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename subtitle files to match their episode video files")]
pub struct Args {
    /// Directory containing the videos and subtitles (defaults to the current directory)
    pub target_dir: Option<PathBuf>,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not ask for confirmation in protected system directories
    #[arg(short, long)]
    pub yes: bool,

    /// Pair each subtitle with at most one video
    #[arg(short, long)]
    pub exclusive: bool,

    /// Wait for Enter before exiting
    #[arg(short, long)]
    pub pause: bool,
}
