use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Extensions treated as episode videos (compared case-insensitively)
pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4"];

/// Extension treated as a subtitle (compared case-insensitively)
pub const SUBTITLE_EXTENSION: &str = "srt";

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Subtitle,
}

impl MediaKind {
    /// Classify a filename by its extension
    pub fn from_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;

        if VIDEO_EXTENSIONS
            .iter()
            .any(|ext| extension.eq_ignore_ascii_case(ext))
        {
            Some(MediaKind::Video)
        } else if extension.eq_ignore_ascii_case(SUBTITLE_EXTENSION) {
            Some(MediaKind::Subtitle)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Subtitle => "subtitle",
        }
    }
}

/// Files of the working directory, captured once before any rename.
///
/// Order is whatever the filesystem enumeration yields.
#[derive(Debug, Clone, Default)]
pub struct MediaListing {
    pub files: Vec<String>,
    pub videos: Vec<String>,
    pub subtitles: Vec<String>,
    /// Entries whose names are not valid UTF-8; left untouched
    pub unreadable: Vec<PathBuf>,
}

impl MediaListing {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut listing = MediaListing::default();

        for name in names {
            let name = name.into();
            match MediaKind::from_name(&name) {
                Some(MediaKind::Video) => listing.videos.push(name.clone()),
                Some(MediaKind::Subtitle) => listing.subtitles.push(name.clone()),
                None => trace!(name = %name, "Ignoring non-media file"),
            }
            listing.files.push(name);
        }

        listing
    }
}

/// List the regular files of `target` (no recursion) and sort out videos and subtitles
pub fn scan_directory(target: &Path) -> Result<MediaListing, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut names = Vec::new();
    let mut unreadable = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        if !path.is_file() {
            trace!(path = ?path, "Skipping non-file");
            continue;
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };

        match file_name.to_str() {
            Some(name) => names.push(name.to_string()),
            None => {
                warn!(path = ?path, "Skipping file with non UTF-8 name");
                unreadable.push(path);
            }
        }
    }

    let mut listing = MediaListing::from_names(names);
    listing.unreadable = unreadable;

    debug!(
        files = listing.files.len(),
        videos = listing.videos.len(),
        subtitles = listing.subtitles.len(),
        "Scan complete"
    );

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn test_media_kind_from_name() {
        assert_eq!(MediaKind::from_name("a.mkv"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_name("a.MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_name("a.en.SRT"), Some(MediaKind::Subtitle));
        assert_eq!(MediaKind::from_name("a.avi"), None);
        assert_eq!(MediaKind::from_name("mkv"), None);
        assert_eq!(MediaKind::from_name("a.srt.txt"), None);
    }

    #[test]
    fn test_listing_keeps_input_order() {
        let listing = MediaListing::from_names(["b.srt", "z.mkv", "a.srt", "notes.txt", "c.mp4"]);

        assert_eq!(listing.files.len(), 5);
        assert_eq!(listing.videos, vec!["z.mkv", "c.mp4"]);
        assert_eq!(listing.subtitles, vec!["b.srt", "a.srt"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path()).unwrap();
        assert!(result.files.is_empty());
        assert!(result.videos.is_empty());
        assert!(result.subtitles.is_empty());
    }

    #[test]
    fn test_scan_classifies_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Show.S01E01.mkv"), "").unwrap();
        fs::write(dir.path().join("Show.S01E02.MP4"), "").unwrap();
        fs::write(dir.path().join("Show.S01E1.srt"), "").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();

        let result = scan_directory(dir.path()).unwrap();

        assert_eq!(result.files.len(), 4);
        assert_eq!(
            sorted(result.videos),
            vec!["Show.S01E01.mkv", "Show.S01E02.MP4"]
        );
        assert_eq!(result.subtitles, vec!["Show.S01E1.srt"]);
    }

    #[test]
    fn test_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Extras.S01E01.mkv")).unwrap();
        fs::write(dir.path().join("Show.S01E01.mkv"), "").unwrap();

        let result = scan_directory(dir.path()).unwrap();

        assert_eq!(result.videos, vec!["Show.S01E01.mkv"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = OsStr::from_bytes(b"A\xff.S01E1.mkv");
        if fs::write(dir.path().join(raw), "").is_err() {
            // Filesystem enforces UTF-8 names
            return;
        }
        fs::write(dir.path().join("B.S01E2.mkv"), "").unwrap();

        let result = scan_directory(dir.path()).unwrap();

        assert_eq!(result.videos, vec!["B.S01E2.mkv"]);
        assert_eq!(result.files, vec!["B.S01E2.mkv"]);
        assert_eq!(result.unreadable, vec![dir.path().join(raw)]);
    }

    #[test]
    fn test_path_not_found() {
        let result = scan_directory(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(ScannerError::PathNotFound(_))));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let result = scan_directory(&file_path);
        assert!(matches!(result, Err(ScannerError::NotADirectory(_))));
    }
}
