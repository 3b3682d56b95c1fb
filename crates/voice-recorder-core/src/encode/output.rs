use std::path::{Path, PathBuf};

/// Base name used when the user leaves the filename blank.
pub const DEFAULT_BASE_NAME: &str = "manual_recording";

/// Where and under what base name a save writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Directory the files are written into.
    pub directory: PathBuf,
    /// Fallback base name for a blank user entry.
    pub default_base_name: String,
}

impl OutputTarget {
    /// Target `directory` with the standard fallback base name.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            default_base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }

    /// Resolve the user's entry to a base name, trimming whitespace and
    /// falling back to the default when nothing is left.
    pub fn base_name<'a>(&'a self, user_input: &'a str) -> &'a str {
        let trimmed = user_input.trim();
        if trimmed.is_empty() {
            &self.default_base_name
        } else {
            trimmed
        }
    }

    /// `<directory>/<base>_<tag>.wav`
    pub fn path_for(&self, user_input: &str, tag: &str) -> PathBuf {
        file_path(&self.directory, self.base_name(user_input), tag)
    }
}

fn file_path(directory: &Path, base: &str, tag: &str) -> PathBuf {
    directory.join(format!("{}_{}.wav", base, tag))
}
