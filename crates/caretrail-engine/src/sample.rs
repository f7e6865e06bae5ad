//! Bundled sample timeline file.

use std::path::{Path, PathBuf};

use tracing::info;

/// File name used when writing the sample into a directory.
pub const SAMPLE_FILE_NAME: &str = "elyx_member_timeline.csv";

/// Contents of the bundled sample.
pub const SAMPLE_TIMELINE: &str = include_str!("../assets/elyx_member_timeline.csv");

/// Errors that can occur when writing the sample file.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The target file already exists.
    #[error("{0} already exists")]
    AlreadyExists(PathBuf),

    /// I/O error writing the sample.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the sample to `target`.
///
/// If `target` is an existing directory the sample is written inside it as
/// [`SAMPLE_FILE_NAME`]. Existing files are never overwritten. Returns the
/// path that was written.
pub fn write_sample(target: &Path) -> Result<PathBuf, SampleError> {
    let path = if target.is_dir() {
        target.join(SAMPLE_FILE_NAME)
    } else {
        target.to_path_buf()
    };

    if path.exists() {
        return Err(SampleError::AlreadyExists(path));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&path, SAMPLE_TIMELINE)?;
    info!(path = %path.display(), "sample timeline written");
    Ok(path)
}
