use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions for the icon batches. Each variant carries enough detail
/// to tell the operator what to fix: the input, the build, or the filesystem.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("source image not found at {}", .path.display())]
    MissingInput { path: PathBuf },

    /// The image codec for the source format is not compiled in.
    #[error("image support unavailable: {detail}")]
    CapabilityUnavailable { detail: String },

    #[error("image processing failed: {detail}")]
    Processing { detail: String },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
