//! Error types for the icon generator

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the output image.
///
/// Rasterization itself never fails: out-of-range geometry is cropped and
/// degenerate shapes collapse to no-ops. Only the filesystem sink at the end
/// of the pipeline can go wrong, and when it does the run aborts.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create the output directory
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// Failed to write the serialized image
    #[error("Failed to write image {path:?}: {source}")]
    WriteImage { path: PathBuf, source: io::Error },
}
