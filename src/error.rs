//! Global error handling for treecat
//!
//! Every failure is terminal for the current invocation: the walk aborts on
//! the first error and surfaces it to the caller, so there are no
//! recoverable variants here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for treecat operations
#[derive(Error, Debug)]
pub enum TreecatError {
    /// Directory enumeration failed somewhere in the walk
    #[error("failed to scan directory: {0}")]
    Scan(#[from] walkdir::Error),

    /// Reading the content of a file selected for output failed
    #[error("failed to read file {}: {}", .path.display(), .source)]
    Read {
        /// Path of the file whose read failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing to the output stream failed
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for treecat operations
pub type Result<T> = std::result::Result<T, TreecatError>;
