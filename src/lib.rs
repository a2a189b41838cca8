/*!
 * treecat - Print a directory tree and the contents of matching files
 *
 * This library walks a directory tree depth-first and streams every retained
 * path, followed by the content of files matching an extension filter, to
 * produce a textual snapshot of a codebase.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod walker;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, TreecatError};
pub use filter::{FilterSpec, IgnoreSpec};
pub use walker::{ContentSource, Sink, Walker};
pub use writer::{FsReader, TreeWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
