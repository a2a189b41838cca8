/*!
 * Depth-first directory traversal
 */

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, TreecatError};

/// Streaming consumer for retained traversal entries.
///
/// The walker pushes each retained node here in visitation order; nothing is
/// buffered or collected on the walker side.
pub trait Sink {
    /// Called once per retained directory, before any of its contents.
    fn emit_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Called once per retained file, with its full content.
    fn emit_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// Content source for files selected for emission.
pub trait ContentSource {
    /// Read the full content of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Walker for directory trees
pub struct Walker {
    config: Config,
}

impl Walker {
    /// Create a new walker
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Walk the configured root depth-first, streaming retained entries.
    ///
    /// Entries are visited in lexical order, each directory before its
    /// contents. An ignored directory is pruned without being entered; an
    /// ignored file is skipped. Every retained directory is emitted
    /// unconditionally; a retained file is emitted with its content when it
    /// passes the extension filter. The root entry is subject to the same
    /// checks as any descendant.
    ///
    /// The first enumeration, read, or sink error aborts the walk. Entries
    /// already emitted stand; there is no rollback or retry.
    pub fn walk<C, S>(&self, source: &C, sink: &mut S) -> Result<()>
    where
        C: ContentSource,
        S: Sink,
    {
        let entries = WalkDir::new(&self.config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.config.ignore.matches(entry.path()));

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                sink.emit_dir(path)?;
            } else if self.config.filter.includes(path) {
                let content = source.read(path).map_err(|err| TreecatError::Read {
                    path: path.to_path_buf(),
                    source: err,
                })?;
                sink.emit_file(path, &content)?;
            }
        }

        Ok(())
    }
}
