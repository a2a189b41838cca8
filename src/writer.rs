/*!
 * Plain-text output for treecat
 */

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::walker::{ContentSource, Sink};

/// Text renderer for retained traversal entries.
///
/// A directory renders as `<path>/` on its own line. A file renders as its
/// path on one line, then the raw content followed by a newline. Content is
/// written verbatim: unescaped and untruncated.
pub struct TreeWriter<W: Write> {
    out: W,
}

impl<W: Write> TreeWriter<W> {
    /// Create a new writer over any output stream
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush the underlying stream
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Sink for TreeWriter<W> {
    fn emit_dir(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "{}/", path.display())
    }

    fn emit_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
        writeln!(self.out, "{}", path.display())?;
        self.out.write_all(content)?;
        self.out.write_all(b"\n")
    }
}

/// Filesystem-backed content source
pub struct FsReader;

impl ContentSource for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
