/*!
 * Command-line interface for treecat
 */

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use treecat::config::{Args, Config};
use treecat::walker::Walker;
use treecat::writer::{FsReader, TreeWriter};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    if let Err(err) = run(config) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

/// Run the traversal against stdout.
fn run(config: Config) -> treecat::Result<()> {
    let stdout = io::stdout();
    let mut writer = TreeWriter::new(BufWriter::new(stdout.lock()));

    // Output emitted before a mid-walk failure must still reach the stream;
    // on the early-return path the buffer flushes when the writer drops.
    Walker::new(config).walk(&FsReader, &mut writer)?;
    writer.flush()?;

    Ok(())
}
