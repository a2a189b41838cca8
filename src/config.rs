/*!
 * Configuration handling for treecat
 */

use std::path::PathBuf;

use clap::Parser;

use crate::filter::{FilterSpec, IgnoreSpec};

/// Command-line arguments for treecat
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treecat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a directory tree and the contents of matching files",
    long_about = "Walks a directory tree depth-first and prints every retained path, followed \
                  by the content of each file that matches the extension filter. Intended for \
                  producing a textual snapshot of a codebase to paste into other tools."
)]
pub struct Args {
    /// Root directory to walk
    pub path: String,

    /// Comma-separated file extensions to include, without leading dots (e.g. "rs,toml")
    #[clap(short, long)]
    pub filter: String,

    /// Comma-separated file or directory names, or path prefixes, to exclude
    #[clap(short, long)]
    pub ignore: Option<String>,
}

/// Application configuration
///
/// Immutable for the duration of one traversal: built once from the parsed
/// arguments and passed into the walker.
#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the walk, exactly as given on the command line
    pub root: PathBuf,

    /// Extension filter applied to files
    pub filter: FilterSpec,

    /// Ignore list applied to every entry
    pub ignore: IgnoreSpec,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            root: PathBuf::from(args.path),
            filter: FilterSpec::parse(&args.filter),
            ignore: IgnoreSpec::parse(args.ignore.as_deref().unwrap_or_default()),
        }
    }
}
