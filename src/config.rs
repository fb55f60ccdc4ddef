/*!
 * Configuration handling for DumpTree
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{DumpTreeError, Result};

/// Command-line arguments for DumpTree
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dumptree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write an indented text snapshot of a project directory tree",
    long_about = "Walks a project directory and writes an indented, line-oriented representation of its structure to a text file. Cache, version-control and IDE metadata directories are skipped; icon asset folders and app build output are listed by name only."
)]
pub struct Args {
    /// Target directory to traverse
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output text file name
    #[clap(default_value = "tree_structure.txt")]
    pub output_file: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to traverse
    pub target_dir: PathBuf,

    /// Output text file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
        }
    }

    /// Validate the configuration
    ///
    /// Runs before the output file is opened, so a failed run leaves any
    /// existing file at the output path untouched.
    pub fn validate(&self) -> Result<()> {
        // Check if target directory exists and is readable
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(DumpTreeError::PathNotFound(format!(
                "Target directory not found: {}",
                self.target_dir.display()
            )));
        }

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(DumpTreeError::PathNotFound(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
