/*!
 * DumpTree - Write an indented text snapshot of a project directory tree
 *
 * This library walks a project directory, applies a fixed set of exclusion
 * and abbreviation rules, and renders the result as line-oriented text in a
 * single output file.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{DumpTreeError, Result};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::{ScanStatistics, Scanner};
pub use types::{DirectoryNode, ElidedNode, ElisionReason, FileNode, Node};
pub use utils::count_entries;
pub use writer::TreeWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
