/*!
 * Core types and data structures for the DumpTree application
 */

use std::path::PathBuf;

/// Why a directory was listed without its contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElisionReason {
    /// Icon asset folder, followed by the elision annotation in the output
    IconAssets,
    /// Build output under the app module, listed by name only
    BuildOutput,
}

/// Represents a directory in the file system
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,
    /// Relative path from scan root
    pub path: PathBuf,
    /// Directory contents, subdirectories first, each group sorted by name
    pub children: Vec<Node>,
}

/// Represents a file entry
#[derive(Debug, Clone)]
pub struct FileNode {
    /// File name
    pub name: String,
    /// Relative path from scan root
    pub path: PathBuf,
}

/// A directory whose contents were intentionally omitted from the output
#[derive(Debug, Clone)]
pub struct ElidedNode {
    /// Directory name
    pub name: String,
    /// Relative path from scan root
    pub path: PathBuf,
    /// Which rule elided the contents
    pub reason: ElisionReason,
}

/// A generic filesystem node
#[derive(Debug, Clone)]
pub enum Node {
    /// Directory node with its listed contents
    Directory(DirectoryNode),
    /// File node
    File(FileNode),
    /// Directory listed by name only
    Elided(ElidedNode),
}
