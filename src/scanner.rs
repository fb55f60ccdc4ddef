/*!
 * Directory scanning and rule application
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Result;
use crate::rules;
use crate::types::{DirectoryNode, ElidedNode, ElisionReason, FileNode, Node};

/// Counts of what a scan put into the tree
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStatistics {
    /// Directories listed with their contents, root inclusive
    pub directories: usize,
    /// Files listed
    pub files: usize,
    /// Subtrees listed by name only
    pub elided: usize,
}

impl ScanStatistics {
    /// Collect counts from a finished tree
    pub fn collect(root: &DirectoryNode) -> Self {
        let mut stats = Self::default();
        stats.visit(root);
        stats
    }

    fn visit(&mut self, dir: &DirectoryNode) {
        self.directories += 1;
        for child in &dir.children {
            match child {
                Node::Directory(dir_node) => self.visit(dir_node),
                Node::File(_) => self.files += 1,
                Node::Elided(_) => self.elided += 1,
            }
        }
    }
}

/// Scanner for the directory hierarchy
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    progress: ProgressBar,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        Self { config, progress }
    }

    /// Scan the target directory and return the directory tree
    pub fn scan(&self) -> Result<DirectoryNode> {
        let abs_path = fs::canonicalize(&self.config.target_dir)?;
        let dir_name = abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        self.scan_directory(&abs_path, &PathBuf::from(&dir_name))
    }

    /// Scan a directory and return its node representation
    ///
    /// Marker rules are matched against the path relative to the scan root,
    /// root name inclusive.
    fn scan_directory(&self, abs_path: &Path, rel_path: &Path) -> Result<DirectoryNode> {
        self.progress
            .set_message(format!("Scanning {}", rel_path.display()));

        let (dirs, files) = self.list_children(abs_path)?;
        let mut children = Vec::new();

        if rules::has_icon_marker(rel_path) {
            // Icon assets: child folders by name plus the annotation, files
            // of this directory still listed
            for entry in &dirs {
                children.push(self.elided_node(entry, rel_path, ElisionReason::IconAssets));
            }
            for entry in &files {
                children.push(self.file_node(entry, rel_path));
            }
        } else if rules::is_build_output(rel_path) {
            // Build output: immediate child folder names only, no files
            for entry in &dirs {
                children.push(self.elided_node(entry, rel_path, ElisionReason::BuildOutput));
            }
        } else {
            for entry in &dirs {
                let entry_name = entry.file_name().to_string_lossy().to_string();
                let new_rel_path = rel_path.join(&entry_name);

                match self.scan_directory(entry.path(), &new_rel_path) {
                    Ok(dir_node) => children.push(Node::Directory(dir_node)),
                    Err(e) => {
                        eprintln!("Error processing directory {}: {}", entry.path().display(), e)
                    }
                }
            }
            for entry in &files {
                children.push(self.file_node(entry, rel_path));
            }
        }

        self.progress.inc(1);

        Ok(DirectoryNode {
            name: abs_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            path: rel_path.to_path_buf(),
            children,
        })
    }

    /// List immediate children, excluded names dropped and each group sorted
    /// by file name
    fn list_children(&self, abs_path: &Path) -> Result<(Vec<DirEntry>, Vec<DirEntry>)> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            entries.push(entry.map_err(io::Error::from)?);
        }

        Ok(entries
            .into_iter()
            .filter(|e| {
                !(e.file_type().is_dir() && rules::is_excluded(&e.file_name().to_string_lossy()))
            })
            .partition(|e| e.file_type().is_dir()))
    }

    fn file_node(&self, entry: &DirEntry, parent_rel: &Path) -> Node {
        self.progress.inc(1);
        let name = entry.file_name().to_string_lossy().to_string();
        let path = parent_rel.join(&name);

        Node::File(FileNode { name, path })
    }

    fn elided_node(&self, entry: &DirEntry, parent_rel: &Path, reason: ElisionReason) -> Node {
        self.progress.inc(1);
        let name = entry.file_name().to_string_lossy().to_string();
        let path = parent_rel.join(&name);

        Node::Elided(ElidedNode { name, path, reason })
    }
}
