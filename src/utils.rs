/*!
 * Utility functions for DumpTree
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::rules;

/// Count directories and files under `dir` for progress tracking, with
/// excluded subtrees pruned
///
/// Entries the icon and build rules later elide are still counted, so the
/// result is an upper bound on the entries the scanner visits.
pub fn count_entries(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir() && rules::is_excluded(&e.file_name().to_string_lossy()))
        })
        .filter_map(|e| e.ok())
        .count() as u64
}
