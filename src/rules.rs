/*!
 * Fixed exclusion and abbreviation rules
 *
 * Exclusion names and marker strings live here as named constants, with the
 * predicates that the scanner applies while walking the tree.
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Indentation unit, repeated once per depth level
pub const INDENT_UNIT: &str = "|   ";

/// Branch marker emitted right before an entry name
pub const BRANCH_MARKER: &str = "|-- ";

/// Annotation line content for elided icon folders
pub const ELISION_ANNOTATION: &str = "## icons";

/// Path segment that switches a directory to icon-asset abbreviation
pub const ICON_MARKER: &str = "icons";

/// Directory name treated as build output
pub const BUILD_OUTPUT_DIR: &str = "build";

/// Ancestor segment required for the build-output rule to apply
pub const BUILD_PARENT_MARKER: &str = "app";

/// Directory names never listed or descended into
pub static EXCLUDED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Python caches
        "__pycache__",
        // Server session state
        "flask_session",
        // Version control
        ".git",
        // Build tools
        ".gradle",
        // IDEs & Editors
        ".idea",
    ]
});

/// Check whether a directory name is in the fixed exclusion set
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_DIRS.iter().any(|&d| d == name)
}

/// Check whether `path` contains `segment` as a whole path component
fn has_segment(path: &Path, segment: &str) -> bool {
    path.components().any(|c| c.as_os_str() == segment)
}

/// True for a directory sitting at or below an icon marker segment
pub fn has_icon_marker(path: &Path) -> bool {
    has_segment(path, ICON_MARKER)
}

/// True for a build-output directory scoped under the app module
pub fn is_build_output(path: &Path) -> bool {
    match path.file_name() {
        Some(name) if name == BUILD_OUTPUT_DIR => path
            .parent()
            .map_or(false, |parent| has_segment(parent, BUILD_PARENT_MARKER)),
        _ => false,
    }
}
