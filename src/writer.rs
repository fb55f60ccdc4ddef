/*!
 * Text writer implementation for DumpTree
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;
use crate::rules::{BRANCH_MARKER, ELISION_ANNOTATION, INDENT_UNIT};
use crate::types::{DirectoryNode, ElidedNode, ElisionReason, FileNode, Node};

/// Writes the scanned tree as indented text lines
pub struct TreeWriter {
    /// Writer configuration
    config: Config,
}

impl TreeWriter {
    /// Create a new tree writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the directory tree to the output file, overwriting any previous
    /// content. Returns the number of lines written.
    pub fn write(&self, root: &DirectoryNode) -> io::Result<usize> {
        let file = File::create(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);

        let lines = self.write_directory(root, 0, &mut writer)?;

        // Flush before the handle drops so write errors surface here
        writer.flush()?;

        Ok(lines)
    }

    /// Write a directory line and everything beneath it
    fn write_directory<W: Write>(
        &self,
        dir: &DirectoryNode,
        depth: usize,
        writer: &mut W,
    ) -> io::Result<usize> {
        writeln!(
            writer,
            "{}{}{}/",
            INDENT_UNIT.repeat(depth),
            BRANCH_MARKER,
            dir.name
        )?;
        let mut lines = 1;

        for node in &dir.children {
            lines += match node {
                Node::Directory(dir_node) => self.write_directory(dir_node, depth + 1, writer)?,
                Node::File(file_node) => self.write_file(file_node, depth + 1, writer)?,
                Node::Elided(elided_node) => self.write_elided(elided_node, depth + 1, writer)?,
            };
        }

        Ok(lines)
    }

    /// Write a file line, one level below its directory line
    fn write_file<W: Write>(
        &self,
        file: &FileNode,
        depth: usize,
        writer: &mut W,
    ) -> io::Result<usize> {
        writeln!(
            writer,
            "{}{}{}",
            INDENT_UNIT.repeat(depth),
            BRANCH_MARKER,
            file.name
        )?;

        Ok(1)
    }

    /// Write an elided directory: the name line, plus the annotation line for
    /// icon assets
    fn write_elided<W: Write>(
        &self,
        elided: &ElidedNode,
        depth: usize,
        writer: &mut W,
    ) -> io::Result<usize> {
        writeln!(
            writer,
            "{}{}{}/",
            INDENT_UNIT.repeat(depth),
            BRANCH_MARKER,
            elided.name
        )?;

        match elided.reason {
            ElisionReason::IconAssets => {
                // The annotation carries indentation only, no branch marker
                writeln!(
                    writer,
                    "{}{}",
                    INDENT_UNIT.repeat(depth + 1),
                    ELISION_ANNOTATION
                )?;
                Ok(2)
            }
            ElisionReason::BuildOutput => Ok(1),
        }
    }
}
