pub mod base;
pub mod cpp;

use crate::analysis::ClassCategory;
use crate::error::Result;
use crate::models::BindingTree;
use base::FileWriter;
use cpp::walker::{GeneratedInclude, SkipReason};
use cpp::{AggregateHeaderAssembler, TreeWalker};
use std::path::Path;

/// Root for generated headers, including the aggregate header
pub const HEADERS_DIR: &str = "headers";
/// Root for generated stub sources
pub const SOURCES_DIR: &str = "src";
/// Location of the aggregate header relative to the output root
pub const AGGREGATE_HEADER_PATH: &str = "headers/includes.h";

/// A generated file, addressed by a `/`-separated path relative to the
/// output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: String,
    pub contents: String,
}

/// Everything one run produces, before anything touches the filesystem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedOutput {
    pub files: Vec<OutputFile>,
    /// Category of every class in the tree, in tree order
    pub classified: Vec<(String, ClassCategory)>,
    pub includes: Vec<GeneratedInclude>,
    pub delegates: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
}

impl GeneratedOutput {
    pub fn file(&self, path: &str) -> Option<&OutputFile> {
        self.files.iter().find(|file| file.path == path)
    }

    /// Number of classes that received their own header/source pair
    pub fn class_count(&self) -> usize {
        self.includes.len()
    }

    /// Write every file below `root`, overwriting what is already there.
    /// Returns the relative paths written, in generation order.
    pub fn write_to<P: AsRef<Path>>(&self, root: P) -> Result<Vec<String>> {
        let mut writer = FileWriter::new(root)?;
        for file in &self.files {
            writer.write_file(&file.path, &file.contents)?;
        }
        Ok(writer.get_generated_files().to_vec())
    }
}

/// Generate headers, sources and the aggregate header for a binding tree.
/// The tree is only read; the same tree always yields the same output.
pub fn generate(tree: &BindingTree) -> Result<GeneratedOutput> {
    let context = TreeWalker::new().walk(tree);
    let aggregate =
        AggregateHeaderAssembler::new()?.assemble(&context.includes, &context.delegates)?;
    let delegates = context.delegate_names();

    let mut files = Vec::with_capacity(context.classes.len() * 2 + 1);
    for class in &context.classes {
        files.push(OutputFile {
            path: format!(
                "{}/{}/{}",
                HEADERS_DIR, class.directory, class.files.header_filename
            ),
            contents: class.files.header.clone(),
        });
        files.push(OutputFile {
            path: format!(
                "{}/{}/{}",
                SOURCES_DIR, class.directory, class.files.source_filename
            ),
            contents: class.files.source.clone(),
        });
    }
    files.push(OutputFile {
        path: AGGREGATE_HEADER_PATH.to_string(),
        contents: aggregate,
    });

    Ok(GeneratedOutput {
        files,
        classified: context.visited,
        includes: context.includes.includes().collect(),
        delegates,
        skipped: context.skipped,
    })
}
