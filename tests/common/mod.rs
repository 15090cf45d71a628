#![allow(dead_code)]
/// Common test utilities and helpers
use decomp_stubgen::analysis::parse_binding_tree;
use decomp_stubgen::{generate, BindingTree, GeneratedOutput, GenerateConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A binding tree written to disk, as the CLI would find it
pub struct TestBindings {
    pub temp_dir: TempDir,
}

impl TestBindings {
    pub fn new(json: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bindings.json"), json).unwrap();
        Self { temp_dir }
    }

    pub fn input_path(&self) -> PathBuf {
        self.temp_dir.path().join("bindings.json")
    }

    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("out")
    }

    /// Configuration pointing at this tree and a fresh output directory
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            input_path: self.input_path().to_string_lossy().to_string(),
            output_path: self.output_path().to_string_lossy().to_string(),
            ..Default::default()
        }
    }

    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output_path().join(relative)).unwrap()
    }

    pub fn output_exists(&self, relative: &str) -> bool {
        self.output_path().join(relative).exists()
    }
}

/// Generate from JSON without touching disk
pub fn generate_json(json: &str) -> GeneratedOutput {
    let tree = parse_binding_tree(json).unwrap();
    generate(&tree).unwrap()
}

/// Contents of one generated file, panicking with the list of generated
/// paths if it is missing
pub fn file<'a>(output: &'a GeneratedOutput, path: &str) -> &'a str {
    match output.file(path) {
        Some(file) => &file.contents,
        None => panic!(
            "{} was not generated; got {:?}",
            path,
            output.files.iter().map(|f| &f.path).collect::<Vec<_>>()
        ),
    }
}

pub fn paths(output: &GeneratedOutput) -> Vec<&str> {
    output.files.iter().map(|f| f.path.as_str()).collect()
}

pub fn empty_tree() -> BindingTree {
    BindingTree::default()
}

/// Assert that generated content contains expected string
#[macro_export]
macro_rules! assert_generated_contains {
    ($content:expr, $expected:expr) => {
        assert!(
            $content.contains($expected),
            "Expected generated content to contain:\n{}\n\nBut got:\n{}",
            $expected,
            $content
        );
    };
    ($content:expr, $expected:expr, $($arg:tt)*) => {
        assert!(
            $content.contains($expected),
            $($arg)*
        );
    };
}

/// Assert that generated content does NOT contain string
#[macro_export]
macro_rules! assert_generated_not_contains {
    ($content:expr, $unexpected:expr) => {
        assert!(
            !$content.contains($unexpected),
            "Expected generated content NOT to contain:\n{}\n\nBut got:\n{}",
            $unexpected,
            $content
        );
    };
}
