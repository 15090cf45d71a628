use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes generated files below an output root, creating directories on
/// demand. Existing files are overwritten.
pub struct FileWriter {
    output_path: PathBuf,
    generated_files: Vec<String>,
}

impl FileWriter {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Result<Self> {
        let output_path = output_path.as_ref().to_path_buf();
        if output_path.exists() && !output_path.is_dir() {
            return Err(Error::InvalidOutputPath(output_path.display().to_string()));
        }
        fs::create_dir_all(&output_path)?;
        Ok(Self {
            output_path,
            generated_files: Vec::new(),
        })
    }

    /// Write a file at a `/`-separated path relative to the output root
    pub fn write_file(&mut self, relative_path: &str, content: &str) -> Result<()> {
        let file_path = self.get_file_path(relative_path)?;
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        self.generated_files.push(relative_path.to_string());
        Ok(())
    }

    /// Get the list of generated files
    pub fn get_generated_files(&self) -> &[String] {
        &self.generated_files
    }

    /// Get the full path to a file in the output directory. Paths that
    /// could leave the output root are rejected.
    pub fn get_file_path(&self, relative_path: &str) -> Result<PathBuf> {
        let mut path = self.output_path.clone();
        for part in relative_path.split('/') {
            if part.is_empty() || part == "." || part == ".." {
                return Err(Error::InvalidOutputPath(relative_path.to_string()));
            }
            path.push(part);
        }
        Ok(path)
    }
}
