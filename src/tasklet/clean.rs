//! # Clean Directory Tasklet
//!
//! Removes previously generated fixture files from a target directory before
//! a new batch run, so a smaller rerun does not leave higher-indexed files
//! from an earlier, larger one behind.
//!
//! Only files named `<basename>_*.md` are removed; everything else in the
//! directory is left untouched. A missing directory is not an error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    BatchError,
    core::step::{RepeatStatus, StepExecution, Tasklet},
};

/// A tasklet that deletes stale `<basename>_*.md` files from a directory.
pub struct CleanDirTasklet {
    /// Directory to clean
    directory: PathBuf,
    /// Basename prefix of the fixture files
    basename: String,
}

impl CleanDirTasklet {
    fn is_fixture_file(&self, file_name: &str) -> bool {
        file_name.starts_with(&format!("{}_", self.basename)) && file_name.ends_with(".md")
    }
}

impl Tasklet for CleanDirTasklet {
    fn execute(&self, _step_execution: &StepExecution) -> Result<RepeatStatus, BatchError> {
        if !self.directory.is_dir() {
            debug!(
                "Nothing to clean, directory does not exist: {}",
                self.directory.display()
            );
            return Ok(RepeatStatus::Finished);
        }

        let mut removed = 0;

        for entry in fs::read_dir(&self.directory).map_err(BatchError::Io)? {
            let entry = entry.map_err(BatchError::Io)?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            if self.is_fixture_file(file_name) {
                debug!("Removing stale fixture: {}", path.display());
                fs::remove_file(&path).map_err(BatchError::Io)?;
                removed += 1;
            }
        }

        info!(
            "Cleaned {} stale fixture(s) from {}",
            removed,
            self.directory.display()
        );

        Ok(RepeatStatus::Finished)
    }
}

/// Builder for [`CleanDirTasklet`] instances.
#[derive(Default)]
pub struct CleanDirTaskletBuilder {
    directory: Option<PathBuf>,
    basename: Option<String>,
}

impl CleanDirTaskletBuilder {
    pub fn new() -> Self {
        Self {
            directory: None,
            basename: None,
        }
    }

    /// Sets the directory to clean.
    pub fn directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    /// Sets the basename prefix of the fixture files to remove.
    pub fn basename(mut self, basename: &str) -> Self {
        self.basename = Some(basename.to_string());
        self
    }

    /// # Returns
    /// - `Ok(CleanDirTasklet)`: Successfully created tasklet
    /// - `Err(BatchError)`: A required parameter is missing or empty
    pub fn build(self) -> Result<CleanDirTasklet, BatchError> {
        let directory = self
            .directory
            .ok_or_else(|| BatchError::Configuration("directory is required".to_string()))?;
        let basename = self
            .basename
            .ok_or_else(|| BatchError::Configuration("basename is required".to_string()))?;

        if basename.is_empty() {
            return Err(BatchError::Configuration(
                "basename must not be empty".to_string(),
            ));
        }

        Ok(CleanDirTasklet {
            directory,
            basename,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::core::step::StepExecution;

    #[test]
    fn removes_only_matching_fixture_files() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("lorem_ipsum_0.md"), "a").unwrap();
        fs::write(root.path().join("lorem_ipsum_12.md"), "b").unwrap();
        fs::write(root.path().join("notes.md"), "keep").unwrap();
        fs::write(root.path().join("lorem_ipsum_0.txt"), "keep").unwrap();

        let tasklet = CleanDirTaskletBuilder::new()
            .directory(root.path())
            .basename("lorem_ipsum")
            .build()
            .unwrap();

        let step_execution = StepExecution::new("clean");
        let status = tasklet.execute(&step_execution).unwrap();

        assert_eq!(status, RepeatStatus::Finished);
        assert!(!root.path().join("lorem_ipsum_0.md").exists());
        assert!(!root.path().join("lorem_ipsum_12.md").exists());
        assert!(root.path().join("notes.md").exists());
        assert!(root.path().join("lorem_ipsum_0.txt").exists());
    }

    #[test]
    fn missing_directory_is_not_an_error() {
        let root = tempdir().unwrap();
        let tasklet = CleanDirTaskletBuilder::new()
            .directory(root.path().join("absent"))
            .basename("lorem_ipsum")
            .build()
            .unwrap();

        let step_execution = StepExecution::new("clean");
        assert!(tasklet.execute(&step_execution).is_ok());
    }

    #[test]
    fn builder_rejects_empty_basename() {
        let result = CleanDirTaskletBuilder::new()
            .directory("text")
            .basename("")
            .build();

        assert!(matches!(result, Err(BatchError::Configuration(_))));
    }
}
