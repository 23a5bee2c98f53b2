use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{BatchError, core::item::ItemWriter};

/// One generated Markdown file: its name within the target directory and its
/// full body.
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    pub file_name: String,
    pub body: String,
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file_name:{}, bytes:{}", self.file_name, self.body.len())
    }
}

/// Writer that persists each [`MarkdownDocument`] as one file under a target
/// directory.
///
/// `open` creates the directory (including missing intermediates) and
/// succeeds if it already exists. Existing files are overwritten without
/// warning.
pub struct MarkdownFileWriter {
    directory: PathBuf,
}

impl ItemWriter<MarkdownDocument> for MarkdownFileWriter {
    fn open(&self) -> Result<(), BatchError> {
        fs::create_dir_all(&self.directory).map_err(BatchError::Io)
    }

    fn write(&self, items: &[MarkdownDocument]) -> Result<(), BatchError> {
        for document in items {
            let path = self.directory.join(&document.file_name);
            debug!("Writing document: {}", path.display());
            fs::write(&path, &document.body).map_err(BatchError::Io)?;
        }
        Ok(())
    }
}

/// Builder for [`MarkdownFileWriter`] instances.
#[derive(Default)]
pub struct MarkdownFileWriterBuilder {
    directory: Option<PathBuf>,
}

impl MarkdownFileWriterBuilder {
    pub fn new() -> MarkdownFileWriterBuilder {
        MarkdownFileWriterBuilder { directory: None }
    }

    /// Sets the directory the documents are written into.
    pub fn directory<P: AsRef<Path>>(mut self, directory: P) -> MarkdownFileWriterBuilder {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> MarkdownFileWriter {
        MarkdownFileWriter {
            directory: self
                .directory
                .expect("Directory is required for building a writer"),
        }
    }
}
