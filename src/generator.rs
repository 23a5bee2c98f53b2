//! High-level driver for the placeholder-file batch.
//!
//! Wires the lorem document reader, the Markdown processor, and the file
//! writer into a job, validates the configuration up front, and runs the
//! whole batch sequentially. Generation only ever happens when
//! [`generate_markdown_files`] is called; nothing runs as a side effect of
//! loading the crate.

use std::path::{Path, PathBuf};

use crate::{
    BatchError,
    core::{
        job::{Job, JobBuilder, JobExecution},
        step::StepBuilder,
    },
    item::{
        lorem::{
            document_reader::{DocumentOutline, LoremDocumentReaderBuilder},
            markdown_processor::LoremMarkdownProcessor,
        },
        markdown::markdown_writer::{MarkdownDocument, MarkdownFileWriterBuilder},
    },
    tasklet::clean::CleanDirTaskletBuilder,
};

/// Default number of files produced by one batch run.
pub const DEFAULT_DOCUMENT_COUNT: usize = 500;

/// Default sentence budget per file; yields 100 paragraphs.
pub const DEFAULT_DOCUMENT_LENGTH: usize = 500;

/// Default basename of the generated files.
pub const DEFAULT_BASENAME: &str = "lorem_ipsum";

/// Default target directory, relative to the working directory.
pub const DEFAULT_TARGET_DIR: &str = "text";

/// Number of documents written per chunk (commit interval).
const CHUNK_SIZE: u16 = 50;

/// Configuration of one batch run.
///
/// # Examples
///
/// ```rust,no_run
/// use lorem_batch::generator::{GeneratorConfig, generate_markdown_files};
///
/// # fn example() -> Result<(), lorem_batch::BatchError> {
/// let config = GeneratorConfig::new()
///     .directory("fixtures")
///     .count(10)
///     .length(50);
///
/// generate_markdown_files(&config)?;
/// # Ok(())
/// # }
/// ```
pub struct GeneratorConfig {
    /// Directory the files are written into
    directory: PathBuf,
    /// Basename of the generated files: `<basename>_<index>.md`
    basename: String,
    /// Number of files to generate
    count: usize,
    /// Sentence budget per file; one paragraph per 5 sentences
    length: usize,
    /// Whether to remove stale `<basename>_*.md` files before generating
    clean_target: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_TARGET_DIR),
            basename: DEFAULT_BASENAME.to_string(),
            count: DEFAULT_DOCUMENT_COUNT,
            length: DEFAULT_DOCUMENT_LENGTH,
            clean_target: false,
        }
    }

    /// Sets the target directory.
    pub fn directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.directory = directory.as_ref().to_path_buf();
        self
    }

    /// Sets the basename of the generated files.
    pub fn basename(mut self, basename: &str) -> Self {
        self.basename = basename.to_string();
        self
    }

    /// Sets the number of files to generate.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the sentence budget per file.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Enables removal of stale fixture files before generating.
    pub fn clean_target(mut self, clean_target: bool) -> Self {
        self.clean_target = clean_target;
        self
    }

    /// Validates the configuration.
    ///
    /// Counts and lengths are `usize`, so negative values are rejected by the
    /// type system; what remains is the shape of the path components.
    fn validate(&self) -> Result<(), BatchError> {
        if self.directory.as_os_str().is_empty() {
            return Err(BatchError::Configuration(
                "directory must not be empty".to_string(),
            ));
        }

        if self.basename.is_empty() {
            return Err(BatchError::Configuration(
                "basename must not be empty".to_string(),
            ));
        }

        if self.basename.contains('/') || self.basename.contains('\\') {
            return Err(BatchError::Configuration(format!(
                "basename must not contain path separators: {}",
                self.basename
            )));
        }

        Ok(())
    }
}

/// Runs the batch: produces `count` files named
/// `<directory>/<basename>_0.md` through `<basename>_{count-1}.md`, each
/// containing `length / 5` paragraphs of placeholder prose.
///
/// The target directory is created if absent and existing files are
/// overwritten. The job aborts on the first failed read, process, or write;
/// files already written stay on disk.
pub fn generate_markdown_files(config: &GeneratorConfig) -> Result<JobExecution, BatchError> {
    config.validate()?;

    let reader = LoremDocumentReaderBuilder::new()
        .count(config.count)
        .length(config.length)
        .build();

    let processor = LoremMarkdownProcessor::new(&config.basename);

    let writer = MarkdownFileWriterBuilder::new()
        .directory(&config.directory)
        .build();

    let generate_step = StepBuilder::new("generate-lorem-markdown")
        .chunk::<DocumentOutline, MarkdownDocument>(CHUNK_SIZE)
        .reader(&reader)
        .processor(&processor)
        .writer(&writer)
        .build();

    let clean_tasklet = if config.clean_target {
        Some(
            CleanDirTaskletBuilder::new()
                .directory(&config.directory)
                .basename(&config.basename)
                .build()?,
        )
    } else {
        None
    };
    let clean_step = clean_tasklet
        .as_ref()
        .map(|tasklet| StepBuilder::new("clean-target-dir").tasklet(tasklet).build());

    let mut job_builder = JobBuilder::new().name("generate-placeholder-files".to_string());
    if let Some(step) = &clean_step {
        job_builder = job_builder.start(step);
    }
    let job = job_builder.next(&generate_step).build();

    job.run()
}
