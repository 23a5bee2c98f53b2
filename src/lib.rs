/*!
 # Lorem Batch

 A batch generator for placeholder Markdown fixture files, built on a small
 chunk-oriented batch toolkit. It produces a configurable number of files of
 "lorem ipsum" prose under a target directory, e.g. for exercising a
 downstream system's file-ingestion behavior.

 ## Core Concepts

 - **Job:** Represents the entire batch process. A `Job` is composed of one or
   more `Step`s.
 - **Step:** An independent, sequential phase of a batch job, either
   chunk-oriented (read, process, write) or a self-contained `Tasklet`.
 - **ItemReader:** The retrieval of input for a step, one item at a time. Here
   the reader emits one outline per document to generate.
 - **ItemProcessor:** The business logic applied to each item. Here the
   processor synthesizes the placeholder prose for an outline.
 - **ItemWriter:** The output of a step, one chunk of items at a time. Here
   the writer persists each document as one Markdown file.

 ## Getting Started

 ```rust,no_run
 use lorem_batch::generator::{GeneratorConfig, generate_markdown_files};

 fn main() -> Result<(), lorem_batch::BatchError> {
     // Three files of 100 paragraphs each under fixtures/
     let config = GeneratorConfig::new()
         .directory("fixtures")
         .count(3)
         .length(500);

     let execution = generate_markdown_files(&config)?;
     println!("Batch finished in {:?}", execution.duration);

     Ok(())
 }
 ```

 The generated layout is `<directory>/<basename>_<index>.md` for indices
 `0..count`, paragraphs separated by one blank line. Content synthesis is
 delegated to the `fake` crate's lorem faker.

 ## License

 Licensed under either of Apache License, Version 2.0 or MIT license, at your
 option.
 */

/// Core module for batch operations
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// High-level driver for generating placeholder Markdown files
pub mod generator;

/// Set of item readers / writers (for example: the Markdown file writer)
pub mod item;

/// Set of tasklets (for example: the clean-directory tasklet)
pub mod tasklet;
