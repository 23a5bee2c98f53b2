use std::time::{Duration, Instant};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::BatchError;

use super::item::{ItemProcessor, ItemReader, ItemWriter};

/// Status of a step execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Status of a step prior to its execution.
    Starting,
    /// Status of a step that is running.
    Started,
    /// The step completed successfully.
    Success,
    /// The step failed while reading items.
    ReadError,
    /// The step failed while processing items.
    ProcessorError,
    /// The step failed while writing items.
    WriteError,
    /// The step failed inside a tasklet.
    TaskletError,
}

/// Status of a single chunk within a chunk-oriented step.
#[derive(Debug, PartialEq, Eq)]
enum ChunkStatus {
    /// The chunk reached its configured size; more items may follow.
    Full,
    /// The reader is exhausted; this is the last chunk.
    Finished,
}

/// Execution context and statistics for one run of a step.
#[derive(Debug)]
pub struct StepExecution {
    /// Unique identifier for this step execution
    pub id: Uuid,
    /// Human-readable name for the step
    pub name: String,
    /// Current status of the step execution
    pub status: StepStatus,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: Duration,
    /// Number of items successfully read
    pub read_count: usize,
    /// Number of items successfully written
    pub write_count: usize,
    /// Number of errors encountered during reading
    pub read_error_count: usize,
    /// Number of errors encountered during processing
    pub process_error_count: usize,
    /// Number of errors encountered during writing
    pub write_error_count: usize,
}

impl StepExecution {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: StepStatus::Starting,
            start_time: Instant::now(),
            end_time: Instant::now(),
            duration: Duration::ZERO,
            read_count: 0,
            write_count: 0,
            read_error_count: 0,
            process_error_count: 0,
            write_error_count: 0,
        }
    }
}

/// Represents an independent, sequential phase of a batch job.
pub trait Step {
    /// Executes the step, recording progress into `step_execution`.
    ///
    /// # Returns
    /// - `Ok(())`: The step completed successfully
    /// - `Err(BatchError)`: The step failed
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), BatchError>;

    /// Returns the name of the step.
    fn name(&self) -> &str;
}

/// Outcome of one tasklet invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum RepeatStatus {
    /// The tasklet can continue to execute.
    Continuable,
    /// The tasklet has finished executing.
    Finished,
}

/// A single self-contained operation executed as a step, outside the
/// chunk-oriented read/process/write cycle.
pub trait Tasklet {
    fn execute(&self, step_execution: &StepExecution) -> Result<RepeatStatus, BatchError>;
}

/// A step that repeatedly invokes a tasklet until it reports
/// [`RepeatStatus::Finished`].
pub struct TaskletStep<'a> {
    name: String,
    tasklet: &'a dyn Tasklet,
}

impl Step for TaskletStep<'_> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), BatchError> {
        let start_time = Instant::now();
        step_execution.status = StepStatus::Started;

        info!(
            "Start of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        let result = loop {
            match self.tasklet.execute(step_execution) {
                Ok(RepeatStatus::Finished) => break Ok(()),
                Ok(RepeatStatus::Continuable) => continue,
                Err(error) => {
                    step_execution.status = StepStatus::TaskletError;
                    break Err(error);
                }
            }
        };

        step_execution.start_time = start_time;
        step_execution.end_time = Instant::now();
        step_execution.duration = start_time.elapsed();

        info!(
            "End of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        if result.is_ok() {
            step_execution.status = StepStatus::Success;
        }

        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A step that reads items in chunks, processes them, and writes each chunk
/// out before reading the next one.
pub struct ChunkOrientedStep<'a, I, O> {
    name: String,
    /// Component responsible for reading items from the source
    reader: &'a dyn ItemReader<I>,
    /// Component responsible for processing items
    processor: &'a dyn ItemProcessor<I, O>,
    /// Component responsible for writing items to the destination
    writer: &'a dyn ItemWriter<O>,
    /// Number of items to process in each chunk
    chunk_size: u16,
    /// Maximum number of errors allowed before failing the step
    skip_limit: u16,
}

impl<I, O> Step for ChunkOrientedStep<'_, I, O> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), BatchError> {
        let start_time = Instant::now();
        step_execution.status = StepStatus::Started;

        info!(
            "Start of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        let result = match self.writer.open() {
            Ok(()) => {
                let chunks_result = self.process_all_chunks(step_execution);
                Self::log_non_fatal(self.writer.close());
                chunks_result
            }
            Err(error) => {
                step_execution.status = StepStatus::WriteError;
                Err(error)
            }
        };

        step_execution.start_time = start_time;
        step_execution.end_time = Instant::now();
        step_execution.duration = start_time.elapsed();

        info!(
            "End of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        if result.is_ok() {
            step_execution.status = StepStatus::Success;
        }

        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<I, O> ChunkOrientedStep<'_, I, O> {
    /// Runs the read/process/write cycle until the reader is exhausted or an
    /// error exceeds the skip limit.
    fn process_all_chunks(&self, step_execution: &mut StepExecution) -> Result<(), BatchError> {
        loop {
            let (items, chunk_status) = self.read_chunk(step_execution)?;

            let processed_items = self.process_chunk(step_execution, &items)?;

            self.write_chunk(step_execution, &processed_items)?;

            if chunk_status == ChunkStatus::Finished {
                return Ok(());
            }
        }
    }

    /// Reads up to `chunk_size` items from the reader.
    ///
    /// # Returns
    /// - `Ok((items, ChunkStatus::Full))`: The chunk reached its configured size
    /// - `Ok((items, ChunkStatus::Finished))`: The reader is exhausted
    /// - `Err(BatchError)`: A read error exceeded the skip limit
    fn read_chunk(
        &self,
        step_execution: &mut StepExecution,
    ) -> Result<(Vec<I>, ChunkStatus), BatchError> {
        debug!("Start reading chunk");

        let mut items = Vec::with_capacity(self.chunk_size as usize);

        loop {
            match self.reader.read() {
                Ok(Some(item)) => {
                    items.push(item);
                    step_execution.read_count += 1;

                    if items.len() >= self.chunk_size as usize {
                        return Ok((items, ChunkStatus::Full));
                    }
                }
                Ok(None) => {
                    return Ok((items, ChunkStatus::Finished));
                }
                Err(error) => {
                    warn!("Error reading item: {}", error);
                    step_execution.read_error_count += 1;

                    if self.is_skip_limit_reached(step_execution) {
                        step_execution.status = StepStatus::ReadError;
                        return Err(error);
                    }
                }
            }
        }
    }

    /// Applies the processor to each item of the chunk.
    fn process_chunk(
        &self,
        step_execution: &mut StepExecution,
        items: &[I],
    ) -> Result<Vec<O>, BatchError> {
        debug!("Processing chunk of {} items", items.len());

        let mut processed_items = Vec::with_capacity(items.len());

        for item in items {
            match self.processor.process(item) {
                Ok(processed_item) => {
                    processed_items.push(processed_item);
                }
                Err(error) => {
                    warn!("Error processing item: {}", error);
                    step_execution.process_error_count += 1;

                    if self.is_skip_limit_reached(step_execution) {
                        step_execution.status = StepStatus::ProcessorError;
                        return Err(error);
                    }
                }
            }
        }

        Ok(processed_items)
    }

    /// Writes the processed chunk to the destination.
    fn write_chunk(
        &self,
        step_execution: &mut StepExecution,
        processed_items: &[O],
    ) -> Result<(), BatchError> {
        debug!("Writing chunk of {} items", processed_items.len());

        if processed_items.is_empty() {
            return Ok(());
        }

        match self.writer.write(processed_items) {
            Ok(()) => {
                step_execution.write_count += processed_items.len();
                Self::log_non_fatal(self.writer.flush());
                Ok(())
            }
            Err(error) => {
                warn!("Error writing items: {}", error);
                step_execution.write_error_count += processed_items.len();

                if self.is_skip_limit_reached(step_execution) {
                    step_execution.status = StepStatus::WriteError;
                    return Err(error);
                }
                Ok(())
            }
        }
    }

    fn is_skip_limit_reached(&self, step_execution: &StepExecution) -> bool {
        step_execution.read_error_count
            + step_execution.process_error_count
            + step_execution.write_error_count
            > self.skip_limit.into()
    }

    fn log_non_fatal(result: Result<(), BatchError>) {
        if let Err(error) = result {
            warn!("Non-fatal error: {}", error);
        }
    }
}

/// Entry point for building a step.
///
/// Branches into a [`TaskletStepBuilder`] or a [`ChunkOrientedStepBuilder`]
/// depending on the kind of step being configured.
///
/// # Examples
///
/// ```rust,no_run,compile_fail
/// let step = StepBuilder::new("generate-fixtures")
///     .chunk::<DocumentOutline, MarkdownDocument>(10)
///     .reader(&reader)
///     .processor(&processor)
///     .writer(&writer)
///     .build();
/// ```
pub struct StepBuilder {
    name: String,
}

impl StepBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Configures a tasklet step.
    pub fn tasklet(self, tasklet: &dyn Tasklet) -> TaskletStepBuilder<'_> {
        TaskletStepBuilder {
            name: self.name,
            tasklet,
        }
    }

    /// Configures a chunk-oriented step with the given commit interval.
    pub fn chunk<'a, I, O>(self, chunk_size: u16) -> ChunkOrientedStepBuilder<'a, I, O> {
        ChunkOrientedStepBuilder::new(&self.name).chunk_size(chunk_size)
    }
}

/// Builder for [`TaskletStep`] instances.
pub struct TaskletStepBuilder<'a> {
    name: String,
    tasklet: &'a dyn Tasklet,
}

impl<'a> TaskletStepBuilder<'a> {
    pub fn build(self) -> TaskletStep<'a> {
        TaskletStep {
            name: self.name,
            tasklet: self.tasklet,
        }
    }
}

/// Builder for [`ChunkOrientedStep`] instances.
pub struct ChunkOrientedStepBuilder<'a, I, O> {
    name: String,
    reader: Option<&'a dyn ItemReader<I>>,
    processor: Option<&'a dyn ItemProcessor<I, O>>,
    writer: Option<&'a dyn ItemWriter<O>>,
    chunk_size: u16,
    skip_limit: u16,
}

impl<'a, I, O> ChunkOrientedStepBuilder<'a, I, O> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reader: None,
            processor: None,
            writer: None,
            chunk_size: 10,
            skip_limit: 0,
        }
    }

    pub fn reader(mut self, reader: &'a dyn ItemReader<I>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn processor(mut self, processor: &'a dyn ItemProcessor<I, O>) -> Self {
        self.processor = Some(processor);
        self
    }

    pub fn writer(mut self, writer: &'a dyn ItemWriter<O>) -> Self {
        self.writer = Some(writer);
        self
    }

    pub fn chunk_size(mut self, chunk_size: u16) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn skip_limit(mut self, skip_limit: u16) -> Self {
        self.skip_limit = skip_limit;
        self
    }

    pub fn build(self) -> ChunkOrientedStep<'a, I, O> {
        ChunkOrientedStep {
            name: self.name,
            reader: self.reader.expect("Reader is required for building a step"),
            processor: self
                .processor
                .expect("Processor is required for building a step"),
            writer: self.writer.expect("Writer is required for building a step"),
            chunk_size: self.chunk_size,
            skip_limit: self.skip_limit,
        }
    }
}
