use crate::error::BatchError;

/// Result type returned by [`ItemProcessor::process`].
pub type ItemProcessorResult<O> = Result<O, BatchError>;

/// Represents the retrieval of input for a step, one item at a time.
///
/// A reader returns `Ok(Some(item))` for each item of the source, `Ok(None)`
/// once the source is exhausted, and `Err` when an item could not be read.
pub trait ItemReader<I> {
    fn read(&self) -> Result<Option<I>, BatchError>;
}

/// Represents the business logic applied to each item read by an
/// [`ItemReader`] before it is handed to an [`ItemWriter`].
pub trait ItemProcessor<I, O> {
    fn process(&self, item: &I) -> ItemProcessorResult<O>;
}

/// Represents the output of a step, one chunk of items at a time.
///
/// `open` is called once before the first chunk and `close` once after the
/// last one; both default to no-ops.
pub trait ItemWriter<O> {
    fn write(&self, items: &[O]) -> Result<(), BatchError>;

    fn flush(&self) -> Result<(), BatchError> {
        Ok(())
    }

    fn open(&self) -> Result<(), BatchError> {
        Ok(())
    }

    fn close(&self) -> Result<(), BatchError> {
        Ok(())
    }
}

/// Processor that forwards items unchanged.
///
/// Used as the default when a chunk-oriented step is built without an
/// explicit processor.
#[derive(Default)]
pub struct PassThroughProcessor;

impl<I: Clone> ItemProcessor<I, I> for PassThroughProcessor {
    fn process(&self, item: &I) -> ItemProcessorResult<I> {
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through_processor_clones_the_item() {
        let processor = PassThroughProcessor;
        let result = processor.process(&"fixture".to_string());
        assert_eq!(result.unwrap(), "fixture");
    }
}
