use std::cell::Cell;
use std::fmt;

use log::debug;

use crate::{core::item::ItemReader, error::BatchError};

/// One placeholder document to be generated.
///
/// The outline carries everything the processor needs to synthesize the
/// document: its position in the batch and the prose budget.
#[derive(Debug, Clone)]
pub struct DocumentOutline {
    /// Zero-based position of the document within the batch
    pub index: usize,
    /// Sentence budget for the document; one paragraph per 5 sentences
    pub length: usize,
}

impl fmt::Display for DocumentOutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index:{}, length:{}", self.index, self.length)
    }
}

/// Reader that emits one [`DocumentOutline`] per requested document, in
/// strictly ascending index order.
pub struct LoremDocumentReader {
    count: usize,
    length: usize,
    emitted: Cell<usize>,
}

impl ItemReader<DocumentOutline> for LoremDocumentReader {
    fn read(&self) -> Result<Option<DocumentOutline>, BatchError> {
        let index = self.emitted.get();

        if index >= self.count {
            return Ok(None);
        }

        self.emitted.set(index + 1);

        let outline = DocumentOutline {
            index,
            length: self.length,
        };
        debug!("Outline: {}", outline);
        Ok(Some(outline))
    }
}

/// Builder for [`LoremDocumentReader`] instances.
#[derive(Default)]
pub struct LoremDocumentReaderBuilder {
    count: usize,
    length: usize,
}

impl LoremDocumentReaderBuilder {
    pub fn new() -> LoremDocumentReaderBuilder {
        LoremDocumentReaderBuilder {
            count: 0,
            length: 0,
        }
    }

    /// Sets the number of documents to emit.
    pub fn count(mut self, count: usize) -> LoremDocumentReaderBuilder {
        self.count = count;
        self
    }

    /// Sets the sentence budget carried by each outline.
    pub fn length(mut self, length: usize) -> LoremDocumentReaderBuilder {
        self.length = length;
        self
    }

    pub fn build(self) -> LoremDocumentReader {
        LoremDocumentReader {
            count: self.count,
            length: self.length,
            emitted: Cell::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LoremDocumentReaderBuilder;
    use crate::core::item::ItemReader;

    #[test]
    fn reader_emits_ascending_indices_then_none() {
        let reader = LoremDocumentReaderBuilder::new().count(2).length(500).build();

        let first = reader.read().unwrap().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.length, 500);

        let second = reader.read().unwrap().unwrap();
        assert_eq!(second.index, 1);

        assert!(reader.read().unwrap().is_none());
        // Stays exhausted on further reads
        assert!(reader.read().unwrap().is_none());
    }

    #[test]
    fn reader_with_zero_count_is_immediately_exhausted() {
        let reader = LoremDocumentReaderBuilder::new().count(0).length(500).build();
        assert!(reader.read().unwrap().is_none());
    }
}
