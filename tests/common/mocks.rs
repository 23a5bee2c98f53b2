//! Mock item writer for failure injection.
use mockall::mock;

use lorem_batch::{
    BatchError, core::item::ItemWriter, item::markdown::markdown_writer::MarkdownDocument,
};

mock! {
    pub DocumentWriter {}
    impl ItemWriter<MarkdownDocument> for DocumentWriter {
        fn write(&self, items: &[MarkdownDocument]) -> Result<(), BatchError>;
        fn flush(&self) -> Result<(), BatchError>;
        fn open(&self) -> Result<(), BatchError>;
        fn close(&self) -> Result<(), BatchError>;
    }
}
