mod mocks;

pub use mocks::MockDocumentWriter;
