pub mod document_reader;

pub mod markdown_processor;
