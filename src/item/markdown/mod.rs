pub mod markdown_writer;
