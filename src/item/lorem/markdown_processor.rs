use fake::{Fake, faker::lorem::en::Sentence};

use crate::{
    core::item::{ItemProcessor, ItemProcessorResult},
    item::markdown::markdown_writer::MarkdownDocument,
};

use super::document_reader::DocumentOutline;

/// Assumed number of sentences per paragraph of lorem ipsum text.
pub const SENTENCES_PER_PARAGRAPH: usize = 5;

/// Builds `length / 5` paragraphs of filler prose, each followed by a blank
/// line (including after the last one).
///
/// A `length` below 5 yields zero paragraphs, i.e. the empty string. The
/// result is Markdown-compatible plain prose; no Markdown syntax is emitted.
pub fn lorem_markdown(length: usize) -> String {
    let paragraphs = length / SENTENCES_PER_PARAGRAPH;

    let mut body = String::new();
    for _ in 0..paragraphs {
        body.push_str(&lorem_paragraph());
        body.push_str("\n\n");
    }

    body
}

fn lorem_paragraph() -> String {
    let sentences: Vec<String> = (0..SENTENCES_PER_PARAGRAPH)
        .map(|_| Sentence(4..10).fake())
        .collect();

    sentences.join(" ")
}

/// Processor that turns a [`DocumentOutline`] into a [`MarkdownDocument`]
/// with a generated lorem ipsum body.
pub struct LoremMarkdownProcessor {
    basename: String,
}

impl LoremMarkdownProcessor {
    pub fn new(basename: &str) -> Self {
        Self {
            basename: basename.to_string(),
        }
    }
}

impl ItemProcessor<DocumentOutline, MarkdownDocument> for LoremMarkdownProcessor {
    fn process(&self, outline: &DocumentOutline) -> ItemProcessorResult<MarkdownDocument> {
        Ok(MarkdownDocument {
            file_name: format!("{}_{}.md", self.basename, outline.index),
            body: lorem_markdown(outline.length),
        })
    }
}
