/// This module provides a logger item writer, useful for debugging pipelines.
pub mod logger;

/// This module provides the lorem document reader and processor used to
/// synthesize placeholder prose.
pub mod lorem;

/// This module provides the Markdown file writer.
pub mod markdown;
