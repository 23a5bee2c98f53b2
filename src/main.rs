use lorem_batch::{
    BatchError,
    generator::{GeneratorConfig, generate_markdown_files},
};

/// Generates the fixed fixture batch: 500 files of 100 paragraphs each under
/// `text/`. No arguments, flags, or environment configuration are read.
fn main() -> Result<(), BatchError> {
    env_logger::init();

    let config = GeneratorConfig::new();
    generate_markdown_files(&config)?;

    Ok(())
}
