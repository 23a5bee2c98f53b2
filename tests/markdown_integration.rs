use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::tempdir;

use lorem_batch::generator::{GeneratorConfig, generate_markdown_files};

fn paragraph_count(path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    Ok(content.matches("\n\n").count())
}

fn file_count(dir: &Path) -> Result<usize> {
    Ok(fs::read_dir(dir)?.count())
}

#[test]
fn batch_creates_exactly_the_requested_files() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");

    let config = GeneratorConfig::new().directory(&target).count(3).length(500);

    generate_markdown_files(&config)?;

    for index in 0..3 {
        let path = target.join(format!("lorem_ipsum_{}.md", index));
        assert!(path.is_file(), "missing {}", path.display());
        assert_eq!(paragraph_count(&path)?, 100);
    }

    assert!(!target.join("lorem_ipsum_3.md").exists());
    assert_eq!(file_count(&target)?, 3);

    Ok(())
}

#[test]
fn missing_target_directory_is_created_by_the_run() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("deeply").join("nested").join("text");
    assert!(!target.exists());

    let config = GeneratorConfig::new().directory(&target).count(2).length(10);

    generate_markdown_files(&config)?;

    assert!(target.is_dir());
    assert_eq!(file_count(&target)?, 2);

    Ok(())
}

#[test]
fn running_the_batch_twice_overwrites_without_error() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");

    let config = GeneratorConfig::new().directory(&target).count(3).length(25);

    generate_markdown_files(&config)?;
    // Second run must neither fail on the existing directory nor on the
    // existing files
    generate_markdown_files(&config)?;

    assert_eq!(file_count(&target)?, 3);
    for index in 0..3 {
        assert_eq!(
            paragraph_count(&target.join(format!("lorem_ipsum_{}.md", index)))?,
            5
        );
    }

    Ok(())
}

#[test]
fn zero_count_creates_the_directory_but_no_files() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");

    let config = GeneratorConfig::new().directory(&target).count(0);

    generate_markdown_files(&config)?;

    assert!(target.is_dir());
    assert_eq!(file_count(&target)?, 0);

    Ok(())
}

#[test]
fn zero_length_produces_empty_files() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");

    let config = GeneratorConfig::new().directory(&target).count(1).length(0);

    generate_markdown_files(&config)?;

    let content = fs::read_to_string(target.join("lorem_ipsum_0.md"))?;
    assert_eq!(content, "");

    Ok(())
}

#[test]
fn custom_basename_is_used_for_file_names() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");

    let config = GeneratorConfig::new()
        .directory(&target)
        .basename("fixture")
        .count(1)
        .length(5);

    generate_markdown_files(&config)?;

    assert!(target.join("fixture_0.md").is_file());

    Ok(())
}

#[test]
fn clean_target_removes_stale_fixtures_from_earlier_runs() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");
    fs::create_dir_all(&target)?;
    fs::write(target.join("lorem_ipsum_7.md"), "stale")?;
    fs::write(target.join("README.txt"), "keep")?;

    let config = GeneratorConfig::new()
        .directory(&target)
        .count(2)
        .length(10)
        .clean_target(true);

    generate_markdown_files(&config)?;

    assert!(!target.join("lorem_ipsum_7.md").exists());
    assert!(target.join("README.txt").exists());
    assert!(target.join("lorem_ipsum_0.md").is_file());
    assert!(target.join("lorem_ipsum_1.md").is_file());

    Ok(())
}

#[test]
fn job_execution_reports_the_generate_step_counts() -> Result<()> {
    let root = tempdir()?;
    let target = root.path().join("text");

    let config = GeneratorConfig::new().directory(&target).count(4).length(5);

    let execution = generate_markdown_files(&config)?;

    assert_eq!(execution.step_executions.len(), 1);
    let step_execution = &execution.step_executions[0];
    assert_eq!(step_execution.read_count, 4);
    assert_eq!(step_execution.write_count, 4);
    assert_eq!(step_execution.read_error_count, 0);
    assert_eq!(step_execution.write_error_count, 0);

    Ok(())
}
