pub mod output;

pub use output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};

use std::path::Path;

/// Write string content to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
