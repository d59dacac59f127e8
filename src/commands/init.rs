use crate::config::loader::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Lexiscreen Configuration

# Sub-test weights for the cumulative assessment. Must sum to 1.0.
[weights]
eye_tracking = 0.30
handwriting = 0.25
phonetics = 0.20
questionnaire = 0.15
dictation = 0.10
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
