//! CLI command implementations.
//!
//! One module per command:
//! - **assess**: run the cumulative assessment over a scores file
//! - **phrases**: print age-appropriate dictation phrases
//! - **init**: write a default `.lexiscreen.toml`

pub mod assess;
pub mod init;
pub mod phrases;

pub use assess::{run_assess, AssessConfig};
pub use init::init_config;
pub use phrases::print_phrases;
