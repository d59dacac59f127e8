// Export modules for library usage
pub mod analyzers;
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AssessmentResult, ClassificationBand, DominantClass, Error, RawMeasurement, Result, SubTest,
};

pub use crate::assessment::{
    AssessmentEngine, DetailedAssessment, FuzzyMembership, SubTestBreakdown,
};

pub use crate::config::{LexiscreenConfig, SubTestWeights};

pub use crate::scoring::normalize;

pub use crate::analyzers::{
    dictation_accuracy, levenshtein, phonetic_accuracy, phrases_for_age,
    pronunciation_inaccuracy, spelling_accuracy, HandwritingFeatures,
};

pub use crate::io::output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};
