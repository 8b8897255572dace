// Public modules
pub mod convert;
pub mod defaults;
pub mod error;
pub mod pipeline;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport, Step, StepReport};
