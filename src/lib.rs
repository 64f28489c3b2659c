pub mod cli;
pub mod config;
pub mod export;
pub mod generator;
pub mod llm;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use generator::pipeline::{PipelineError, run};
pub use generator::workflow::launch;
pub use store::ResultStore;
