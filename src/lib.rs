pub mod config;
pub mod dilution;
pub mod error;
pub mod llm;
pub mod pdf;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
