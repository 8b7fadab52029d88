pub mod catalog;
pub mod config;
pub mod error;

// Query and pricing engine
pub mod engine;

// Transport
pub mod api;
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use catalog::Catalog;
pub use config::Settings;
pub use error::{Error, Result};
