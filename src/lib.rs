pub mod commands;
pub mod config;
pub mod error;
pub mod package;
pub mod runtime;

pub use error::Error;
