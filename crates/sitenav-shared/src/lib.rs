//! # Sitenav Shared
//!
//! Configuration and telemetry shared by the API layer and the server binary.

pub mod config;
pub mod telemetry;

pub use config::AppConfig;
