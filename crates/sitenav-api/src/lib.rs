//! # Sitenav API
//!
//! HTTP handlers, DTOs, error mapping, and application state.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use state::AppState;
