//! # Sitenav Core
//!
//! Domain entities, tree arena, version-visibility filtering, navigation
//! node adaptation, and repository ports for the navigation service.

pub mod domain;
pub mod error;
pub mod navigation;
pub mod repositories;
pub mod services;
pub mod tree;
pub mod versioning;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
