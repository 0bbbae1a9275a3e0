//! Shared vocabulary for the Dromos workspace.
//!
//! - [`types`] - Identifier and scalar types ([`VertexId`], [`Weight`])
//! - [`collections`] - Fast hash collections with FxHash (non-cryptographic)
//! - [`error`] - Error types ([`Error`] and the [`Result`] alias)

pub mod collections;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{VertexId, Weight};
