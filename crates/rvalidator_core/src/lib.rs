//! # rvalidator core
//!
//! Data model shared by the rvalidator adapter.
//!
//! ## Key Concepts
//!
//! - **Record**: a struct with `#[derive(Validate)]` rules and a [`RecordSchema`]
//!   describing its fields
//! - **FieldSpec**: per-field adapter metadata, most importantly the custom
//!   message that replaces the engine's default text
//! - **FieldFailure**: one violated rule as the engine reports it
//! - **ResolvedMessage**: the text shown for a failure, plus where it came from
//!
//! ## Example
//!
//! ```rust
//! use rvalidator_core::{FieldSpec, RecordSchema};
//!
//! let schema = RecordSchema::builder("User")
//!     .field(FieldSpec::new("name").message("name is required"))
//!     .field("email")
//!     .build();
//!
//! assert_eq!(
//!     schema.field("name").and_then(FieldSpec::custom_message),
//!     Some("name is required")
//! );
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod failure;
pub mod message;
pub mod schema;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use failure::*;
pub use message::*;
pub use schema::*;
