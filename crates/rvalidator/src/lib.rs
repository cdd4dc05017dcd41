//! # rvalidator
//!
//! Runs the `validator` crate's derived rules against a record and turns every
//! violation into a human-readable message. Each field may declare a custom
//! message in its record schema; fields without one get the engine's default
//! text.
//!
//! - Rule violations come back as messages, never as errors
//! - Errors are reserved for non-record input and engine usage failures
//! - Messages follow the record's field declaration order
//!
//! ## Example
//!
//! ```rust
//! use rvalidator::validate;
//! use rvalidator_core::{static_schema, FieldSpec, Record, RecordSchema};
//! use validator::Validate;
//!
//! #[derive(Validate)]
//! struct Signup {
//!     #[validate(length(min = 1))]
//!     name: String,
//!     #[validate(email)]
//!     email: String,
//! }
//!
//! impl Record for Signup {
//!     fn schema() -> &'static RecordSchema {
//!         static_schema!(
//!             RecordSchema::builder("Signup")
//!                 .field(FieldSpec::new("name").message("name is required"))
//!                 .field("email")
//!                 .build()
//!         )
//!     }
//! }
//!
//! let signup = Signup {
//!     name: String::new(),
//!     email: "not-an-email".to_string(),
//! };
//!
//! let messages = validate(&signup).unwrap();
//! assert_eq!(
//!     messages,
//!     vec![
//!         "name is required".to_string(),
//!         "Field validation for 'email' failed on the 'email' tag".to_string(),
//!     ]
//! );
//! ```

mod adapter;
mod engine;
mod registry;
mod resolve;

pub use adapter::*;
pub use engine::*;
pub use registry::*;
pub use resolve::*;
