//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, String> {
//!     match id {
//!         1 => ok("alice"),
//!         _ => err(format!("no user {id}")),
//!     }
//! }
//!
//! assert_eq!(lookup(1).unwrap_or("nobody"), "alice");
//! assert_eq!(lookup(2).map_or(0, |name| name.len()), 0);
//! ```

// Macros
pub use crate::{attempt, rail};

// Core types
pub use crate::maybe::Maybe;
pub use crate::outcome::{err, ok, Outcome};

// Traits
pub use crate::traits::{ErrorOps, IntoMaybe, IntoOutcome, WithError};
