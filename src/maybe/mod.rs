//! The optional companion of [`Outcome`](crate::Outcome).
//!
//! [`Maybe`] is what [`Outcome::ok`](crate::Outcome::ok) and
//! [`Outcome::err`](crate::Outcome::err) project onto. It carries a small algebra of
//! its own so the projection can be consumed without first converting to [`Option`].
//!
//! # Examples
//!
//! ```
//! use result_rail::{err, Maybe, Outcome};
//!
//! let failed: Outcome<i32, &str> = err("nothing here");
//! assert!(failed.ok().is_none());
//!
//! let back: Outcome<i32, &str> = Maybe::Some(7).ok_or("missing");
//! assert!(back.contains(&7));
//! ```
pub mod core;

pub use self::core::*;
