//! # vergil-utils
//!
//! Small stateless helpers: generic conversion, joining, case-insensitive
//! containment, range checks and in-place boolean inversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use vergil_utils::utils::{ContainsIgnoreCase, InRange, Invert, JoinExt};
//!
//! assert_eq!(["a", "b", "c"].join_with(','), "a,b,c");
//! assert!(["Foo", "Bar"].contains_ignore_case("foo"));
//! assert!(5_i32.is_in_range(1, 10, false));
//!
//! let mut flag = false;
//! assert!(flag.invert());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of vergil-utils.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
