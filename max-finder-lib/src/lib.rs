//! `max-finder-lib` exposes the integer-maximum pipeline that powers the
//! `max-finder` CLI.
//!
//! A line of text is split on spaces, every token that is a whole base-10
//! integer literal is kept, and the greatest of them is reported. Tokens that
//! are not integers are dropped without error.
//!
//! # Example
//!
//! ```rust
//! use max_finder_lib::pipeline::{analyze, compute_max, Outcome};
//!
//! assert_eq!(compute_max("-10 -2 -50"), Outcome::Found(-2));
//! assert_eq!(compute_max("").to_string(), "No valid numbers provided.");
//!
//! let analysis = analyze("5 x 9 -3");
//! assert_eq!(analysis.rejected(), &["x"]);
//! assert_eq!(analysis.outcome().to_string(), "The maximum number is: 9");
//! ```

pub mod error;
pub mod input;
pub mod pipeline;
pub mod report;

pub use crate::error::MaxFinderError;
pub use crate::pipeline::{analyze, compute_max, Analysis, Outcome};
