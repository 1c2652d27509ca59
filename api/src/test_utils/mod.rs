//! Test utilities
//!
//! Manual in-memory gateway implementations and test fixtures for unit testing.
//!
//! Why manual doubles instead of mockall?
//! - mockall has lifetime issues with async traits taking `&str` parameters
//! - Manual doubles are more explicit and easier to debug
//! - The recorded call log lets tests assert which gateway queries ran, and
//!   in which order, without macro expectations

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
