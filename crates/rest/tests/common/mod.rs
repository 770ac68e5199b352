//! Shared test utilities for the course search API.

pub mod harness;

#[allow(unused_imports)]
pub use harness::*;
