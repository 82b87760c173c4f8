//! Device Power Consumption library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod calc;
pub mod core;
pub mod input;
