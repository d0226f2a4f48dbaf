//! # Application Layer
//!
//! Use cases orchestrating domain logic over the connector ports.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
