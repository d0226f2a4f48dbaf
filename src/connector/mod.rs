//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Chat completion (OpenAI-compatible HTTP, mock for tests)
//! - Response parsing (keyword heuristics, structured JSON)
//! - Translation cache storage (JSON file, in-memory)

pub mod adapter;
pub mod storage;

pub use adapter::*;
pub use storage::*;
