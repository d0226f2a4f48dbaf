mod analysis_parser;
mod chat_client;
mod translation_cache;

pub use analysis_parser::*;
pub use chat_client::*;
pub use translation_cache::*;
