mod heuristic_parser;
mod json_parser;
mod mock_chat_client;
mod openai_chat_client;
mod retry;

pub use heuristic_parser::*;
pub use json_parser::*;
pub use mock_chat_client::*;
pub use openai_chat_client::*;
pub use retry::*;
