mod analyze_document;
mod assistant_chat;
mod citizen_query;
mod officer_insights;
mod scheme_recommendations;
mod translate_text;

pub use analyze_document::*;
pub use assistant_chat::*;
pub use citizen_query::*;
pub use officer_insights::*;
pub use scheme_recommendations::*;
pub use translate_text::*;
