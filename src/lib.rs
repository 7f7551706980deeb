pub mod api;
pub mod error;
pub mod links;
pub mod matcher;
pub mod record;
pub mod segment;
pub mod text;

pub use api::{extract, extract_with_sink, Extraction};
