pub mod aggregate;
pub mod discover;
pub mod error;
pub mod model;
pub mod output;
pub mod reader;
