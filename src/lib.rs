pub mod completion;
pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod prompt;
pub mod types;
pub mod web;

pub use web::start_web_server;
