//! Provider abstractions for text generation
//!
//! The responder only sees `TextGenerator`, so tests can swap in a stub.

pub mod generator;
pub mod ollama;

pub use generator::TextGenerator;
pub use ollama::OllamaGenerator;
