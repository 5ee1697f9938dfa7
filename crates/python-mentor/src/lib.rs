//! python-mentor: question-answering helper for Python project questions
//!
//! Questions are classified into a category and difficulty, answered from a
//! local SQLite knowledge base when a matching pair is stored, and otherwise
//! answered by a pretrained language model whose output is stored for reuse.
//! Responses carry an optional code example and follow-up suggestions.

pub mod classifier;
pub mod config;
pub mod error;
pub mod follow_up;
pub mod generation;
pub mod learning;
pub mod providers;
pub mod responder;
pub mod storage;
pub mod types;

pub use classifier::QuestionClassifier;
pub use config::MentorConfig;
pub use error::{Error, Result};
pub use follow_up::generate_follow_up_questions;
pub use learning::InteractionRecorder;
pub use providers::{OllamaGenerator, TextGenerator};
pub use responder::Responder;
pub use storage::KnowledgeBase;
pub use types::{Analysis, Category, Difficulty, MentorResponse};
