//! Core types for the mentor

pub mod category;
pub mod record;
pub mod response;

pub use category::{Category, Difficulty};
pub use record::{CodeExample, Interaction, NewCodeExample, NewQaPair, QaPair};
pub use response::{Analysis, AnswerSource, MentorResponse};
