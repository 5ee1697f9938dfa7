//! Response types for mentor queries

use serde::{Deserialize, Serialize};

use super::category::{Category, Difficulty};

/// Result of classifying a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub category: Category,
    pub difficulty: Difficulty,
}

/// Where the answer text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Reused from a stored Q&A pair
    Cached,
    /// Produced by the language model and stored
    Generated,
}

/// Full answer to a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorResponse {
    /// Answer text
    pub answer: String,
    /// Markdown code example for the category, if one is stored
    pub code_example: Option<String>,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Suggested next questions
    pub follow_up_questions: Vec<String>,
    pub source: AnswerSource,
}

impl MentorResponse {
    pub fn is_cached(&self) -> bool {
        self.source == AnswerSource::Cached
    }
}
