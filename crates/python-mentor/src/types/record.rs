//! Records persisted in the knowledge base

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, Difficulty};

/// Stored question/answer pair with its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaPair {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub timestamp: DateTime<Utc>,
}

/// A QaPair that has not been written yet
#[derive(Debug, Clone)]
pub struct NewQaPair {
    pub question: String,
    pub answer: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl NewQaPair {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }
}

/// Reference code snippet keyed by concept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExample {
    pub id: i64,
    /// Category tag this example illustrates
    pub concept: String,
    pub code: String,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl CodeExample {
    /// Render as a fenced Python block followed by the explanation
    pub fn to_markdown(&self) -> String {
        format!("```python\n{}\n```\n{}", self.code, self.explanation)
    }
}

/// A code example that has not been written yet
#[derive(Debug, Clone)]
pub struct NewCodeExample {
    pub concept: String,
    pub code: String,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl NewCodeExample {
    pub fn new(
        concept: impl Into<String>,
        code: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            concept: concept.into(),
            code: code.into(),
            explanation: explanation.into(),
            difficulty,
        }
    }
}

/// Logged user feedback on an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: i64,
    pub question: String,
    pub matched_response: String,
    pub helpful: bool,
    pub timestamp: DateTime<Utc>,
}
