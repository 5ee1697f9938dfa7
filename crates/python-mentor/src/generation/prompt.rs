//! Prompt templates for answer generation

/// Prompt builder for mentor questions
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the completion prompt for a Python project question
    pub fn build_answer_prompt(question: &str) -> String {
        format!("Python project question: {}\nDetailed answer:", question)
    }
}
