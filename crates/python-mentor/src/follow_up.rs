//! Static follow-up suggestions keyed by category

use crate::types::Category;

/// Follow-up questions for a category; empty for categories without suggestions
pub fn follow_ups_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::VirtualEnvironment => &[
            "How do I activate the virtual environment?",
            "Should I include venv in git?",
        ],
        Category::Deployment => &[
            "How do I set up environment variables?",
            "What are the best practices for production deployment?",
        ],
        Category::Testing => &[
            "How do I write unit tests?",
            "What testing framework should I use?",
        ],
        _ => &[],
    }
}

/// Follow-up questions for a category tag; unknown tags yield an empty list
pub fn generate_follow_up_questions(category: &str) -> Vec<String> {
    Category::from_tag(category)
        .map(|c| follow_ups_for(c).iter().map(|q| q.to_string()).collect())
        .unwrap_or_default()
}
