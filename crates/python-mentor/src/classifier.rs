//! Question classification by ordered pattern rules and keyword sets

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Analysis, Category, Difficulty};

/// One category rule: the question matches `pattern` => `category`
struct CategoryRule {
    pattern: Regex,
    category: Category,
}

/// Evaluated top to bottom, first match wins.
const CATEGORY_PATTERNS: &[(&str, Category)] = &[
    (r"\bvenv\b|virtual environment", Category::VirtualEnvironment),
    (r"\bdjango\b", Category::DjangoFramework),
    (r"\bflask\b", Category::FlaskFramework),
    (r"\bapi\b", Category::ApiDevelopment),
    (r"\bdeploy(s|ed|ing|ments?)?\b", Category::Deployment),
    (r"\bdocker\b", Category::Docker),
    (r"\btest(ing)?\b", Category::Testing),
    (r"\bdebug(ging)?\b", Category::Debugging),
];

const ADVANCED_KEYWORDS: &[&str] = &["advanced", "complex", "architecture"];
const INTERMEDIATE_KEYWORDS: &[&str] = &["deploy", "optimize", "secure"];

static CATEGORY_RULES: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    CATEGORY_PATTERNS
        .iter()
        .map(|(pattern, category)| CategoryRule {
            pattern: Regex::new(pattern).expect("category pattern is a valid regex"),
            category: *category,
        })
        .collect()
});

/// Maps raw question text to a category and difficulty
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionClassifier;

impl QuestionClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a question. Never fails; unmatched questions are `general`/`beginner`.
    pub fn classify(&self, question: &str) -> Analysis {
        let lower = question.to_lowercase();
        Analysis {
            category: Self::category_of(&lower),
            difficulty: Self::difficulty_of(&lower),
        }
    }

    fn category_of(lower: &str) -> Category {
        CATEGORY_RULES
            .iter()
            .find(|rule| rule.pattern.is_match(lower))
            .map(|rule| rule.category)
            .unwrap_or(Category::General)
    }

    fn difficulty_of(lower: &str) -> Difficulty {
        if ADVANCED_KEYWORDS.iter().any(|w| lower.contains(w)) {
            Difficulty::Advanced
        } else if INTERMEDIATE_KEYWORDS.iter().any(|w| lower.contains(w)) {
            Difficulty::Intermediate
        } else {
            Difficulty::Beginner
        }
    }
}
