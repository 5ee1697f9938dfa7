//! Recording user feedback on answers

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KnowledgeBase;

/// Feedback on a single answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub question: String,
    /// The answer text the user saw
    pub response: String,
    pub helpful: bool,
}

/// Aggregate feedback counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackSummary {
    pub helpful: usize,
    pub not_helpful: usize,
    pub total: usize,
}

/// Appends user feedback to the interaction log
pub struct InteractionRecorder<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> InteractionRecorder<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Append one interaction, returning its id
    pub fn record_interaction(&self, question: &str, response: &str, helpful: bool) -> Result<i64> {
        let id = self.kb.insert_interaction(question, response, helpful)?;
        tracing::debug!("Recorded interaction {} (helpful: {})", id, helpful);
        Ok(id)
    }

    pub fn record(&self, feedback: &Feedback) -> Result<i64> {
        self.record_interaction(&feedback.question, &feedback.response, feedback.helpful)
    }

    pub fn summary(&self) -> Result<FeedbackSummary> {
        let stats = self.kb.stats()?;
        Ok(FeedbackSummary {
            helpful: stats.helpful_interactions,
            not_helpful: stats.interactions - stats.helpful_interactions,
            total: stats.interactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends() {
        let kb = KnowledgeBase::in_memory().unwrap();
        let recorder = InteractionRecorder::new(&kb);

        let first = recorder
            .record_interaction("How do I use venv?", "Run python -m venv .venv", true)
            .unwrap();
        let second = recorder
            .record(&Feedback {
                question: "How do I use venv?".to_string(),
                response: "Run python -m venv .venv".to_string(),
                helpful: false,
            })
            .unwrap();
        assert!(second > first);

        let logged = kb.list_interactions().unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0].question, "How do I use venv?");
        assert_eq!(logged[0].matched_response, "Run python -m venv .venv");
    }

    #[test]
    fn test_summary_counts() {
        let kb = KnowledgeBase::in_memory().unwrap();
        let recorder = InteractionRecorder::new(&kb);
        assert_eq!(recorder.summary().unwrap(), FeedbackSummary::default());

        recorder.record_interaction("a", "b", true).unwrap();
        recorder.record_interaction("c", "d", true).unwrap();
        recorder.record_interaction("e", "f", false).unwrap();

        assert_eq!(
            recorder.summary().unwrap(),
            FeedbackSummary {
                helpful: 2,
                not_helpful: 1,
                total: 3,
            }
        );
    }
}
