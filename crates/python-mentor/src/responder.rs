//! Lookup-or-generate orchestration for incoming questions

use std::sync::Arc;

use crate::classifier::QuestionClassifier;
use crate::config::LlmConfig;
use crate::error::Result;
use crate::follow_up::follow_ups_for;
use crate::generation::PromptBuilder;
use crate::providers::TextGenerator;
use crate::storage::KnowledgeBase;
use crate::types::{Analysis, AnswerSource, Category, MentorResponse, NewQaPair};

/// Answers questions from the knowledge base, falling back to the generator
pub struct Responder {
    classifier: QuestionClassifier,
    generator: Arc<dyn TextGenerator>,
    max_tokens: u32,
    temperature: f32,
}

impl Responder {
    pub fn new(generator: Arc<dyn TextGenerator>, config: &LlmConfig) -> Self {
        Self {
            classifier: QuestionClassifier::new(),
            generator,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn classify(&self, question: &str) -> Analysis {
        self.classifier.classify(question)
    }

    /// Answer a question.
    ///
    /// A stored pair with the same classification whose question is contained
    /// in `question` is reused verbatim. Otherwise the generator is called once
    /// and the new pair is stored. Generator and storage errors are returned
    /// as-is.
    pub async fn respond(&self, kb: &KnowledgeBase, question: &str) -> Result<MentorResponse> {
        let analysis = self.classify(question);
        tracing::debug!(
            "Classified question as {}/{}",
            analysis.category,
            analysis.difficulty
        );

        let (answer, source) = match kb.find_answer(analysis.category, analysis.difficulty, question)? {
            Some(pair) => {
                tracing::info!("Reusing stored answer #{}", pair.id);
                (pair.answer, AnswerSource::Cached)
            }
            None => {
                let answer = self.generate_answer(question).await?;
                let id = kb.insert_qa_pair(&NewQaPair::new(
                    question,
                    answer.as_str(),
                    analysis.category,
                    analysis.difficulty,
                ))?;
                tracing::info!("Stored generated answer #{}", id);
                (answer, AnswerSource::Generated)
            }
        };

        let code_example = self.relevant_code_example(kb, analysis.category)?;

        Ok(MentorResponse {
            answer,
            code_example,
            category: analysis.category,
            difficulty: analysis.difficulty,
            follow_up_questions: self.generate_follow_up_questions(analysis.category),
            source,
        })
    }

    async fn generate_answer(&self, question: &str) -> Result<String> {
        let prompt = PromptBuilder::build_answer_prompt(question);
        tracing::info!(
            "No stored answer, generating with {} ({})",
            self.generator.name(),
            self.generator.model()
        );
        self.generator
            .generate(&prompt, self.max_tokens, self.temperature)
            .await
    }

    /// Markdown code example for a category, if one is stored
    pub fn relevant_code_example(
        &self,
        kb: &KnowledgeBase,
        category: Category,
    ) -> Result<Option<String>> {
        Ok(kb
            .code_example_for(category.as_str())?
            .map(|example| example.to_markdown()))
    }

    pub fn generate_follow_up_questions(&self, category: Category) -> Vec<String> {
        follow_ups_for(category).iter().map(|q| q.to_string()).collect()
    }
}
