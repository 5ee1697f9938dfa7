//! Storage module for persistent data storage
//!
//! Provides SQLite-based persistence for Q&A pairs, code examples and interactions.

mod database;
mod seed;

pub use database::{KnowledgeBase, KnowledgeBaseStats, SeedReport};
pub use seed::{DEPLOY_ANSWER, START_PROJECT_ANSWER};
