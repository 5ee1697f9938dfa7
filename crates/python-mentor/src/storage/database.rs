//! SQLite knowledge base for Q&A pairs, code examples and interaction logs
//!
//! The handle owns its connection; dropping it closes the database.

use chrono::{DateTime, NaiveDateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::types::{
    Category, CodeExample, Difficulty, Interaction, NewCodeExample, NewQaPair, QaPair,
};

use super::seed;

/// SQLite-backed knowledge base
pub struct KnowledgeBase {
    conn: Mutex<Connection>,
}

impl KnowledgeBase {
    /// Create or open the database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::internal(format!("Failed to open database '{}': {}", path.display(), e))
        })?;

        let kb = Self {
            conn: Mutex::new(conn),
        };

        kb.migrate()?;
        tracing::info!("Knowledge base opened at {}", path.display());
        Ok(kb)
    }

    /// Create an in-memory database
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let kb = Self {
            conn: Mutex::new(conn),
        };

        kb.migrate()?;
        Ok(kb)
    }

    /// Open the configured database, seeding empty tables when enabled
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let kb = Self::open(&config.path)?;
        if config.seed {
            kb.seed_if_empty()?;
        }
        Ok(kb)
    }

    /// Create the three tables if missing
    fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS qa_pairs (
                id INTEGER PRIMARY KEY,
                question TEXT,
                answer TEXT,
                category TEXT,
                difficulty TEXT,
                timestamp DATETIME
            );

            CREATE TABLE IF NOT EXISTS user_interactions (
                id INTEGER PRIMARY KEY,
                question TEXT,
                matched_response TEXT,
                helpful BOOLEAN,
                timestamp DATETIME
            );

            CREATE TABLE IF NOT EXISTS code_examples (
                id INTEGER PRIMARY KEY,
                concept TEXT,
                code TEXT,
                explanation TEXT,
                difficulty TEXT
            );
            "#,
        )
        .map_err(|e| Error::internal(format!("Failed to run migrations: {}", e)))?;

        tracing::debug!("Knowledge base schema ready");
        Ok(())
    }

    /// Insert the basic Q&A pairs and reference code examples into empty tables
    pub fn seed_if_empty(&self) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if self.qa_pair_count()? == 0 {
            for pair in seed::basic_qa_pairs() {
                self.insert_qa_pair(&pair)?;
                report.qa_pairs += 1;
            }
        }

        if self.code_example_count()? == 0 {
            for example in seed::reference_code_examples() {
                self.insert_code_example(&example)?;
                report.code_examples += 1;
            }
        }

        if report.qa_pairs + report.code_examples > 0 {
            tracing::info!(
                "Seeded {} Q&A pairs and {} code examples",
                report.qa_pairs,
                report.code_examples
            );
        }

        Ok(report)
    }

    // ==================== Q&A Pair Operations ====================

    /// Store a Q&A pair, returning its id
    pub fn insert_qa_pair(&self, pair: &NewQaPair) -> Result<i64> {
        let conn = self.conn.lock();

        conn.execute(
            r#"
            INSERT INTO qa_pairs (question, answer, category, difficulty, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                pair.question,
                pair.answer,
                pair.category.as_str(),
                pair.difficulty.as_str(),
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// First stored pair with the same classification whose question text is
    /// contained in `question`, compared with Unicode lowercasing
    pub fn find_answer(
        &self,
        category: Category,
        difficulty: Difficulty,
        question: &str,
    ) -> Result<Option<QaPair>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare(
            r#"
            SELECT id, question, answer, category, difficulty, timestamp
            FROM qa_pairs
            WHERE category = ?1
              AND difficulty = ?2
              AND length(question) > 0
            ORDER BY id ASC
            "#,
        )?;

        let needle = question.to_lowercase();
        let mut rows = stmt.query_map(
            params![category.as_str(), difficulty.as_str()],
            row_to_qa_pair,
        )?;

        rows.find_map(|row| match row {
            Ok(pair) if needle.contains(&pair.question.to_lowercase()) => Some(Ok(pair)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .transpose()
        .map_err(Error::from)
    }

    /// Number of stored Q&A pairs
    pub fn qa_pair_count(&self) -> Result<usize> {
        self.count("SELECT COUNT(*) FROM qa_pairs")
    }

    /// All Q&A pairs in insertion order
    pub fn list_qa_pairs(&self) -> Result<Vec<QaPair>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare(
            "SELECT id, question, answer, category, difficulty, timestamp FROM qa_pairs ORDER BY id ASC",
        )?;

        let pairs = stmt
            .query_map([], row_to_qa_pair)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(pairs)
    }

    // ==================== Code Example Operations ====================

    /// Store a code example, returning its id
    pub fn insert_code_example(&self, example: &NewCodeExample) -> Result<i64> {
        let conn = self.conn.lock();

        conn.execute(
            r#"
            INSERT INTO code_examples (concept, code, explanation, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                example.concept,
                example.code,
                example.explanation,
                example.difficulty.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// First stored code example for a concept
    pub fn code_example_for(&self, concept: &str) -> Result<Option<CodeExample>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare(
            r#"
            SELECT id, concept, code, explanation, difficulty
            FROM code_examples
            WHERE concept = ?1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )?;

        let example = stmt
            .query_row(params![concept], row_to_code_example)
            .optional()?;

        Ok(example)
    }

    /// Number of stored code examples
    pub fn code_example_count(&self) -> Result<usize> {
        self.count("SELECT COUNT(*) FROM code_examples")
    }

    // ==================== Interaction Operations ====================

    /// Append an interaction, returning its id
    pub fn insert_interaction(
        &self,
        question: &str,
        matched_response: &str,
        helpful: bool,
    ) -> Result<i64> {
        let conn = self.conn.lock();

        conn.execute(
            r#"
            INSERT INTO user_interactions (question, matched_response, helpful, timestamp)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![question, matched_response, helpful, Utc::now().to_rfc3339()],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// All interactions in insertion order
    pub fn list_interactions(&self) -> Result<Vec<Interaction>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare(
            "SELECT id, question, matched_response, helpful, timestamp FROM user_interactions ORDER BY id ASC",
        )?;

        let interactions = stmt
            .query_map([], row_to_interaction)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(interactions)
    }

    /// Get knowledge base statistics
    pub fn stats(&self) -> Result<KnowledgeBaseStats> {
        Ok(KnowledgeBaseStats {
            qa_pairs: self.qa_pair_count()?,
            code_examples: self.code_example_count()?,
            interactions: self.count("SELECT COUNT(*) FROM user_interactions")?,
            helpful_interactions: self
                .count("SELECT COUNT(*) FROM user_interactions WHERE helpful = 1")?,
        })
    }

    fn count(&self, sql: &str) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Rows inserted by [`KnowledgeBase::seed_if_empty`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub qa_pairs: usize,
    pub code_examples: usize,
}

/// Knowledge base statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct KnowledgeBaseStats {
    pub qa_pairs: usize,
    pub code_examples: usize,
    pub interactions: usize,
    pub helpful_interactions: usize,
}

// Helper functions

fn parse_timestamp(raw: Option<String>) -> DateTime<Utc> {
    let Some(s) = raw else {
        return Utc::now();
    };

    if let Ok(d) = DateTime::parse_from_rfc3339(&s) {
        return d.with_timezone(&Utc);
    }

    // Rows written by Python's `datetime.now()`
    match NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f") {
        Ok(naive) => naive.and_utc(),
        Err(e) => {
            tracing::warn!("Unparseable timestamp '{}': {}", s, e);
            Utc::now()
        }
    }
}

fn parse_difficulty(raw: Option<String>) -> Difficulty {
    raw.as_deref()
        .and_then(Difficulty::from_tag)
        .unwrap_or(Difficulty::Beginner)
}

fn row_to_qa_pair(row: &rusqlite::Row) -> rusqlite::Result<QaPair> {
    let id: i64 = row.get(0)?;
    let question: Option<String> = row.get(1)?;
    let answer: Option<String> = row.get(2)?;
    let category: Option<String> = row.get(3)?;
    let difficulty: Option<String> = row.get(4)?;
    let timestamp: Option<String> = row.get(5)?;

    Ok(QaPair {
        id,
        question: question.unwrap_or_default(),
        answer: answer.unwrap_or_default(),
        category: category
            .as_deref()
            .and_then(Category::from_tag)
            .unwrap_or(Category::General),
        difficulty: parse_difficulty(difficulty),
        timestamp: parse_timestamp(timestamp),
    })
}

fn row_to_code_example(row: &rusqlite::Row) -> rusqlite::Result<CodeExample> {
    let id: i64 = row.get(0)?;
    let concept: Option<String> = row.get(1)?;
    let code: Option<String> = row.get(2)?;
    let explanation: Option<String> = row.get(3)?;
    let difficulty: Option<String> = row.get(4)?;

    Ok(CodeExample {
        id,
        concept: concept.unwrap_or_default(),
        code: code.unwrap_or_default(),
        explanation: explanation.unwrap_or_default(),
        difficulty: parse_difficulty(difficulty),
    })
}

fn row_to_interaction(row: &rusqlite::Row) -> rusqlite::Result<Interaction> {
    let id: i64 = row.get(0)?;
    let question: Option<String> = row.get(1)?;
    let matched_response: Option<String> = row.get(2)?;
    let helpful: Option<bool> = row.get(3)?;
    let timestamp: Option<String> = row.get(4)?;

    Ok(Interaction {
        id,
        question: question.unwrap_or_default(),
        matched_response: matched_response.unwrap_or_default(),
        helpful: helpful.unwrap_or(false),
        timestamp: parse_timestamp(timestamp),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment_pair() -> NewQaPair {
        NewQaPair::new(
            "How do I deploy my Python application?",
            "Use a WSGI server behind a reverse proxy.",
            Category::Deployment,
            Difficulty::Intermediate,
        )
    }

    #[test]
    fn test_insert_and_find_by_contained_question() {
        let kb = KnowledgeBase::in_memory().unwrap();
        let id = kb.insert_qa_pair(&deployment_pair()).unwrap();

        let found = kb
            .find_answer(
                Category::Deployment,
                Difficulty::Intermediate,
                "Quick one: how do I deploy my Python application? Thanks!",
            )
            .unwrap()
            .unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.answer, "Use a WSGI server behind a reverse proxy.");
        assert_eq!(found.category, Category::Deployment);
    }

    #[test]
    fn test_find_requires_matching_classification() {
        let kb = KnowledgeBase::in_memory().unwrap();
        kb.insert_qa_pair(&deployment_pair()).unwrap();

        let q = "How do I deploy my Python application?";
        assert!(kb.find_answer(Category::Deployment, Difficulty::Advanced, q).unwrap().is_none());
        assert!(kb.find_answer(Category::General, Difficulty::Intermediate, q).unwrap().is_none());
    }

    #[test]
    fn test_find_does_not_match_shorter_input() {
        let kb = KnowledgeBase::in_memory().unwrap();
        kb.insert_qa_pair(&deployment_pair()).unwrap();

        // input is a substring of the stored question, not the other way round
        let found = kb
            .find_answer(Category::Deployment, Difficulty::Intermediate, "deploy")
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_find_returns_first_stored_duplicate() {
        let kb = KnowledgeBase::in_memory().unwrap();
        let first = kb.insert_qa_pair(&deployment_pair()).unwrap();
        kb.insert_qa_pair(&NewQaPair::new(
            "How do I deploy my Python application?",
            "A later answer",
            Category::Deployment,
            Difficulty::Intermediate,
        ))
        .unwrap();

        let found = kb
            .find_answer(
                Category::Deployment,
                Difficulty::Intermediate,
                "How do I deploy my Python application?",
            )
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first);
        assert_eq!(kb.qa_pair_count().unwrap(), 2);
    }

    #[test]
    fn test_empty_stored_question_never_matches() {
        let kb = KnowledgeBase::in_memory().unwrap();
        kb.insert_qa_pair(&NewQaPair::new("", "blank", Category::General, Difficulty::Beginner))
            .unwrap();

        let found = kb
            .find_answer(Category::General, Difficulty::Beginner, "What is a list?")
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_code_example_lookup() {
        let kb = KnowledgeBase::in_memory().unwrap();
        assert!(kb.code_example_for("testing").unwrap().is_none());

        kb.insert_code_example(&NewCodeExample::new(
            "testing",
            "def test_ok():\n    assert True",
            "A minimal pytest test.",
            Difficulty::Beginner,
        ))
        .unwrap();
        kb.insert_code_example(&NewCodeExample::new(
            "testing",
            "second",
            "second",
            Difficulty::Advanced,
        ))
        .unwrap();

        let example = kb.code_example_for("testing").unwrap().unwrap();
        assert_eq!(example.explanation, "A minimal pytest test.");
        assert!(kb.code_example_for("docker").unwrap().is_none());
    }

    #[test]
    fn test_interactions_and_stats() {
        let kb = KnowledgeBase::in_memory().unwrap();
        kb.insert_interaction("q1", "a1", true).unwrap();
        kb.insert_interaction("q2", "a2", false).unwrap();

        let interactions = kb.list_interactions().unwrap();
        assert_eq!(interactions.len(), 2);
        assert!(interactions[0].helpful);
        assert!(!interactions[1].helpful);

        let stats = kb.stats().unwrap();
        assert_eq!(stats.interactions, 2);
        assert_eq!(stats.helpful_interactions, 1);
        assert_eq!(stats.qa_pairs, 0);
    }

    #[test]
    fn test_seed_only_once() {
        let kb = KnowledgeBase::in_memory().unwrap();

        let report = kb.seed_if_empty().unwrap();
        assert_eq!(report.qa_pairs, 2);
        assert!(report.code_examples > 0);

        let again = kb.seed_if_empty().unwrap();
        assert_eq!(again, SeedReport::default());
        assert_eq!(kb.qa_pair_count().unwrap(), 2);
    }

    #[test]
    fn test_reopen_file_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentor.db");

        {
            let kb = KnowledgeBase::open(&path).unwrap();
            kb.insert_qa_pair(&deployment_pair()).unwrap();
        }

        let kb = KnowledgeBase::open(&path).unwrap();
        let pairs = kb.list_qa_pairs().unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_python_timestamps_decode() {
        let kb = KnowledgeBase::in_memory().unwrap();
        {
            let conn = kb.conn.lock();
            conn.execute(
                "INSERT INTO qa_pairs (question, answer, category, difficulty, timestamp) VALUES ('q', 'a', 'general', 'beginner', '2024-05-01 10:20:30.123456')",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO user_interactions (question, matched_response, helpful, timestamp) VALUES ('q', 'a', 1, '2024-05-02 08:00:00')",
                [],
            )
            .unwrap();
        }

        let pair = &kb.list_qa_pairs().unwrap()[0];
        assert_eq!(pair.timestamp.to_rfc3339(), "2024-05-01T10:20:30.123456+00:00");

        let interaction = &kb.list_interactions().unwrap()[0];
        assert_eq!(interaction.timestamp.date_naive().to_string(), "2024-05-02");
    }

    #[test]
    fn test_find_lowercases_non_ascii() {
        let kb = KnowledgeBase::in_memory().unwrap();
        let id = kb
            .insert_qa_pair(&NewQaPair::new(
                "über deploy",
                "Deploy the Über service",
                Category::Deployment,
                Difficulty::Intermediate,
            ))
            .unwrap();

        let found = kb
            .find_answer(Category::Deployment, Difficulty::Intermediate, "HOW DO I ÜBER DEPLOY?")
            .unwrap()
            .unwrap();
        assert_eq!(found.id, id);
    }

    #[test]
    fn test_unknown_stored_tags_decode_to_defaults() {
        let kb = KnowledgeBase::in_memory().unwrap();
        kb.conn
            .lock()
            .execute(
                "INSERT INTO qa_pairs (question, answer, category, difficulty, timestamp) VALUES ('q', 'a', 'rust', 'expert', 'not a date')",
                [],
            )
            .unwrap();

        let pairs = kb.list_qa_pairs().unwrap();
        assert_eq!(pairs[0].category, Category::General);
        assert_eq!(pairs[0].difficulty, Difficulty::Beginner);
    }
}
