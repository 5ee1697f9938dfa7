//! Example mentor invocation
//!
//! Run with: cargo run -p python-mentor -- "How do I deploy my Python application?"

use std::sync::Arc;

use python_mentor::{
    InteractionRecorder, KnowledgeBase, MentorConfig, OllamaGenerator, Responder, TextGenerator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_FILE: &str = "python-mentor.toml";
const DEFAULT_QUESTION: &str = "How do I structure a Flask project for deployment?";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "python_mentor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MentorConfig::load_or_default(CONFIG_FILE)?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Database: {}", config.database.path.display());
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Max tokens: {}", config.llm.max_tokens);

    let kb = KnowledgeBase::from_config(&config.database)?;

    let generator = Arc::new(OllamaGenerator::new(&config.llm)?);
    if !generator.health_check().await? {
        tracing::warn!("Ollama not available at {}", config.llm.base_url);
        tracing::warn!("Questions without a stored answer will fail until it is running:");
        tracing::warn!("  ollama serve && ollama pull {}", config.llm.model);
    }

    let responder = Responder::new(generator, &config.llm);

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUESTION.to_string());

    let response = responder.respond(&kb, &question).await?;

    println!("\nQuestion: {}", question);
    println!("\nResponse: {}", serde_json::to_string_pretty(&response)?);

    InteractionRecorder::new(&kb).record_interaction(&question, &response.answer, true)?;

    Ok(())
}
