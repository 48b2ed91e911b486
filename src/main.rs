use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use timetable_api::config::ApiConfig;
use timetable_store::{InMemorySessionRepository, SessionRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Seed the session store
    let sessions: Arc<dyn SessionRepository> = match &config.sessions_file {
        Some(path) => Arc::new(InMemorySessionRepository::from_json_file(path)?),
        None => Arc::new(InMemorySessionRepository::with_catalog()),
    };

    // Start API server
    timetable_api::start_server(config, sessions).await?;

    Ok(())
}
