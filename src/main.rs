use std::sync::Arc;
use tokio::sync::RwLock;
use welds::connections::any::AnyClient;

use fitness_backend::app_state::AppState;
use fitness_backend::migrations;
use fitness_backend::services::{
    Suggester, SqlMuscleGroupStore, SqlUserStore, SqlWorkoutDetailStore, SqlWorkoutSessionStore,
    SqlWorkoutTypeStore, TokenService,
};
use fitness_backend::utils::Config;
use fitness_backend::{get_db_pool, Application};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::from_env().expect("Failed to load config");

    let db_client = get_configured_db_connection(config.db_url()).await;

    let token_service = Arc::new(TokenService::new(&config));
    let suggester = Arc::new(Suggester::new(config.ollama_base_url(), config.ollama_model()));
    if let Err(e) = suggester.ensure_model().await {
        log::warn!("could not ensure LLM model is present: {}", e);
    }

    let app_state = AppState::new(
        Arc::new(RwLock::new(SqlUserStore::new(db_client.clone()))),
        Arc::new(RwLock::new(SqlMuscleGroupStore::new(db_client.clone()))),
        Arc::new(RwLock::new(SqlWorkoutTypeStore::new(db_client.clone()))),
        Arc::new(RwLock::new(SqlWorkoutSessionStore::new(db_client.clone()))),
        Arc::new(RwLock::new(SqlWorkoutDetailStore::new(db_client))),
        token_service,
        suggester,
    );

    let app = Application::build(app_state, config.http_addr())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

async fn get_configured_db_connection(db_url: &str) -> AnyClient {
    let db_client = get_db_pool(db_url).await.expect("Failed to connect to database");
    if let Err(e) = migrations::up(&db_client).await {
        log::error!("migration failed: {}", e);
    }
    db_client
}
