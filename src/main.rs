mod config;
mod db;
mod dictionary;
mod game;
mod leaderboard;
mod models;
mod routes;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use config::Config;
use dashmap::DashMap;
use dictionary::Dictionary;
use game::Table;
use leaderboard::{JsonScoreStore, PgScoreStore, ScoreStore};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Dictionary,
    pub scores: Arc<dyn ScoreStore>,
    /// Games in progress, keyed by game id
    pub tables: DashMap<Uuid, Table>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrabble_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scrabble backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let scores = create_score_store(&config).await?;

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty()
        }
    };

    if let Some(dir) = &config.storage.session_dir {
        tokio::fs::create_dir_all(dir).await?;
        tracing::info!("Saving game sessions under {}", dir);
    }

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary,
        scores,
        tables: DashMap::new(),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve the browser client for everything the API does not claim
    let frontend_service = ServeDir::new(&config.server.static_dir);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game client: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` is set, otherwise the JSON score file
async fn create_score_store(config: &Config) -> Result<Arc<dyn ScoreStore>> {
    match &config.storage.database_url {
        Some(url) => {
            let pool = db::create_pool(url, config.storage.max_connections).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations completed");

            Ok(Arc::new(PgScoreStore::new(pool)))
        }
        None => {
            tracing::info!("Storing scores in {}", config.storage.scores_path);
            Ok(Arc::new(JsonScoreStore::new(&config.storage.scores_path)))
        }
    }
}
