use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::TILE_COUNT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for any path the API does not handle
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// When set, scores go to Postgres instead of `scores_path`
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub scores_path: String,
    /// When set, each game's board and bag are saved here as JSON
    pub session_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub tile_count: usize,
    pub number_of_players: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./client".to_string()),
        };

        let storage = StorageConfig {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            scores_path: env::var("SCORES_PATH")
                .unwrap_or_else(|_| "scores.json".to_string()),
            session_dir: env::var("SESSION_DIR").ok().filter(|dir| !dir.is_empty()),
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            tile_count: env::var("TILE_COUNT")
                .unwrap_or_else(|_| TILE_COUNT.to_string())
                .parse()
                .unwrap_or(TILE_COUNT),
            number_of_players: env::var("NUMBER_OF_PLAYERS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),
        };

        Ok(Config {
            server,
            storage,
            game,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
impl Config {
    /// Defaults with storage under the given scratch paths
    pub fn for_tests(scores_path: &str) -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                static_dir: "./client".to_string(),
            },
            storage: StorageConfig {
                database_url: None,
                max_connections: 1,
                scores_path: scores_path.to_string(),
                session_dir: None,
            },
            game: GameConfig {
                dictionary_path: "./dictionary.txt".to_string(),
                tile_count: TILE_COUNT,
                number_of_players: 2,
            },
        }
    }
}
