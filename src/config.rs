use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::GameSlug;
use crate::error::FetchError;
use crate::games;

pub const DEFAULT_CONFIG_FILE: &str = "flashfetch.json";
pub const DEFAULT_GAMES_DIR: &str = "games";
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub games_dir: Option<String>,
    #[serde(default)]
    pub games: Option<Vec<String>>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub games_dir: Utf8PathBuf,
    pub games: Vec<GameSlug>,
    pub delay: Duration,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `flashfetch.json` if present, otherwise falls back to the
    /// builtin game list and defaults. An explicitly passed path that is
    /// missing or malformed is an error; the absent default file is not.
    pub fn resolve(path: Option<&str>) -> Result<ResolvedConfig, FetchError> {
        let config_path = match path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        if path.is_none() && !config_path.exists() {
            return Self::resolve_config(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| FetchError::ConfigRead(config_path.clone()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| FetchError::ConfigParse(err.to_string()))?;

        Self::resolve_config(config)
    }

    pub fn resolve_config(config: Config) -> Result<ResolvedConfig, FetchError> {
        let games_dir = Utf8PathBuf::from(
            config
                .games_dir
                .unwrap_or_else(|| DEFAULT_GAMES_DIR.to_string()),
        );
        let games = match config.games {
            Some(slugs) => slugs
                .iter()
                .map(|slug| slug.parse())
                .collect::<Result<Vec<_>, FetchError>>()?,
            None => builtin_games()?,
        };
        let delay = Duration::from_millis(config.delay_ms.unwrap_or(DEFAULT_DELAY_MS));

        Ok(ResolvedConfig {
            games_dir,
            games,
            delay,
        })
    }
}

pub fn builtin_games() -> Result<Vec<GameSlug>, FetchError> {
    games::GAMES.iter().map(|slug| slug.parse()).collect()
}
