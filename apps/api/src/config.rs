use std::path::Path;

use anyhow::{Context, Result};

use crate::matching::config::{PreferenceMatching, ScoringConfig};

/// Application configuration loaded from environment variables.
/// Fails at startup if a provided value is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut scoring = match std::env::var("SCORING_CONFIG_PATH") {
            Ok(path) => load_scoring_file(Path::new(&path))?,
            Err(_) => ScoringConfig::default(),
        };
        apply_scoring_overrides(&mut scoring, |key| std::env::var(key).ok())?;
        scoring
            .validate()
            .context("Invalid scoring configuration")?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// Reads a JSON scoring config; keys it omits keep their defaults.
pub fn load_scoring_file(path: &Path) -> Result<ScoringConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scoring config '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scoring config '{}'", path.display()))
}

/// Applies `EXCHANGE_RATE`, `WORLD_SENTINELS` and `PREFERENCE_MATCHING` on top
/// of the file/default values.
pub fn apply_scoring_overrides<F>(scoring: &mut ScoringConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(rate) = lookup("EXCHANGE_RATE") {
        scoring.exchange_rate = rate
            .trim()
            .parse::<f64>()
            .context("EXCHANGE_RATE must be a number")?;
    }
    if let Some(sentinels) = lookup("WORLD_SENTINELS") {
        scoring.world_sentinels = sentinels
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(mode) = lookup("PREFERENCE_MATCHING") {
        scoring.preference_matching = mode
            .parse::<PreferenceMatching>()
            .map_err(anyhow::Error::msg)
            .context("PREFERENCE_MATCHING must be 'exact' or 'substring'")?;
    }
    Ok(())
}
