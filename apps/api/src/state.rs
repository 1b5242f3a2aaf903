use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{CompatibilityScorer, RuleBasedScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable compatibility scorer. Default: RuleBasedScorer built from `config.scoring`.
    pub scorer: Arc<dyn CompatibilityScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(RuleBasedScorer::new(config.scoring.clone()));
        Self { config, scorer }
    }
}
