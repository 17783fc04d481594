use crate::config::Config;
use crate::input::InputManager;
use crate::processing::MatchEngine;
use std::sync::Arc;

/// Shared, read-only state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchEngine>,
    pub input: InputManager,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(engine: MatchEngine, config: Config) -> Self {
        Self {
            engine: Arc::new(engine),
            input: InputManager::from_config(&config.server),
            config: Arc::new(config),
        }
    }
}
