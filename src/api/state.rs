use crate::ai::TokenCounter;
use crate::core::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub counter: TokenCounter,
}

impl AppState {
    pub fn new(config: AppConfig, counter: TokenCounter) -> Self {
        Self { config, counter }
    }
}
