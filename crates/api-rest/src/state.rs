//! Application state and dependency injection.

use chirp_common::AppConfig;
use chirp_infrastructure::UserRepository;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,
    /// Signup persistence
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create state from a configuration and a user repository
    pub fn new(config: AppConfig, users: Arc<dyn UserRepository>) -> Self {
        Self {
            config: Arc::new(config),
            users,
        }
    }
}
