//! Shared application state

use std::sync::Arc;

use hostredirect_shared::HostRedirector;

use crate::config::Config;

/// State handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub redirector: Arc<HostRedirector>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let redirector = Arc::new(config.redirector());
        Self {
            config: Arc::new(config),
            redirector,
        }
    }
}
