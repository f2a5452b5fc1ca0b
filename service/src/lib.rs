use config::Config;
use tokio_util::sync::CancellationToken;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    shutdown: CancellationToken,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self {
            config: app_config,
            shutdown: CancellationToken::new(),
        }
    }

    /// Token cancelled once the server begins shutting down.
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    /// A token scoped to one request. It fires on server shutdown and can be
    /// cancelled on its own without affecting other requests.
    pub fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
