use super::embedded::EmbeddedSession;
use super::remote::RemoteSession;
use super::types::ConnectionMode;
use super::Session;
use crate::config::{AppConfig, DEFAULT_APP_NAME};
use crate::error::Result;

/// Fluent construction of a [`Session`].
///
/// Without `remote(..)` the builder yields an embedded engine; with it, a
/// session opened on the given connect server.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    app_name: String,
    remote_url: Option<String>,
    target_partitions: Option<usize>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            remote_url: None,
            target_partitions: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the mode from configuration: remote when `IS_BOLT` asked for it.
    pub fn from_config(config: &AppConfig) -> Self {
        let builder = Self::new()
            .app_name(&config.app_name)
            .target_partitions(config.target_partitions);

        match config.mode {
            ConnectionMode::Remote => builder.remote(&config.connect_url),
            ConnectionMode::Embedded => builder,
        }
    }

    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    pub fn remote(mut self, url: &str) -> Self {
        self.remote_url = Some(url.to_string());
        self
    }

    /// Ignored in remote mode; the server decides its own parallelism.
    pub fn target_partitions(mut self, partitions: Option<usize>) -> Self {
        self.target_partitions = partitions;
        self
    }

    pub fn mode(&self) -> ConnectionMode {
        if self.remote_url.is_some() {
            ConnectionMode::Remote
        } else {
            ConnectionMode::Embedded
        }
    }

    pub async fn get_or_create(self) -> Result<Session> {
        match self.remote_url {
            Some(url) => {
                tracing::info!("Creating remote connect session at {}", url);
                let session = RemoteSession::connect(&self.app_name, &url).await?;
                Ok(Session::Remote(session))
            }
            None => {
                tracing::info!("Creating embedded engine session");
                let session = EmbeddedSession::new(&self.app_name, self.target_partitions);
                Ok(Session::Embedded(session))
            }
        }
    }
}
