//! Engine Session Module
//!
//! The single point of contact with the DataFrame engine (Apache DataFusion).
//!
//! ## Connection Modes
//! - **Embedded**: a `SessionContext` lives in this process and executes queries
//!   across its own partitions.
//! - **Remote**: the engine lives in a `wordcount-connect` server; the session
//!   ships rows and SQL over HTTP and receives materialized results.
//!
//! Callers only see [`Session`], so the pipeline is identical in both modes.
//!
//! ## Submodules
//! - **`builder`**: `SessionBuilder`, which chooses the mode.
//! - **`embedded`**: the in-process engine.
//! - **`remote`**: the HTTP client side.
//! - **`server`** / **`handlers`**: the connect server hosting remote sessions.
//! - **`protocol`**: endpoints and DTOs shared by client and server.
//! - **`types`**: `ConnectionMode` and the engine-neutral `QueryResult`.

pub mod builder;
pub mod embedded;
pub mod handlers;
pub mod protocol;
pub mod remote;
pub mod server;
pub mod types;


use crate::error::Result;
use builder::SessionBuilder;
use embedded::EmbeddedSession;
use remote::RemoteSession;
use types::{ConnectionMode, QueryResult};

pub enum Session {
    Embedded(EmbeddedSession),
    Remote(RemoteSession),
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn mode(&self) -> ConnectionMode {
        match self {
            Session::Embedded(_) => ConnectionMode::Embedded,
            Session::Remote(_) => ConnectionMode::Remote,
        }
    }

    pub fn app_name(&self) -> &str {
        match self {
            Session::Embedded(s) => s.app_name(),
            Session::Remote(s) => s.app_name(),
        }
    }

    /// Loads `rows` as a one-column table named `table` and returns its row count.
    pub async fn create_dataframe(
        &self,
        table: &str,
        column: &str,
        rows: &[String],
    ) -> Result<usize> {
        match self {
            Session::Embedded(s) => s.create_dataframe(table, column, rows).await,
            Session::Remote(s) => s.create_dataframe(table, column, rows).await,
        }
    }

    pub async fn sql(&self, query: &str) -> Result<QueryResult> {
        match self {
            Session::Embedded(s) => s.sql(query).await,
            Session::Remote(s) => s.sql(query).await,
        }
    }

    /// Releases engine resources. Remote sessions are closed on the server.
    pub async fn stop(self) -> Result<()> {
        match self {
            Session::Embedded(_) => Ok(()),
            Session::Remote(s) => {
                if !s.close().await? {
                    tracing::warn!(
                        "Remote session {} at {} was already closed",
                        s.session_id(),
                        s.endpoint()
                    );
                }
                Ok(())
            }
        }
    }
}
