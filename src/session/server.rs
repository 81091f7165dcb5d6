//! Connect server state.
//!
//! Holds one embedded engine session per connected client, keyed by a UUID
//! handed out when the client opens the session.

use super::embedded::EmbeddedSession;
use super::handlers::*;
use super::protocol::*;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};
use dashmap::DashMap;
use std::sync::Arc;

/// Upper bound on a request body. A whole corpus travels in one `CreateTableRequest`.
pub const MAX_REQUEST_BYTES: usize = 1024 * 1024 * 1024;

pub struct SessionRegistry {
    sessions: DashMap<String, EmbeddedSession>,
    target_partitions: Option<usize>,
}

impl SessionRegistry {
    pub fn new(target_partitions: Option<usize>) -> Arc<Self> {
        Arc::new(Self {
            sessions: DashMap::new(),
            target_partitions,
        })
    }

    pub fn open(&self, app_name: &str) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        let session = EmbeddedSession::new(app_name, self.target_partitions);
        self.sessions.insert(session_id.clone(), session);

        tracing::info!("Opened session {} for app '{}'", session_id, app_name);
        session_id
    }

    /// Returns a handle to the session. The handle shares the engine context,
    /// so the map guard is not held across query execution.
    pub fn get(&self, session_id: &str) -> Option<EmbeddedSession> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    pub fn close(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id);
        if let Some((_, session)) = &removed {
            tracing::info!(
                "Closed session {} for app '{}'",
                session_id,
                session.app_name()
            );
        }
        removed.is_some()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

pub fn router(registry: Arc<SessionRegistry>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_OPEN, post(handle_open_session))
        .route(ENDPOINT_CREATE_TABLE, post(handle_create_table))
        .route(ENDPOINT_SQL, post(handle_sql))
        .route(ENDPOINT_CLOSE, post(handle_close_session))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(Extension(registry))
}
