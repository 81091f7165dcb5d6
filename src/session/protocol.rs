//! Connect Protocol
//!
//! Endpoints and Data Transfer Objects exchanged between a remote session and
//! the connect server. Everything is JSON over HTTP.

use super::types::QueryResult;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Opens a server-side session and returns its id.
pub const ENDPOINT_OPEN: &str = "/session/open";
/// Loads a single-column table into a session.
pub const ENDPOINT_CREATE_TABLE: &str = "/session/table";
/// Runs a SQL statement inside a session.
pub const ENDPOINT_SQL: &str = "/session/sql";
/// Drops a session and everything registered in it.
pub const ENDPOINT_CLOSE: &str = "/session/close";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenSessionRequest {
    pub app_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenSessionResponse {
    pub session_id: String,
}

/// Ships local rows to the server, like building a DataFrame from a
/// driver-side collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTableRequest {
    pub session_id: String,
    pub table: String,
    pub column: String,
    pub rows: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTableResponse {
    pub row_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SqlRequest {
    pub session_id: String,
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SqlResponse {
    pub result: QueryResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CloseSessionRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CloseSessionResponse {
    /// False when the session id was unknown (already closed or never opened).
    pub closed: bool,
}

/// Body of every non-2xx reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
