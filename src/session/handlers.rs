use super::embedded::EmbeddedSession;
use super::protocol::*;
use super::server::SessionRegistry;

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn lookup(
    registry: &SessionRegistry,
    session_id: &str,
) -> Result<EmbeddedSession, HandlerError> {
    registry.get(session_id).ok_or_else(|| {
        tracing::warn!("Request for unknown session {}", session_id);
        error(
            StatusCode::NOT_FOUND,
            format!("unknown session: {}", session_id),
        )
    })
}

pub async fn handle_health(
    Extension(registry): Extension<Arc<SessionRegistry>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "sessions": registry.session_count(),
    }))
}

pub async fn handle_open_session(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Json(req): Json<OpenSessionRequest>,
) -> (StatusCode, Json<OpenSessionResponse>) {
    let session_id = registry.open(&req.app_name);
    (StatusCode::CREATED, Json(OpenSessionResponse { session_id }))
}

pub async fn handle_create_table(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Json(req): Json<CreateTableRequest>,
) -> Result<Json<CreateTableResponse>, HandlerError> {
    let session = lookup(&registry, &req.session_id)?;

    match session
        .create_dataframe(&req.table, &req.column, &req.rows)
        .await
    {
        Ok(row_count) => Ok(Json(CreateTableResponse { row_count })),
        Err(e) => {
            tracing::error!("Failed to create table '{}': {}", req.table, e);
            Err(error(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

pub async fn handle_sql(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Json(req): Json<SqlRequest>,
) -> Result<Json<SqlResponse>, HandlerError> {
    let session = lookup(&registry, &req.session_id)?;

    match session.sql(&req.query).await {
        Ok(result) => {
            tracing::debug!(
                "Session {} query returned {} rows",
                req.session_id,
                result.num_rows()
            );
            Ok(Json(SqlResponse { result }))
        }
        Err(e) => {
            tracing::error!("Query failed in session {}: {}", req.session_id, e);
            Err(error(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

pub async fn handle_close_session(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Json(req): Json<CloseSessionRequest>,
) -> Json<CloseSessionResponse> {
    let closed = registry.close(&req.session_id);
    Json(CloseSessionResponse { closed })
}
