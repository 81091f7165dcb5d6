//! Remote engine session.
//!
//! Talks to a `wordcount-connect` server. The server owns the DataFusion context;
//! this side only ships rows and SQL text and receives materialized results.

use super::protocol::*;
use super::types::QueryResult;
use crate::error::{Result, WordCountError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const OPEN_ATTEMPTS: usize = 5;
const OPEN_TIMEOUT: Duration = Duration::from_secs(5);
const QUERY_TIMEOUT: Duration = Duration::from_secs(300);

pub struct RemoteSession {
    app_name: String,
    base_url: String,
    session_id: String,
    http_client: reqwest::Client,
}

impl RemoteSession {
    /// Opens a session on the connect server at `url`.
    ///
    /// Accepts `sc://host:port`, `http(s)://host:port` or a bare `host:port`.
    pub async fn connect(app_name: &str, url: &str) -> Result<Self> {
        let base_url = normalize_connect_url(url);
        let http_client = reqwest::Client::new();

        let response = post_with_retry(
            &http_client,
            format!("{}{}", base_url, ENDPOINT_OPEN),
            &OpenSessionRequest {
                app_name: app_name.to_string(),
            },
            OPEN_TIMEOUT,
            OPEN_ATTEMPTS,
        )
        .await?;
        let opened: OpenSessionResponse = decode(response).await?;

        tracing::info!(
            session_id = %opened.session_id,
            endpoint = %base_url,
            "Opened remote session"
        );

        Ok(Self {
            app_name: app_name.to_string(),
            base_url,
            session_id: opened.session_id,
            http_client,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    pub async fn create_dataframe(
        &self,
        table: &str,
        column: &str,
        rows: &[String],
    ) -> Result<usize> {
        let request = CreateTableRequest {
            session_id: self.session_id.clone(),
            table: table.to_string(),
            column: column.to_string(),
            rows: rows.to_vec(),
        };
        let response: CreateTableResponse = self.post(ENDPOINT_CREATE_TABLE, &request).await?;
        Ok(response.row_count)
    }

    pub async fn sql(&self, query: &str) -> Result<QueryResult> {
        let request = SqlRequest {
            session_id: self.session_id.clone(),
            query: query.to_string(),
        };
        let response: SqlResponse = self.post(ENDPOINT_SQL, &request).await?;
        Ok(response.result)
    }

    /// Releases the server-side session.
    pub async fn close(&self) -> Result<bool> {
        let request = CloseSessionRequest {
            session_id: self.session_id.clone(),
        };
        let response: CloseSessionResponse = self.post(ENDPOINT_CLOSE, &request).await?;
        Ok(response.closed)
    }

    async fn post<Req, Resp>(&self, endpoint: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, endpoint))
            .json(payload)
            .timeout(QUERY_TIMEOUT)
            .send()
            .await?;
        decode(response).await
    }
}

/// Turns a connect string into the HTTP base URL of the server.
pub fn normalize_connect_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some(rest) = trimmed.strip_prefix("https://") {
        return format!("https://{}", authority(rest));
    }

    let rest = trimmed
        .strip_prefix("sc://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    format!("http://{}", authority(rest))
}

// Connect strings may carry `/;key=value` parameters after the authority.
fn authority(rest: &str) -> &str {
    rest.split(['/', ';']).next().unwrap_or(rest)
}

async fn post_with_retry<T: Serialize>(
    client: &reqwest::Client,
    url: String,
    payload: &T,
    timeout: Duration,
    attempts: usize,
) -> Result<reqwest::Response> {
    let mut delay_ms = 150u64;

    for attempt in 0..attempts {
        let response = client
            .post(url.clone())
            .json(payload)
            .timeout(timeout)
            .send()
            .await;

        match response {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                if attempt + 1 == attempts {
                    return Err(WordCountError::Connect(e));
                }
                tracing::warn!(
                    "Connect attempt {}/{} to {} failed: {}",
                    attempt + 1,
                    attempts,
                    url,
                    e
                );
                let jitter = rand::random::<u64>() % 50;
                tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                delay_ms = (delay_ms * 2).min(1200);
            }
        }
    }

    Err(WordCountError::Remote {
        status: 0,
        message: "retry attempts exhausted".to_string(),
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);

    Err(WordCountError::Remote {
        status: status.as_u16(),
        message,
    })
}
