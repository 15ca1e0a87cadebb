//! Resilient vendor API client.
//!
//! The vendor intermittently answers 404/5xx under load; a bounded,
//! progressively delayed retry absorbs those blips without an unbounded
//! loop. Transport and sleeping are injected so the retry policy runs
//! deterministically under test, without real timers or sockets.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::AuthSession;
use async_trait::async_trait;
use std::time::Duration;

/// Retries after the first attempt; 6 attempts in total.
pub const MAX_RETRIES: u32 = 5;
/// Linear backoff step: 300, 600, 900, 1200, 1500 ms.
pub const BACKOFF_STEP_MS: u64 = 300;
const SNIPPET_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The register flow cares about 202 (asynchronous acceptance: the
    /// write is not yet reflected by subsequent GETs).
    pub fn accepted_async(&self) -> bool {
        self.status == 202
    }

    pub fn json(&self) -> AppResult<serde_json::Value> {
        serde_json::from_str(&self.body).map_err(|e| AppError::BadResponse(e.to_string()))
    }
}

/// One HTTP exchange. `Err` is a transport-level failure (DNS, refused
/// connection, timeout); an HTTP error response is an `Ok` with its
/// status, the two are classified differently by the retry loop.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, String>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, String> {
        let mut builder = match req.method {
            Method::Get => self.http.get(&req.url),
            Method::Post => self.http.post(&req.url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        let res = builder.send().await.map_err(|e| e.to_string())?;
        let status = res.status().as_u16();
        // an unreadable body still carries the status; snippet stays empty
        let body = res.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
pub trait Sleep: Send + Sync {
    async fn sleep(&self, dur: Duration);
}

pub struct TokioSleep;

#[async_trait]
impl Sleep for TokioSleep {
    async fn sleep(&self, dur: Duration) {
        tokio::time::sleep(dur).await;
    }
}

pub struct ApiClient {
    base: String,
    auth: Option<AuthSession>,
    transport: Box<dyn Transport>,
    sleep: Box<dyn Sleep>,
}

impl ApiClient {
    pub fn new(cfg: &Config, auth: Option<AuthSession>) -> Self {
        Self::with_transport(
            &cfg.api_base,
            auth,
            Box::new(ReqwestTransport::new(Duration::from_secs(
                cfg.request_timeout_secs,
            ))),
            Box::new(TokioSleep),
        )
    }

    /// Build a client over explicit transport/sleep implementations.
    pub fn with_transport(
        base: &str,
        auth: Option<AuthSession>,
        transport: Box<dyn Transport>,
        sleep: Box<dyn Sleep>,
    ) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            auth,
            transport,
            sleep,
        }
    }

    pub fn auth(&self) -> Option<&AuthSession> {
        self.auth.as_ref()
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        if let Some(auth) = &self.auth {
            headers.push(("access-token".to_string(), auth.token.clone()));
            headers.push(("client".to_string(), auth.client.clone()));
            headers.push(("uid".to_string(), auth.uid.clone()));
        }
        headers
    }

    pub async fn get(&self, path: &str) -> AppResult<ApiResponse> {
        self.dispatch(ApiRequest {
            method: Method::Get,
            url: format!("{}{}", self.base, path),
            headers: self.auth_headers(),
            body: None,
        })
        .await
    }

    pub async fn post(&self, path: &str, body: serde_json::Value) -> AppResult<ApiResponse> {
        self.dispatch(ApiRequest {
            method: Method::Post,
            url: format!("{}{}", self.base, path),
            headers: self.auth_headers(),
            body: Some(body),
        })
        .await
    }

    /// Absolute-URL request with caller-supplied headers; the register
    /// flow posts to the relay proxy with its own header set.
    pub async fn send_raw(&self, req: ApiRequest) -> AppResult<ApiResponse> {
        self.dispatch(req).await
    }

    /// Bounded retry loop. Status 404 and ≥500 retry (the vendor's known
    /// transient failures); any other error status fails immediately.
    /// Transport failures retry under the same policy. The terminal error
    /// carries the last status and a ≤200-char body snippet.
    async fn dispatch(&self, req: ApiRequest) -> AppResult<ApiResponse> {
        let mut last = AppError::Transport("request was never attempted".to_string());
        for retry in 0..=MAX_RETRIES {
            if retry > 0 {
                self.sleep
                    .sleep(Duration::from_millis(BACKOFF_STEP_MS * u64::from(retry)))
                    .await;
            }
            match self.transport.send(&req).await {
                Ok(res) if res.is_success() => return Ok(res),
                Ok(res) => {
                    let retryable = res.status == 404 || res.status >= 500;
                    let err = AppError::HttpStatus {
                        status: res.status,
                        snippet: snippet(&res.body),
                    };
                    if !retryable {
                        return Err(err);
                    }
                    tracing::warn!(
                        status = res.status,
                        url = %req.url,
                        retry,
                        max = MAX_RETRIES,
                        "transient http failure"
                    );
                    last = err;
                }
                Err(e) => {
                    tracing::warn!(error = %e, url = %req.url, retry, max = MAX_RETRIES, "transport failure");
                    last = AppError::Transport(e);
                }
            }
        }
        Err(last)
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_LEN).collect()
}
