use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::consts::REVIEW_PATH;
use crate::protocol::{ReviewRequest, ReviewResponse};

/// How the console reaches a gateway.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// POST one review request and return the feedback text.
    async fn request_review(&self, request: &ReviewRequest) -> Result<String>;
}

/// Talks to a running gateway over HTTP.
pub struct HttpGatewayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGatewayClient {
    /// `base_url` is the gateway root, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), REVIEW_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn request_review(&self, request: &ReviewRequest) -> Result<String> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .with_context(|| format!("failed to reach gateway at {}", self.endpoint))?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let detail = match serde_json::from_str::<ReviewResponse>(&text) {
                Ok(ReviewResponse::Error { error }) => error,
                _ => text,
            };
            bail!("gateway error ({}): {}", status, detail);
        }

        match serde_json::from_str::<ReviewResponse>(&text)
            .context("failed to decode gateway response")?
        {
            ReviewResponse::Feedback { feedback } => Ok(feedback),
            ReviewResponse::Error { error } => bail!("gateway error ({}): {}", status, error),
        }
    }
}

/// A scripted gateway for tests. Returns pre-defined replies in order
/// and records every request it receives.
pub struct MockGatewayClient {
    replies: Vec<Result<String, String>>,
    index: AtomicUsize,
    requests: Mutex<Vec<ReviewRequest>>,
}

impl MockGatewayClient {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<ReviewRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GatewayClient for MockGatewayClient {
    async fn request_review(&self, request: &ReviewRequest) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.get(i).ok_or_else(|| {
            anyhow::anyhow!("MockGatewayClient: no more replies (called {} times)", i + 1)
        })?;
        match reply {
            Ok(feedback) => Ok(feedback.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}
