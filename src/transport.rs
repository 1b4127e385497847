use async_trait::async_trait;
use tracing::debug;

use crate::error::AskResult;

/// Network seam between the requester and the answering backend
#[async_trait]
pub trait AnswerTransport: Send + Sync {
    /// Issues a single GET and returns the body text, whatever the status
    async fn get(&self, path_and_query: &str) -> AskResult<String>;
}

/// Transport backed by a `reqwest` client and a fixed base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> AskResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, path_and_query: &str) -> String {
        join_url(&self.base_url, path_and_query)
    }
}

#[async_trait]
impl AnswerTransport for HttpTransport {
    async fn get(&self, path_and_query: &str) -> AskResult<String> {
        let url = self.url_for(path_and_query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        debug!("Received response status: {}", response.status());

        let body = response.text().await?;
        debug!("Response body: {}", body);
        Ok(body)
    }
}

/// Joins a base URL and an absolute path without doubling the slash
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
