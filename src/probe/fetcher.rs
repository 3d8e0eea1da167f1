//! HTTP seam used by probe workers.
//!
//! Workers only need the status code of a GET. The [`Fetcher`] trait keeps
//! the retry loop independent of reqwest so it can be driven by scripted
//! responses in tests.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::HttpConfig;

/// Transport-level failure of a single GET.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be built. Not retryable.
    #[error("invalid request: {0}")]
    Request(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Every transport error is retried except a request that could not be
    /// built (e.g. a malformed base URL), which fails the same way on each
    /// attempt and is reported at once as `TransportFailure`.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::Request(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let message = e.to_string();
        if e.is_builder() {
            FetchError::Request(message)
        } else if e.is_timeout() {
            FetchError::Timeout(message)
        } else if e.is_connect() {
            FetchError::Connect(message)
        } else {
            FetchError::Other(message)
        }
    }
}

/// Issues a GET and reports the response status.
///
/// Implementations must release the response (body included) before
/// returning.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch_status(&self, url: &str) -> impl Future<Output = Result<u16, FetchError>> + Send;
}

/// [`Fetcher`] backed by a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch_status(&self, url: &str) -> Result<u16, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        // Body is never read; dropping the response releases the connection.
        drop(response);
        Ok(status)
    }
}
