//! HTTP GET with redirect following.
//!
//! The crawler only ever sees the [`PageFetcher`] trait; [`HttpFetcher`] is
//! the reqwest-backed implementation used by the binary.

use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "monografias-crawler/0.1";
pub const MAX_REDIRECTS: usize = 10;

/// A page that answered with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    /// URL after redirects; relative links on the page resolve against it.
    pub final_url: String,
    pub body: String,
}

impl FetchedPage {
    pub fn ok(final_url: impl Into<String>, body: impl Into<String>) -> Self {
        Self { status: 200, final_url: final_url.into(), body: body.into() }
    }

    /// Whether the response came from a different URL than `requested`.
    pub fn redirected(&self, requested: &str) -> bool {
        match (Url::parse(requested), Url::parse(&self.final_url)) {
            (Ok(a), Ok(b)) => a != b,
            _ => requested != self.final_url,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("{url} answered with status {status}")]
    HttpStatus { url: String, status: u16 },
}

#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Without `timeout` a request waits as long as the transport does.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent).redirect(Policy::limited(MAX_REDIRECTS));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport { url: url.to_string(), reason: e.to_string() };

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        let final_url = resp.url().to_string();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus { url: final_url, status: status.as_u16() });
        }
        let body = resp.text().await.map_err(transport)?;

        let page = FetchedPage { status: status.as_u16(), final_url, body };
        if page.redirected(url) {
            tracing::info!(requested = url, final_url = %page.final_url, "redirect detected");
        }
        Ok(page)
    }
}
