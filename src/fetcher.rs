use crate::config::Timeouts;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, info, warn};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("timed out waiting for {url}: {source}")]
    Timeout { url: String, source: reqwest::Error },

    #[error("could not connect to {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("could not build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    fn classify(url: &Url, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            FetchError::Timeout { url, source }
        } else if source.is_connect() {
            FetchError::Connect { url, source }
        } else {
            FetchError::Transport { url, source }
        }
    }
}

/// Anything that can hand the pipeline one response body.
#[async_trait]
pub trait BodySource: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Performs exactly one GET per call against a fixed endpoint.
///
/// Idle connections are never pooled: each call dials a fresh socket and the
/// socket is closed once its response is consumed or dropped.
pub struct RemoteFetcher {
    url: Option<Url>,
    client: reqwest::Client,
}

impl RemoteFetcher {
    pub fn new(url: &str, timeouts: Timeouts) -> Result<Self, FetchError> {
        let url = match Url::parse(url) {
            Ok(u) => Some(upgrade_scheme(&u)),
            Err(e) => {
                error!("Error with creating URL '{}': {}", url, e);
                None
            }
        };

        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .redirect(reqwest::redirect::Policy::default())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self { url, client })
    }

    /// The URL that will actually be requested, after the scheme upgrade.
    pub fn effective_url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    async fn fetch_from(&self, url: &Url) -> Result<String, FetchError> {
        info!("Requesting {}", url);

        // The response owns the connection; every return below drops it.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        match response.status() {
            StatusCode::OK => response
                .text()
                .await
                .map_err(|e| FetchError::classify(url, e)),
            StatusCode::BAD_REQUEST => {
                warn!("HTTP 400 error returned. Malformed request.");
                Ok(String::new())
            }
            status => {
                warn!("Unexpected HTTP status {} from {}, treating as empty body", status, url);
                Ok(String::new())
            }
        }
    }
}

#[async_trait]
impl BodySource for RemoteFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        match &self.url {
            Some(url) => self.fetch_from(url).await,
            None => {
                warn!("No URL available, skipping fetch");
                Ok(String::new())
            }
        }
    }
}

/// Rewrites `http` to `https`, leaving host, port, path and query untouched.
pub fn upgrade_scheme(url: &Url) -> Url {
    if url.scheme() != "http" {
        return url.clone();
    }

    let raw = url.as_str();
    match Url::parse(&format!("https{}", &raw["http".len()..])) {
        Ok(upgraded) => {
            debug!("Upgraded {} to {}", raw, upgraded);
            upgraded
        }
        Err(e) => {
            warn!("Could not upgrade {} to https: {}", raw, e);
            url.clone()
        }
    }
}
