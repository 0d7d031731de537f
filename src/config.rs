use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_USGS_REQUEST_URL: &str = "http://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2014-01-01&endtime=2014-12-01&minmagnitude=7";

const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub usgs_request_url: String,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let usgs_request_url =
            env::var("USGS_REQUEST_URL").unwrap_or_else(|_| DEFAULT_USGS_REQUEST_URL.to_string());
        let connect_timeout_ms = env::var("CONNECT_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_CONNECT_TIMEOUT_MS.to_string())
            .parse()
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS);
        let read_timeout_ms = env::var("READ_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_READ_TIMEOUT_MS.to_string())
            .parse()
            .unwrap_or(DEFAULT_READ_TIMEOUT_MS);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            usgs_request_url,
            connect_timeout_ms,
            read_timeout_ms,
            log_level,
        })
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_millis(self.connect_timeout_ms),
            read: Duration::from_millis(self.read_timeout_ms),
        }
    }
}

/// Network bounds for a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            read: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
        }
    }
}
