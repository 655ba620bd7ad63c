use super::{parse_events, FallbackSource};
use crate::models::event::Event;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Fetches the fallback event array over HTTPS, once, without retries
pub struct HttpFallback {
    client: Client,
    url: String,
    max_response_bytes: usize,
}

impl HttpFallback {
    pub fn new(url: &str) -> Result<Self> {
        if !url.starts_with("https://") {
            return Err(anyhow!("Fallback URL must use HTTPS"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build fallback HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
            max_response_bytes: 2 * 1024 * 1024,
        })
    }
}

impl FallbackSource for HttpFallback {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<Event>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .context("Network error during fallback fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Fallback fetch failed with HTTP status {}", status));
        }

        let bytes = response
            .bytes()
            .context("Failed to read fallback response body")?;

        if bytes.len() > self.max_response_bytes {
            return Err(anyhow!(
                "Fallback response too large ({} bytes > {} bytes)",
                bytes.len(),
                self.max_response_bytes
            ));
        }

        let content =
            String::from_utf8(bytes.to_vec()).context("Fallback response is not valid UTF-8")?;
        parse_events(&content)
    }
}
