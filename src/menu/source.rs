use anyhow::{Context, Error, Result};
use async_trait::async_trait;

use super::schedule::{Schedule, parse};

/// Where the raw menu sheet comes from.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_csv(&self) -> Result<String, Error>;

    /// Fetches and parses the sheet. Nothing is cached, every call
    /// hits the source again.
    async fn schedule(&self) -> Result<Schedule, Error> {
        let raw = self.fetch_csv().await?;
        Ok(parse(&raw))
    }
}

/// The CSV export of a published spreadsheet.
pub struct SheetCsvSource {
    url: String,
}

impl SheetCsvSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl MenuSource for SheetCsvSource {
    async fn fetch_csv(&self) -> Result<String, Error> {
        tracing::debug!("Fetching menu sheet from {}", self.url);

        let resp = reqwest::Client::new()
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch menu sheet from {}", self.url))?
            .error_for_status()?;

        let body = resp.text().await?;
        Ok(body)
    }
}
