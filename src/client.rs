//! Blocking HTTP transport for the napchart snapshot API.
//!
//! Two single-shot operations: [`NapchartClient::upload`] posts a chart
//! document to `createSnapshot` and returns the shareable link;
//! [`NapchartClient::import`] fetches `getChart/{id}` and rebuilds the
//! in-memory [`Chart`]. There is no retry loop and no partial result:
//! each call is exactly one HTTP exchange.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT,
};
use tracing::debug;

use crate::error::{NapchartError, NapchartResult};
use crate::model::Chart;
use crate::wire::{GetChartResponse, SnapshotResponse};

const DEFAULT_BASE_URL: &str = "https://api.napchart.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// The napchart API serves browsers; requests carry a desktop-Chrome header
// set so snapshots behave the same as ones created through the site.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.149 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base URL (no trailing slash), e.g. for tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Synchronous napchart API client. Cheap to clone; connection reuse is
/// handled by the underlying pool.
#[derive(Debug, Clone)]
pub struct NapchartClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl NapchartClient {
    pub fn new(config: ClientConfig) -> NapchartResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .default_headers(fixed_headers())
            .build()?;
        Ok(Self { config, http })
    }

    /// Client against the production napchart API with default settings.
    pub fn default_client() -> NapchartResult<Self> {
        Self::new(ClientConfig::default())
    }

    /// Publishes the chart as a snapshot and returns its public link.
    ///
    /// Any non-200 response fails with [`NapchartError::UploadFailed`]
    /// carrying the status and the raw body verbatim. Connection-level
    /// failures surface as [`NapchartError::Http`].
    pub fn upload(&self, chart: &Chart) -> NapchartResult<String> {
        let url = format!("{}/createSnapshot", self.config.base_url);
        let document = chart.to_document();
        debug!(url = %url, elements = chart.elements().len(), "uploading chart snapshot");

        let response = self.http.post(&url).json(&document).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(NapchartError::UploadFailed {
                status: status.as_u16(),
                body: response.text()?,
            });
        }
        let snapshot: SnapshotResponse = response.json()?;
        debug!(link = %snapshot.public_link, "chart snapshot created");
        Ok(snapshot.public_link)
    }

    /// Fetches the chart with the given public id (the trailing segment of
    /// its napchart.com URL) and reconstructs the in-memory model.
    pub fn import(&self, id: &str) -> NapchartResult<Chart> {
        let url = format!("{}/getChart/{id}", self.config.base_url);
        debug!(url = %url, "importing chart");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(NapchartError::ImportFailed {
                status: status.as_u16(),
                body: response.text()?,
            });
        }
        let envelope: GetChartResponse = response.json()?;
        let chart = Chart::from_document(&envelope.chart_document)?;
        debug!(
            elements = chart.elements().len(),
            lanes = chart.lanes_count(),
            "chart imported"
        );
        Ok(chart)
    }
}

fn fixed_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB,en;q=0.9"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers
}
