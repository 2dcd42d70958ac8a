//! HTTP rate provider for the `GET /rates?base=<CODE>` endpoint.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use pricelens_common::{from_epoch_millis, is_usable_rate, now, CurrencyCode, FxQuote, QuoteSource};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{FxError, FxResult};
use crate::provider::RateProvider;

/// Wire shape of the rate endpoint body.
#[derive(Debug, Deserialize)]
struct RateTableBody {
    base: String,
    #[serde(default)]
    ts: Option<i64>,
    rates: HashMap<String, f64>,
}

/// Fetches rate tables from a JSON HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpRateProvider {
    /// Create a provider for `endpoint` (the URL prefix before `/rates`).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pricelens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_client(client, endpoint, timeout)
    }

    /// Create a provider around an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    fn url_for(&self, base: &CurrencyCode) -> String {
        format!("{}/rates?base={}", self.endpoint.trim_end_matches('/'), base)
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    fn name(&self) -> &str {
        "HTTP"
    }

    #[instrument(skip_all, fields(base = %base))]
    async fn fetch(&self, base: &CurrencyCode) -> FxResult<FxQuote> {
        let url = self.url_for(base);
        debug!(url = %url, "Requesting rate table");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FxError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    FxError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FxError::Network(format!("failed to read response body: {e}")))?;

        parse_rate_table(&body, base)
    }
}

/// Parse an endpoint body into a quote for `requested`.
pub fn parse_rate_table(body: &str, requested: &CurrencyCode) -> FxResult<FxQuote> {
    let table: RateTableBody =
        serde_json::from_str(body).map_err(|e| FxError::MalformedBody(e.to_string()))?;

    let base = CurrencyCode::new(table.base);
    if &base != requested {
        return Err(FxError::MalformedBody(format!(
            "expected base {requested}, got {base}"
        )));
    }

    let total = table.rates.len();
    let rates: Vec<(CurrencyCode, f64)> = table
        .rates
        .into_iter()
        .filter(|(_, rate)| is_usable_rate(*rate))
        .map(|(code, rate)| (CurrencyCode::new(code), rate))
        .collect();

    if rates.len() < total {
        warn!(
            base = %base,
            dropped = total - rates.len(),
            "Dropped non-finite or non-positive rates"
        );
    }

    if rates.iter().all(|(code, _)| code == &base) {
        return Err(FxError::MalformedBody("empty rate table".to_string()));
    }

    let timestamp = table.ts.and_then(from_epoch_millis).unwrap_or_else(now);

    Ok(FxQuote::new(base, timestamp, rates, QuoteSource::Network))
}
