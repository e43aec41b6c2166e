//! Binance 24h ticker client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::application::errors::MarketError;
use crate::domain::entities::StatsSnapshot;
use crate::domain::traits::MarketData;

/// Path of the 24h rolling window ticker
const TICKER_24H_PATH: &str = "/api/v3/ticker/24hr";

/// Client-level request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Binance public market data client
#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MarketError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarketError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn ticker_url(&self) -> String {
        format!("{}{}", self.base_url, TICKER_24H_PATH)
    }
}

#[async_trait]
impl MarketData for BinanceClient {
    async fn fetch_stats(&self, symbol: &str) -> Result<StatsSnapshot, MarketError> {
        let response = self
            .client
            .get(self.ticker_url())
            .query(&[("symbol", symbol)])
            .send()
            .await
            .map_err(|e| MarketError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Ticker request for {} failed with {}: {}", symbol, status, body);
            return Err(MarketError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MarketError::Decode(e.to_string()))?;

        parse_ticker(&body)
    }
}

/// Turn a 24h ticker payload into a snapshot.
/// `lastPrice` is checked first: without it the payload is not a ticker at all.
pub fn parse_ticker(body: &Value) -> Result<StatsSnapshot, MarketError> {
    let obj = body
        .as_object()
        .ok_or_else(|| MarketError::Decode(format!("expected a JSON object, got {}", body)))?;

    let price = number_field(obj, "lastPrice")?;
    let high = number_field(obj, "highPrice")?;
    let low = number_field(obj, "lowPrice")?;
    let change = number_field(obj, "priceChangePercent")?;

    StatsSnapshot::new(price, high, low, change).map_err(|e| MarketError::InvalidNumber {
        field: e.field,
        value: e.value.to_string(),
    })
}

/// Binance sends decimals as strings; plain numbers are accepted too
fn number_field(obj: &Map<String, Value>, field: &'static str) -> Result<f64, MarketError> {
    let value = obj.get(field).ok_or(MarketError::MissingField(field))?;

    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(MarketError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}
