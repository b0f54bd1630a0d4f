//! Whale tracker API client
//!
//! Two read-only GET endpoints, no retry, no caching. Response bodies are
//! decoded by pure functions so the envelope rules can be exercised
//! without a network.

use crate::config::ApiConfig;
use crate::error::{ConfigError, FetchError};
use crate::types::{
    failure_reason, MarketMover, MarketMoversResponse, WhaleActivity, WhaleResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

/// Whale trades endpoint, relative to the base URL
pub const WHALES_PATH: &str = "api/v1/crypto-whales";

/// Market movers endpoint, relative to the base URL
pub const MARKET_MOVERS_PATH: &str = "api/v1/market-movers";

const DOCS_PATH: &str = "docs";

/// Read access to the whale tracker service
#[async_trait]
pub trait WhaleApi: Send + Sync {
    /// Latest whale trades for `asset_id` plus the server's statistics snapshot
    async fn fetch_whale_trades(
        &self,
        asset_id: &str,
        limit: u32,
    ) -> Result<WhaleActivity, FetchError>;

    /// Top market movers, in the order ranked by the server
    async fn fetch_market_movers(&self, limit: u32) -> Result<Vec<MarketMover>, FetchError>;
}

/// reqwest-backed [`WhaleApi`]
#[derive(Debug, Clone)]
pub struct WhaleApiClient {
    client: Client,
    base_url: Url,
    whales_endpoint: Url,
    movers_endpoint: Url,
    docs_url: Url,
}

impl WhaleApiClient {
    /// Build a client, validating the base URL up front
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&config.base_url)?;
        let join = |path: &str| {
            base_url
                .join(path)
                .map_err(|e| ConfigError::InvalidBaseUrl {
                    url: config.base_url.clone(),
                    reason: e.to_string(),
                })
        };
        let whales_endpoint = join(WHALES_PATH)?;
        let movers_endpoint = join(MARKET_MOVERS_PATH)?;
        let docs_url = join(DOCS_PATH)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            whales_endpoint,
            movers_endpoint,
            docs_url,
        })
    }

    /// Get the normalised base URL (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Interactive API documentation
    pub fn docs_url(&self) -> &Url {
        &self.docs_url
    }

    /// Full request URL for a whale trades fetch
    pub fn whale_trades_url(&self, asset_id: &str, limit: u32) -> Url {
        let mut url = self.whales_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("crypto", asset_id)
            .append_pair("limit", &limit.to_string());
        url
    }

    /// Full request URL for a market movers fetch
    pub fn market_movers_url(&self, limit: u32) -> Url {
        let mut url = self.movers_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        url
    }

    async fn get_body(&self, url: Url) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl WhaleApi for WhaleApiClient {
    #[instrument(skip(self))]
    async fn fetch_whale_trades(
        &self,
        asset_id: &str,
        limit: u32,
    ) -> Result<WhaleActivity, FetchError> {
        let url = self.whale_trades_url(asset_id, limit);
        debug!("Fetching whale trades from: {}", url);

        let body = self.get_body(url).await?;
        let activity = decode_whale_response(&body)?;

        debug!("Received {} whale trades for {}", activity.trades.len(), asset_id);
        Ok(activity)
    }

    #[instrument(skip(self))]
    async fn fetch_market_movers(&self, limit: u32) -> Result<Vec<MarketMover>, FetchError> {
        let url = self.market_movers_url(limit);
        debug!("Fetching market movers from: {}", url);

        let body = self.get_body(url).await?;
        decode_market_movers_response(&body)
    }
}

/// Parse and normalise a base URL so endpoint paths join beneath it
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be a base".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Decode a `/crypto-whales` body, turning `success: false` into [`FetchError::Api`]
pub fn decode_whale_response(body: &str) -> Result<WhaleActivity, FetchError> {
    let response: WhaleResponse = serde_json::from_str(body)?;

    if !response.success {
        return Err(FetchError::Api(failure_reason(
            response.error,
            response.message,
        )));
    }

    let trades = response
        .trades
        .ok_or_else(|| FetchError::Api("response missing trades".to_string()))?;

    Ok(WhaleActivity {
        trades,
        statistics: response.statistics,
    })
}

/// Decode a `/market-movers` body; a successful body without `top_movers` is empty
pub fn decode_market_movers_response(body: &str) -> Result<Vec<MarketMover>, FetchError> {
    let response: MarketMoversResponse = serde_json::from_str(body)?;

    if !response.success {
        return Err(FetchError::Api(failure_reason(
            response.error,
            response.message,
        )));
    }

    Ok(response.top_movers.unwrap_or_default())
}
