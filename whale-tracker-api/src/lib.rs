/// Whale Tracker API
///
/// Client-side access to the crypto whale tracker REST service:
/// - wire types for whale trades, statistics and market movers
/// - `WhaleApi` trait so consumers can swap the HTTP client for a stub
/// - `WhaleApiClient`, the reqwest implementation
/// - error and configuration types shared with the terminal dashboard
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{
    MARKET_MOVERS_PATH, WHALES_PATH, WhaleApi, WhaleApiClient, decode_market_movers_response,
    decode_whale_response, parse_base_url,
};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, FetchError, FetchErrorKind};
pub use types::{Direction, MarketMover, Statistics, WhaleActivity, WhaleTrade};
