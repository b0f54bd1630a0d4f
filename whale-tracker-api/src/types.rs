//! Wire types for the whale tracker REST API
//!
//! These match the JSON bodies served under `/api/v1/crypto-whales` and
//! `/api/v1/market-movers`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Direction of a whale trade
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "BUY", alias = "Buy")]
    Buy,
    #[serde(alias = "SELL", alias = "Sell")]
    Sell,
}

impl Direction {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }

    /// Badge label for display
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Direction::Buy)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single large transaction reported by the API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WhaleTrade {
    pub direction: Direction,
    /// Exchange symbol (e.g., "BTCUSDT")
    pub symbol: String,
    /// Execution time
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Notional value in USD
    pub value_usd: f64,
    /// Trade size in base currency
    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// Server-side aggregate over the returned whale trades
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Statistics {
    pub total_volume_usd: f64,
    pub average_trade_usd: f64,
    pub largest_trade_usd: f64,
}

/// An asset ranked by recent price change
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MarketMover {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub price_change_percent: f64,
}

impl MarketMover {
    pub fn is_gaining(&self) -> bool {
        self.price_change_percent >= 0.0
    }
}

/// Successful result of a whale trades fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhaleActivity {
    /// Trades in the order the API returned them
    pub trades: Vec<WhaleTrade>,
    pub statistics: Option<Statistics>,
}

/// Response envelope for `/api/v1/crypto-whales`
#[derive(Debug, Clone, Deserialize)]
pub struct WhaleResponse {
    #[serde(default)]
    pub success: bool,
    pub trades: Option<Vec<WhaleTrade>>,
    pub statistics: Option<Statistics>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Response envelope for `/api/v1/market-movers`
#[derive(Debug, Clone, Deserialize)]
pub struct MarketMoversResponse {
    #[serde(default)]
    pub success: bool,
    pub top_movers: Option<Vec<MarketMover>>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Reason carried by an unsuccessful envelope, falling back to a generic note
pub(crate) fn failure_reason(error: Option<String>, message: Option<String>) -> String {
    error
        .or(message)
        .filter(|reason| !reason.trim().is_empty())
        .unwrap_or_else(|| "success flag was false".to_string())
}

/// Accepts RFC 3339, naive ISO-8601 (read as UTC), or epoch seconds/milliseconds
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let parsed = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => parse_timestamp_str(&text),
        RawTimestamp::Integer(value) => from_epoch(value),
        RawTimestamp::Float(value) if value.is_finite() => {
            // Seconds with a fractional part
            if value.abs() < EPOCH_MILLIS_THRESHOLD as f64 {
                DateTime::from_timestamp_millis((value * 1000.0) as i64)
            } else {
                DateTime::from_timestamp_millis(value as i64)
            }
        }
        RawTimestamp::Float(_) => None,
    };

    parsed.ok_or_else(|| serde::de::Error::custom("invalid trade timestamp"))
}

/// Integers at or above this are treated as milliseconds (~ year 5138 in seconds)
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value.abs() >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

pub(crate) fn parse_timestamp_str(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::Buy.to_string(), "buy");
        assert_eq!(Direction::Sell.label(), "SELL");
        assert!(Direction::Buy.is_buy());
        assert!(!Direction::Sell.is_buy());
    }

    #[test]
    fn test_whale_trade_deserialize() {
        let json = r#"{
            "direction": "sell",
            "symbol": "ETHUSDT",
            "timestamp": "2024-05-01T12:30:00Z",
            "value_usd": 812345.5,
            "quantity": 250.125,
            "price": 3247.75,
            "exchange": "binance",
            "tx_hash": "0xabc"
        }"#;

        let trade: WhaleTrade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.direction, Direction::Sell);
        assert_eq!(trade.symbol, "ETHUSDT");
        assert_eq!(
            trade.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
        );
        assert_eq!(trade.exchange, "binance");
        assert_eq!(trade.tx_hash.as_deref(), Some("0xabc"));
    }

    #[test]
    fn test_timestamp_formats() {
        struct TestCase {
            input: &'static str,
            expected: DateTime<Utc>,
        }

        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let tests = vec![
            TestCase {
                // TC0: RFC 3339 with offset
                input: r#""2024-05-01T14:30:00+02:00""#,
                expected,
            },
            TestCase {
                // TC1: naive ISO-8601 is read as UTC
                input: r#""2024-05-01T12:30:00""#,
                expected,
            },
            TestCase {
                // TC2: naive ISO-8601 with fractional seconds
                input: r#""2024-05-01T12:30:00.000""#,
                expected,
            },
            TestCase {
                // TC3: epoch seconds
                input: "1714566600",
                expected,
            },
            TestCase {
                // TC4: epoch milliseconds
                input: "1714566600000",
                expected,
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let json = format!(
                r#"{{"direction":"buy","symbol":"BTCUSDT","timestamp":{},"value_usd":1.0,"quantity":1.0,"price":1.0}}"#,
                test.input
            );
            let trade: WhaleTrade = serde_json::from_str(&json).unwrap();
            assert_eq!(trade.timestamp, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let json = r#"{"direction":"buy","symbol":"BTCUSDT","timestamp":"yesterday","value_usd":1.0,"quantity":1.0,"price":1.0}"#;
        assert!(serde_json::from_str::<WhaleTrade>(json).is_err());
    }

    #[test]
    fn test_market_mover_gaining() {
        let mover: MarketMover = serde_json::from_str(
            r#"{"symbol":"SOL","name":"Solana","price":142.5,"price_change_percent":-3.2}"#,
        )
        .unwrap();
        assert!(!mover.is_gaining());

        let flat = MarketMover {
            price_change_percent: 0.0,
            ..mover
        };
        assert!(flat.is_gaining());
    }

    #[test]
    fn test_failure_reason_fallback() {
        assert_eq!(failure_reason(Some("bad crypto".into()), None), "bad crypto");
        assert_eq!(failure_reason(None, Some("try later".into())), "try later");
        assert_eq!(failure_reason(Some("  ".into()), None), "success flag was false");
    }
}
