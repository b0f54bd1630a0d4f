//! Frame-ready view model derived from [`ViewState`]
//!
//! All formatting happens here so the widgets only lay out strings and
//! pick colours. Building is pure: the same state and `now` always give
//! the same view.

use chrono::{DateTime, Utc};
use whale_tracker_api::{Direction, MarketMover, Statistics, WhaleTrade};

use super::assets::ASSETS;
use super::format::{format_currency, format_percent_change, format_quantity, relative_time};
use super::state::{Phase, ViewState};

/// Sidebar shows at most this many movers
pub const MAX_MOVERS: usize = 5;

pub const LOADING_MESSAGE: &str = "Loading whale activity...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetChip {
    pub ticker: &'static str,
    pub display_name: &'static str,
    pub accent: (u8, u8, u8),
    pub selected: bool,
    /// Digit key selecting this chip
    pub hotkey: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRow {
    pub direction: Direction,
    pub age: String,
    pub symbol: String,
    pub value: String,
    /// `"{quantity} @ ${price}"`
    pub fill: String,
    pub exchange: String,
    pub tx_hash: Option<String>,
}

impl TradeRow {
    fn new(trade: &WhaleTrade, now: DateTime<Utc>) -> Self {
        Self {
            direction: trade.direction,
            age: relative_time(trade.timestamp, now),
            symbol: trade.symbol.clone(),
            value: format_currency(trade.value_usd),
            fill: format!(
                "{} @ ${}",
                format_quantity(trade.quantity),
                format_quantity(trade.price)
            ),
            exchange: trade.exchange.clone(),
            tx_hash: trade.tx_hash.clone(),
        }
    }

    pub fn badge(&self) -> &'static str {
        self.direction.label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    Empty { message: String },
    Trades(Vec<TradeRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoverRow {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    /// `price_change_percent >= 0`
    pub gaining: bool,
}

impl From<&MarketMover> for MoverRow {
    fn from(mover: &MarketMover) -> Self {
        Self {
            symbol: mover.symbol.clone(),
            name: mover.name.clone(),
            price: format!("${}", format_quantity(mover.price)),
            change: format_percent_change(mover.price_change_percent),
            gaining: mover.is_gaining(),
        }
    }
}

/// Example request and docs link for the selected asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStart {
    pub request_url: String,
    pub docs_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub phase: Phase,
    pub selected_ticker: &'static str,
    pub selected_name: &'static str,
    pub chips: Vec<AssetChip>,
    /// Total / average / largest, absent until the server sends statistics
    pub stats: Option<[StatCard; 3]>,
    pub feed: FeedView,
    pub error: Option<String>,
    pub movers: Vec<MoverRow>,
    pub quick_start: Option<QuickStart>,
}

impl DashboardView {
    pub fn build(state: &ViewState, now: DateTime<Utc>) -> Self {
        let chips = ASSETS
            .iter()
            .enumerate()
            .map(|(index, asset)| AssetChip {
                ticker: asset.ticker,
                display_name: asset.display_name,
                accent: asset.accent,
                selected: asset.id == state.selected.id,
                hotkey: index + 1,
            })
            .collect();

        let feed = if state.is_loading() {
            FeedView::Loading
        } else if state.trades.is_empty() {
            FeedView::Empty {
                message: format!("No whale activity detected for {}", state.selected.id),
            }
        } else {
            FeedView::Trades(
                state
                    .trades
                    .iter()
                    .map(|trade| TradeRow::new(trade, now))
                    .collect(),
            )
        };

        let error = match state.phase {
            Phase::Failed => state.error.clone(),
            _ => None,
        };

        Self {
            phase: state.phase,
            selected_ticker: state.selected.ticker,
            selected_name: state.selected.display_name,
            chips,
            stats: state
                .statistics
                .map(|stats| stat_cards(&stats, state.trades.len())),
            feed,
            error,
            movers: state
                .market_movers
                .iter()
                .take(MAX_MOVERS)
                .map(MoverRow::from)
                .collect(),
            quick_start: None,
        }
    }

    pub fn with_quick_start(self, request_url: impl Into<String>, docs_url: impl Into<String>) -> Self {
        Self {
            quick_start: Some(QuickStart {
                request_url: request_url.into(),
                docs_url: docs_url.into(),
            }),
            ..self
        }
    }
}

fn stat_cards(stats: &Statistics, trade_count: usize) -> [StatCard; 3] {
    [
        StatCard {
            label: "Total Volume",
            value: format_currency(stats.total_volume_usd),
            caption: format!("Last {} whales", trade_count),
        },
        StatCard {
            label: "Average Trade",
            value: format_currency(stats.average_trade_usd),
            caption: "Per whale".to_string(),
        },
        StatCard {
            label: "Largest Trade",
            value: format_currency(stats.largest_trade_usd),
            caption: "Biggest whale".to_string(),
        },
    ]
}
