//! View state and the controller driving whale / market mover fetches
//!
//! Fetches run as tokio tasks and report back on an mpsc channel. The
//! owner of the [`DashboardController`] drains completions between input
//! events, so [`ViewState`] is only ever mutated from one place.
//!
//! Every whale fetch is tagged with a [`RequestId`]. Only the most recently
//! issued id may update the state; slower responses to earlier requests are
//! dropped, so the view always reflects the latest *requested* asset.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use whale_tracker_api::{FetchError, MarketMover, Statistics, WhaleActivity, WhaleApi, WhaleTrade};

use super::assets::{self, ASSETS, Asset};

/// User-facing message for any failed whale fetch
pub const WHALE_LOAD_ERROR: &str = "failed to load whale activity";

/// Lifecycle of the whale trade feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// A whale fetch is outstanding
    Loading,
    /// Last fetch succeeded
    Loaded,
    /// Last fetch failed; previous trades are still held
    Failed,
}

/// Monotonic tag for a whale fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub selected: &'static Asset,
    pub phase: Phase,
    /// Last successfully fetched trades, in API order
    pub trades: Vec<WhaleTrade>,
    pub statistics: Option<Statistics>,
    pub market_movers: Vec<MarketMover>,
    /// Set by a failed whale fetch, cleared by the next success
    pub error: Option<String>,
}

impl ViewState {
    pub fn new(selected: &'static Asset) -> Self {
        Self {
            selected,
            phase: Phase::Idle,
            trades: Vec::new(),
            statistics: None,
            market_movers: Vec::new(),
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    fn begin_whale_fetch(&mut self, asset: &'static Asset) {
        self.selected = asset;
        self.phase = Phase::Loading;
    }

    fn apply_whales(&mut self, result: Result<WhaleActivity, FetchError>) {
        match result {
            Ok(activity) => {
                self.trades = activity.trades;
                self.statistics = activity.statistics;
                self.error = None;
                self.phase = Phase::Loaded;
            }
            Err(_) => {
                // Keep the last good trades and statistics on screen
                self.error = Some(WHALE_LOAD_ERROR.to_string());
                self.phase = Phase::Failed;
            }
        }
    }

    fn apply_market_movers(&mut self, result: Result<Vec<MarketMover>, FetchError>) {
        self.market_movers = result.unwrap_or_default();
    }
}

/// Limits and initial selection for a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// `limit` sent with every whale fetch
    pub trade_limit: u32,
    /// `limit` sent with the start-up market movers fetch
    pub mover_limit: u32,
    pub default_asset: &'static Asset,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            trade_limit: 10,
            mover_limit: 5,
            default_asset: &ASSETS[0],
        }
    }
}

/// Completion message posted by a fetch task
#[derive(Debug)]
pub enum FetchOutcome {
    Whales {
        request: RequestId,
        asset_id: &'static str,
        result: Result<WhaleActivity, FetchError>,
    },
    MarketMovers(Result<Vec<MarketMover>, FetchError>),
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DashboardError {
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    #[error("no asset at position {0}")]
    AssetIndex(usize),
}

/// Owns the [`ViewState`] and issues fetches against a [`WhaleApi`]
///
/// Fetch methods spawn onto the current tokio runtime.
pub struct DashboardController {
    api: Arc<dyn WhaleApi>,
    settings: ControllerSettings,
    state: ViewState,
    next_request: u64,
    latest_request: Option<RequestId>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn WhaleApi>, settings: ControllerSettings) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            api,
            settings,
            state: ViewState::new(settings.default_asset),
            next_request: 0,
            latest_request: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Id of the whale fetch allowed to update the state
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Initial load: whale trades for the default asset plus one market movers fetch
    pub fn start(&mut self) -> RequestId {
        info!(
            "Starting dashboard with {} (trade limit {}, mover limit {})",
            self.settings.default_asset.id, self.settings.trade_limit, self.settings.mover_limit
        );
        let request = self.fetch_whales(self.settings.default_asset);
        self.fetch_market_movers();
        request
    }

    /// Switch to `id` and fetch its whale trades
    pub fn select_asset(&mut self, id: &str) -> Result<RequestId, DashboardError> {
        let asset =
            assets::find_asset(id).ok_or_else(|| DashboardError::UnknownAsset(id.to_string()))?;
        Ok(self.fetch_whales(asset))
    }

    /// Switch to the asset at `index` in the selector
    pub fn select_index(&mut self, index: usize) -> Result<RequestId, DashboardError> {
        let asset = ASSETS.get(index).ok_or(DashboardError::AssetIndex(index))?;
        Ok(self.fetch_whales(asset))
    }

    pub fn select_next(&mut self) -> RequestId {
        let asset = assets::cycle_asset(self.state.selected.id, 1);
        self.fetch_whales(asset)
    }

    pub fn select_previous(&mut self) -> RequestId {
        let asset = assets::cycle_asset(self.state.selected.id, -1);
        self.fetch_whales(asset)
    }

    /// Re-fetch the currently selected asset
    pub fn refresh(&mut self) -> RequestId {
        self.fetch_whales(self.state.selected)
    }

    fn fetch_whales(&mut self, asset: &'static Asset) -> RequestId {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.latest_request = Some(request);
        self.state.begin_whale_fetch(asset);

        debug!("Requesting whale trades for {} ({})", asset.id, request);

        let api = Arc::clone(&self.api);
        let outcome_tx = self.outcome_tx.clone();
        let limit = self.settings.trade_limit;
        tokio::spawn(async move {
            let result = api.fetch_whale_trades(asset.id, limit).await;
            let _ = outcome_tx.send(FetchOutcome::Whales {
                request,
                asset_id: asset.id,
                result,
            });
        });

        request
    }

    fn fetch_market_movers(&mut self) {
        let api = Arc::clone(&self.api);
        let outcome_tx = self.outcome_tx.clone();
        let limit = self.settings.mover_limit;
        tokio::spawn(async move {
            let result = api.fetch_market_movers(limit).await;
            let _ = outcome_tx.send(FetchOutcome::MarketMovers(result));
        });
    }

    /// Fold a completion into the state; returns whether anything changed
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Whales {
                request,
                asset_id,
                result,
            } => {
                if self.latest_request != Some(request) {
                    warn!(
                        "Discarding whale response {} for {}, superseded by {:?}",
                        request, asset_id, self.latest_request
                    );
                    return false;
                }

                match &result {
                    Ok(activity) => info!(
                        "Loaded {} whale trades for {} ({})",
                        activity.trades.len(),
                        asset_id,
                        request
                    ),
                    Err(e) => warn!("Whale fetch for {} failed ({}): {}", asset_id, request, e),
                }
                self.state.apply_whales(result);
                true
            }
            FetchOutcome::MarketMovers(result) => {
                match &result {
                    Ok(movers) => info!("Loaded {} market movers", movers.len()),
                    // Sidebar is best-effort; no user-visible error
                    Err(e) => warn!("Market movers fetch failed: {}", e),
                }
                self.state.apply_market_movers(result);
                true
            }
        }
    }

    /// Apply every completion already queued; returns whether anything changed
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Wait for the next completion and apply it
    pub async fn process_next(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => self.apply(outcome),
            None => false,
        }
    }
}
