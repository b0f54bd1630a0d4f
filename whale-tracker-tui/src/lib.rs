/// Whale Tracker TUI - Shared Library
///
/// This library backs the `whale-tracker` binary:
/// - asset catalogue and themes
/// - display formatters for currency, quantities and trade age
/// - the view-state controller driving fetches through `WhaleApi`
/// - a pure view model plus ratatui widgets rendering it
pub mod shared;

// Re-export commonly used types for convenience
pub use shared::assets::{ASSETS, Asset, DEFAULT_ASSET_ID, find_asset};
pub use shared::config::DashboardConfig;
pub use shared::format::{
    format_currency, format_percent_change, format_quantity, relative_time, time_ago,
};
pub use shared::input::{Command, command_for_key};
pub use shared::state::{
    ControllerSettings, DashboardController, DashboardError, FetchOutcome, Phase, RequestId,
    ViewState, WHALE_LOAD_ERROR,
};
pub use shared::theme::{Theme, ThemeKind};
pub use shared::view::{DashboardView, FeedView, QuickStart};
pub use shared::widget::render_dashboard;
