//! Dashboard configuration read from the environment

use std::path::PathBuf;
use std::str::FromStr;

use whale_tracker_api::{ApiConfig, ConfigError};

use super::assets::{self, Asset, DEFAULT_ASSET_ID};
use super::state::ControllerSettings;
use super::theme::{THEME_VAR, ThemeKind};

pub const TRADE_LIMIT_VAR: &str = "WHALE_TRADE_LIMIT";
pub const MOVER_LIMIT_VAR: &str = "MARKET_MOVER_LIMIT";
pub const DEFAULT_ASSET_VAR: &str = "WHALE_DEFAULT_ASSET";
pub const LOG_FILE_VAR: &str = "WHALE_LOG_FILE";

const DEFAULT_TRADE_LIMIT: u32 = 10;
const DEFAULT_MOVER_LIMIT: u32 = 5;
const DEFAULT_LOG_FILE: &str = "whale-tracker.log";

/// Everything the binary needs before the first frame
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub trade_limit: u32,
    pub mover_limit: u32,
    pub default_asset: &'static Asset,
    pub theme: ThemeKind,
    /// tracing output goes here; stdout belongs to the TUI
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let settings = ControllerSettings::default();
        Self {
            api: ApiConfig::default(),
            trade_limit: DEFAULT_TRADE_LIMIT,
            mover_limit: DEFAULT_MOVER_LIMIT,
            default_asset: settings.default_asset,
            theme: ThemeKind::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            api: ApiConfig::from_lookup(&lookup)?,
            ..Default::default()
        };
        let value = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        if let Some(raw) = value(TRADE_LIMIT_VAR) {
            config.trade_limit = parse_limit(TRADE_LIMIT_VAR, &raw)?;
        }

        if let Some(raw) = value(MOVER_LIMIT_VAR) {
            config.mover_limit = parse_limit(MOVER_LIMIT_VAR, &raw)?;
        }

        if let Some(raw) = value(DEFAULT_ASSET_VAR) {
            config.default_asset = assets::find_asset(&raw.trim().to_lowercase()).ok_or(
                ConfigError::InvalidValue {
                    key: DEFAULT_ASSET_VAR,
                    value: raw.clone(),
                },
            )?;
        }

        if let Some(raw) = value(THEME_VAR) {
            config.theme = ThemeKind::from_str(&raw)?;
        }

        if let Some(raw) = value(LOG_FILE_VAR) {
            config.log_file = PathBuf::from(raw.trim());
        }

        Ok(config)
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            trade_limit: self.trade_limit,
            mover_limit: self.mover_limit,
            default_asset: self.default_asset,
        }
    }

    pub fn default_asset_id(&self) -> &'static str {
        self.default_asset.id
    }
}

fn parse_limit(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|limit| *limit > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.trade_limit, 10);
        assert_eq!(config.mover_limit, 5);
        assert_eq!(config.default_asset_id(), DEFAULT_ASSET_ID);
        assert_eq!(config.theme, ThemeKind::Midnight);
        assert_eq!(config.log_file, PathBuf::from("whale-tracker.log"));
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("WHALE_API_BASE_URL", "http://localhost:8000"),
            ("WHALE_API_TIMEOUT_SECS", "3"),
            (TRADE_LIMIT_VAR, "25"),
            (MOVER_LIMIT_VAR, " 3 "),
            (DEFAULT_ASSET_VAR, "Solana"),
            (THEME_VAR, "ocean"),
            (LOG_FILE_VAR, "/tmp/whales.log"),
        ]))
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout, Duration::from_secs(3));
        assert_eq!(config.trade_limit, 25);
        assert_eq!(config.mover_limit, 3);
        assert_eq!(config.default_asset.ticker, "SOL");
        assert_eq!(config.theme, ThemeKind::Ocean);
        assert_eq!(config.log_file, PathBuf::from("/tmp/whales.log"));

        let settings = config.controller_settings();
        assert_eq!(settings.trade_limit, 25);
        assert_eq!(settings.mover_limit, 3);
        assert_eq!(settings.default_asset.id, "solana");
    }

    #[test]
    fn test_invalid_values() {
        struct TestCase {
            key: &'static str,
            value: &'static str,
        }

        let tests = vec![
            TestCase {
                // TC0: non-numeric limit
                key: TRADE_LIMIT_VAR,
                value: "many",
            },
            TestCase {
                // TC1: zero limit
                key: MOVER_LIMIT_VAR,
                value: "0",
            },
            TestCase {
                // TC2: unsupported asset
                key: DEFAULT_ASSET_VAR,
                value: "litecoin",
            },
            TestCase {
                // TC3: unknown theme
                key: THEME_VAR,
                value: "neon",
            },
            TestCase {
                // TC4: api timeout errors surface unchanged
                key: "WHALE_API_TIMEOUT_SECS",
                value: "soon",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = DashboardConfig::from_lookup(lookup_from(&[(test.key, test.value)]));
            match actual {
                Err(ConfigError::InvalidValue { key, value }) => {
                    assert_eq!(key, test.key, "TC{} failed", index);
                    assert_eq!(value, test.value, "TC{} failed", index);
                }
                other => panic!("TC{} failed: {:?}", index, other),
            }
        }
    }
}
