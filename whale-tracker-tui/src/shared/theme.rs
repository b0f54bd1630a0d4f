//! Colour palettes for the dashboard
//!
//! One layout, several palettes. `Midnight` is the default dark variant.

use std::str::FromStr;

use ratatui::style::Color;
use whale_tracker_api::ConfigError;

/// Environment variable selecting the initial theme
pub const THEME_VAR: &str = "WHALE_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Midnight,
    Light,
    Ocean,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Midnight, ThemeKind::Light, ThemeKind::Ocean];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Midnight => "midnight",
            ThemeKind::Light => "light",
            ThemeKind::Ocean => "ocean",
        }
    }

    /// Next theme in toggle order
    pub fn next(&self) -> Self {
        match self {
            ThemeKind::Midnight => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Ocean,
            ThemeKind::Ocean => ThemeKind::Midnight,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Midnight => Theme {
                kind: *self,
                background: Color::Rgb(15, 23, 42),
                text: Color::Rgb(220, 220, 220),
                bright: Color::White,
                dim: Color::Rgb(120, 120, 120),
                accent: Color::Rgb(96, 165, 250),
                border: Color::Rgb(59, 130, 246),
                highlight: Color::Rgb(30, 58, 138),
                buy: Color::Rgb(100, 220, 100),
                sell: Color::Rgb(220, 100, 100),
                warning: Color::Rgb(180, 180, 100),
            },
            ThemeKind::Light => Theme {
                kind: *self,
                background: Color::Rgb(248, 250, 252),
                text: Color::Rgb(30, 41, 59),
                bright: Color::Black,
                dim: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(37, 99, 235),
                border: Color::Rgb(148, 163, 184),
                highlight: Color::Rgb(219, 234, 254),
                buy: Color::Rgb(22, 163, 74),
                sell: Color::Rgb(220, 38, 38),
                warning: Color::Rgb(202, 138, 4),
            },
            ThemeKind::Ocean => Theme {
                kind: *self,
                background: Color::Rgb(8, 47, 73),
                text: Color::Rgb(186, 230, 253),
                bright: Color::Rgb(240, 249, 255),
                dim: Color::Rgb(56, 120, 160),
                accent: Color::Rgb(34, 211, 238),
                border: Color::Rgb(14, 165, 233),
                highlight: Color::Rgb(12, 74, 110),
                buy: Color::Rgb(45, 212, 191),
                sell: Color::Rgb(251, 113, 133),
                warning: Color::Rgb(253, 224, 71),
            },
        }
    }
}

impl FromStr for ThemeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ThemeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: THEME_VAR,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolved palette handed to the widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: Color,
    pub text: Color,
    pub bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    /// Background of the selected asset chip
    pub highlight: Color,
    pub buy: Color,
    pub sell: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::default().theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("midnight".parse::<ThemeKind>().unwrap(), ThemeKind::Midnight);
        assert_eq!(" Light ".parse::<ThemeKind>().unwrap(), ThemeKind::Light);
        assert_eq!("OCEAN".parse::<ThemeKind>().unwrap(), ThemeKind::Ocean);
        assert!("neon".parse::<ThemeKind>().is_err());
    }

    #[test]
    fn test_theme_cycle_visits_all() {
        let mut kind = ThemeKind::default();
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::ALL.len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
        assert_eq!(seen, ThemeKind::ALL.to_vec());
    }

    #[test]
    fn test_palettes_distinguish_direction() {
        for kind in ThemeKind::ALL {
            let theme = kind.theme();
            assert_eq!(theme.kind, kind);
            assert_ne!(theme.buy, theme.sell, "{} buy/sell collide", kind);
        }
    }
}
