//! Supported cryptocurrencies shown in the asset selector

/// A selectable cryptocurrency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Stable id sent as the `crypto` query parameter
    pub id: &'static str,
    pub display_name: &'static str,
    pub ticker: &'static str,
    /// Brand colour as RGB
    pub accent: (u8, u8, u8),
}

pub const DEFAULT_ASSET_ID: &str = "bitcoin";

pub static ASSETS: [Asset; 5] = [
    Asset {
        id: "bitcoin",
        display_name: "Bitcoin",
        ticker: "BTC",
        accent: (0xF7, 0x93, 0x1A),
    },
    Asset {
        id: "ethereum",
        display_name: "Ethereum",
        ticker: "ETH",
        accent: (0x62, 0x7E, 0xEA),
    },
    Asset {
        id: "bnb",
        display_name: "BNB",
        ticker: "BNB",
        accent: (0xF3, 0xBA, 0x2F),
    },
    Asset {
        id: "solana",
        display_name: "Solana",
        ticker: "SOL",
        accent: (0x14, 0xF1, 0x95),
    },
    Asset {
        id: "dogecoin",
        display_name: "Dogecoin",
        ticker: "DOGE",
        accent: (0xC2, 0xA6, 0x33),
    },
];

/// Look up an asset by id
pub fn find_asset(id: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.id == id)
}

/// Position of an asset in the selector
pub fn asset_index(id: &str) -> Option<usize> {
    ASSETS.iter().position(|asset| asset.id == id)
}

/// Asset `step` places away from `id`, wrapping at both ends
pub fn cycle_asset(id: &str, step: isize) -> &'static Asset {
    let len = ASSETS.len() as isize;
    let current = asset_index(id).unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(len) as usize;
    &ASSETS[next]
}
