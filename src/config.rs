//! Application configuration.
//!
//! Centralizes the constants of the browser host. Engine constants (eager
//! mount count, error delay, breakpoints) live in `pagekit_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Name shown in the header when the site configuration has none.
pub const APP_NAME: &str = "pagekit";

// =============================================================================
// Network Configuration
// =============================================================================

/// Location of the served site configuration.
pub const SITE_CONFIG_URL: &str = "/site.json";

/// Base URL widgets are fetched from (`{base}/{id}.json`).
pub const WIDGETS_BASE_URL: &str = "/widgets";

/// Endpoint of the eligibility evaluator.
pub const EVALUATOR_ENDPOINT: &str = "/api/check-conditions";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// Allowed domains for external call-to-action links.
/// Links to other domains will be blocked.
pub const ALLOWED_REDIRECT_DOMAINS: &[&str] = &[
    "github.com",
    "twitter.com",
    "x.com",
    "discord.gg",
    "discord.com",
    "etherscan.io",
    "opensea.io",
    "basescan.org",
    "polygonscan.com",
    "mirror.xyz",
    "youtube.com",
    "youtu.be",
    "vimeo.com",
];

// =============================================================================
// Wallet Configuration
// =============================================================================

/// localStorage key for wallet session persistence.
pub const WALLET_SESSION_KEY: &str = "wallet_session";

/// Wallet connection timeout in milliseconds.
pub const WALLET_TIMEOUT_MS: i32 = 2000;

/// Ethereum address display constants.
pub mod eth_address {
    /// Full length of a hex address including `0x`.
    pub const FULL_LEN: usize = 42;
    /// Characters kept at the start of a shortened address.
    pub const PREFIX_LEN: usize = 6;
    /// Index the shortened suffix starts at.
    pub const SUFFIX_START: usize = 38;
}

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the site configuration.
    pub const SITE_CONFIG_KEY: &str = "site_config_cache";
    /// sessionStorage key prefix for widget definitions.
    pub const WIDGET_KEY_PREFIX: &str = "widget_cache.";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
