use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the navigation shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellConfig {
    pub routing: RoutingConfig,
    pub chrome: ChromeConfig,
    pub history: HistoryConfig,
    pub context: ContextConfig,
}

/// What to render when no route matches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// Render the NotFound page.
    #[default]
    NotFound,
    /// Render no page content at all.
    Blank,
}

/// How to treat a route that an earlier route makes unreachable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShadowPolicy {
    /// Log a warning and keep the route.
    #[default]
    Warn,
    /// Refuse to register the route.
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RoutingConfig {
    pub fallback: FallbackMode,
    pub shadowing: ShadowPolicy,
    /// Backlog route keys to enable, appended after the active routes in this order.
    pub backlog: Vec<String>,
}

/// When the layout frame (side navigation + header) surrounds a page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChromeMode {
    /// Only for pathnames in the allow-list (exact, case- and slash-sensitive).
    #[default]
    PathGated,
    /// Around every page, as a persistent layout.
    Always,
    Never,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLinkConfig {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChromeConfig {
    pub mode: ChromeMode,
    /// Pathnames that show chrome under `ChromeMode::PathGated`.
    pub paths: Vec<String>,
    /// Side navigation entries.
    pub links: Vec<NavLinkConfig>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        let link = |label: &str, href: &str| NavLinkConfig {
            label: label.to_string(),
            href: href.to_string(),
        };
        Self {
            mode: ChromeMode::PathGated,
            paths: vec![
                "/home".to_string(),
                "/wallet".to_string(),
                "/support".to_string(),
                "/setting".to_string(),
            ],
            links: vec![
                link("Home", "/home"),
                link("Market", "/market"),
                link("Order History", "/order-history"),
                link("Transactions", "/transaction-history"),
                link("Wallet", "/wallet"),
                link("Support", "/support"),
                link("Settings", "/setting"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of history entries kept. Oldest entries are dropped first.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 100 }
    }
}

/// Seed values for the shared application context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContextConfig {
    pub app_title: String,
    pub attributes: BTreeMap<String, String>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            app_title: "TradeDesk".to_string(),
            attributes: BTreeMap::new(),
        }
    }
}
