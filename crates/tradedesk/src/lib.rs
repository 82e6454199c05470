//! TradeDesk - navigation shell for a brokerage client.
//!
//! Routes address-bar paths to pages, keeps browser-style history, hands a
//! shared application context to every page, and decides when the layout
//! chrome surrounds a page.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use tradedesk::models::config::ShellConfig;
//!
//! let config = ShellConfig::default();
//! let mut shell = tradedesk::build_shell(&config).unwrap();
//! let screen = shell.navigate("/acct-42/portfolio");
//! assert_eq!(screen.params.get("accountId"), Some("acct-42"));
//! ```

pub use tradedesk_models as models;
pub use tradedesk_router as router;
pub use tradedesk_views as views;

pub mod session;

use anyhow::{Context, Result};
use tradedesk_models::config::ShellConfig;
use tradedesk_views::{NavigationShell, PageRegistry};

/// Load shell configuration from a TOML file, or defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<ShellConfig> {
    let Some(path) = path else {
        return Ok(ShellConfig::default());
    };
    let config_str =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {path}"))?;
    toml::from_str(&config_str).with_context(|| format!("Failed to parse config: {path}"))
}

/// Build a navigation shell with every known page registered.
pub fn build_shell(config: &ShellConfig) -> Result<NavigationShell> {
    let shell = NavigationShell::from_config(config, PageRegistry::with_defaults())?;
    Ok(shell)
}
