use std::collections::HashSet;

use tradedesk_models::config::{ChromeConfig, ChromeMode};

/// Decides whether the layout frame surrounds the page for a pathname.
///
/// Under `PathGated` membership is exact string equality: `/wallet/` and
/// `/Wallet` do not show chrome when only `/wallet` is listed, and no
/// parameterized path ever does.
#[derive(Debug, Clone)]
pub struct ChromePolicy {
    mode: ChromeMode,
    paths: HashSet<String>,
}

impl ChromePolicy {
    pub fn new(mode: ChromeMode, paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            mode,
            paths: paths.into_iter().collect(),
        }
    }

    pub fn from_config(config: &ChromeConfig) -> Self {
        Self::new(config.mode, config.paths.iter().cloned())
    }

    pub fn mode(&self) -> ChromeMode {
        self.mode
    }

    pub fn shows_chrome(&self, pathname: &str) -> bool {
        match self.mode {
            ChromeMode::PathGated => self.paths.contains(pathname),
            ChromeMode::Always => true,
            ChromeMode::Never => false,
        }
    }
}
