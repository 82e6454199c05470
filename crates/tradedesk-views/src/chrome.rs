use tradedesk_models::config::NavLinkConfig;
use tradedesk_models::{AppContext, ChromeFrame, HeaderBar, NavLink, PageId};

/// Builds the side navigation and header that surround a page.
#[derive(Debug, Clone, Default)]
pub struct ChromeBuilder {
    links: Vec<NavLinkConfig>,
}

impl ChromeBuilder {
    pub fn new(links: Vec<NavLinkConfig>) -> Self {
        Self { links }
    }

    pub fn build(&self, pathname: &str, page: Option<PageId>, app: &AppContext) -> ChromeFrame {
        let side_nav = self
            .links
            .iter()
            .map(|link| NavLink {
                label: link.label.clone(),
                href: link.href.clone(),
                active: link.href == pathname,
            })
            .collect();

        ChromeFrame {
            side_nav,
            header: HeaderBar {
                app_title: app.app_title.clone(),
                page_title: page.map(|p| p.title().to_string()),
            },
        }
    }
}
