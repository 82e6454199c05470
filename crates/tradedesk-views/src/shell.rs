use std::sync::Arc;

use tracing::{debug, info};
use tradedesk_models::config::{FallbackMode, ShellConfig};
use tradedesk_models::{AppContext, PageId, PathParams, Screen};
use tradedesk_router::{ChromePolicy, History, Location, RouteTable};

use crate::chrome::ChromeBuilder;
use crate::context::ContextProvider;
use crate::error::ViewError;
use crate::registry::PageRegistry;
use crate::view::ViewContext;

/// The navigation shell: route table, history, shared context and chrome.
///
/// Every navigation re-matches synchronously and always yields a `Screen`;
/// an unmatched path renders the configured fallback instead of failing.
pub struct NavigationShell {
    table: RouteTable,
    chrome: ChromePolicy,
    chrome_builder: ChromeBuilder,
    registry: PageRegistry,
    context: Arc<AppContext>,
    fallback: FallbackMode,
    history: History,
}

impl NavigationShell {
    /// Build a shell from config with a fresh shared context.
    pub fn from_config(config: &ShellConfig, registry: PageRegistry) -> Result<Self, ViewError> {
        let provider = ContextProvider::from_config(&config.context);
        Self::new(config, registry, provider.handle())
    }

    /// Build a shell around an existing shared context.
    ///
    /// Fails if a route, or the NotFound fallback, names a page the registry
    /// cannot render.
    pub fn new(
        config: &ShellConfig,
        registry: PageRegistry,
        context: Arc<AppContext>,
    ) -> Result<Self, ViewError> {
        let table = RouteTable::from_config(&config.routing)?;

        for route in table.routes() {
            registry.require(route.page)?;
        }
        if config.routing.fallback == FallbackMode::NotFound {
            registry.require(PageId::NotFound)?;
        }

        info!(
            routes = table.len(),
            chrome = ?config.chrome.mode,
            fallback = ?config.routing.fallback,
            "Navigation shell ready"
        );

        Ok(Self {
            table,
            chrome: ChromePolicy::from_config(&config.chrome),
            chrome_builder: ChromeBuilder::new(config.chrome.links.clone()),
            registry,
            context,
            fallback: config.routing.fallback,
            history: History::new(config.history.max_entries),
        })
    }

    /// Render an href without touching history.
    pub fn render(&self, href: &str) -> Screen {
        self.render_location(&Location::parse(href))
    }

    /// Push a new history entry and render it.
    pub fn navigate(&mut self, href: &str) -> Screen {
        let location = Location::parse(href);
        self.history.push(location.clone());
        info!(href = %location, "Navigate");
        self.render_location(&location)
    }

    /// Replace the current history entry and render it.
    pub fn replace(&mut self, href: &str) -> Screen {
        let location = Location::parse(href);
        self.history.replace(location.clone());
        info!(href = %location, "Replace");
        self.render_location(&location)
    }

    /// Step back in history. `None` when already at the oldest entry.
    pub fn back(&mut self) -> Option<Screen> {
        let location = self.history.back()?.location.clone();
        info!(href = %location, "Back");
        Some(self.render_location(&location))
    }

    /// Step forward in history. `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<Screen> {
        let location = self.history.forward()?.location.clone();
        info!(href = %location, "Forward");
        Some(self.render_location(&location))
    }

    /// Re-render the current history entry, if any.
    pub fn current(&self) -> Option<Screen> {
        self.history
            .current()
            .map(|entry| self.render_location(&entry.location))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    pub fn context(&self) -> &Arc<AppContext> {
        &self.context
    }

    fn render_location(&self, location: &Location) -> Screen {
        let pathname = location.pathname.as_str();

        let (pattern, page, params) = match self.table.resolve(pathname) {
            Some(m) => (Some(m.route.pattern.to_string()), Some(m.route.page), m.params),
            None => {
                info!(pathname, fallback = ?self.fallback, "No route matched");
                let page = match self.fallback {
                    FallbackMode::NotFound => Some(PageId::NotFound),
                    FallbackMode::Blank => None,
                };
                (None, page, PathParams::new())
            }
        };

        let content = page.and_then(|p| self.registry.get(p)).map(|view| {
            view.render(&ViewContext {
                pathname,
                params: &params,
                app: &self.context,
            })
        });

        let chrome = self
            .chrome
            .shows_chrome(pathname)
            .then(|| self.chrome_builder.build(pathname, page, &self.context));

        debug!(
            pathname,
            pattern = pattern.as_deref().unwrap_or("-"),
            page = ?page,
            params = params.len(),
            chrome = chrome.is_some(),
            "Resolved location"
        );

        Screen {
            pathname: pathname.to_string(),
            pattern,
            page,
            params,
            chrome,
            content,
        }
    }
}
