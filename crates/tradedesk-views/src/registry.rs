use std::collections::HashMap;
use std::sync::Arc;

use tradedesk_models::PageId;

use crate::error::ViewError;
use crate::pages::{
    LoginPage, MarketPage, NotFoundPage, PortfolioPage, TransactionDetailsPage,
    TransactionHistoryPage,
};
use crate::placeholder::PlaceholderPage;
use crate::view::PageView;

/// Maps page ids to the views that render them.
#[derive(Default, Clone)]
pub struct PageRegistry {
    views: HashMap<PageId, Arc<dyn PageView>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a view for every known page. Backlog pages get placeholders.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LoginPage));
        registry.register(Arc::new(TransactionHistoryPage));
        registry.register(Arc::new(TransactionDetailsPage));
        registry.register(Arc::new(PortfolioPage));
        registry.register(Arc::new(MarketPage));
        registry.register(Arc::new(PlaceholderPage::order_history()));
        registry.register(Arc::new(NotFoundPage));
        for page in PageId::BACKLOG {
            registry.register(Arc::new(PlaceholderPage::coming_soon(page)));
        }
        registry
    }

    /// Register a view under the page it reports, replacing any previous one.
    pub fn register(&mut self, view: Arc<dyn PageView>) {
        self.views.insert(view.page(), view);
    }

    pub fn get(&self, page: PageId) -> Option<&Arc<dyn PageView>> {
        self.views.get(&page)
    }

    pub fn require(&self, page: PageId) -> Result<&Arc<dyn PageView>, ViewError> {
        self.get(page).ok_or(ViewError::UnregisteredPage(page))
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.views.contains_key(&page)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
