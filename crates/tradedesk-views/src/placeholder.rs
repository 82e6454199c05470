use tradedesk_models::{Block, PageContent, PageId};

use crate::view::{PageView, ViewContext};

/// A static "coming soon" page: title, explanation, icon and notice.
///
/// Has no data dependencies and ignores params and context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPage {
    page: PageId,
    title: String,
    description: String,
    icon: String,
    notice: String,
}

impl PlaceholderPage {
    pub fn new(
        page: PageId,
        description: impl Into<String>,
        icon: impl Into<String>,
        notice: impl Into<String>,
    ) -> Self {
        Self {
            page,
            title: page.title().to_string(),
            description: description.into(),
            icon: icon.into(),
            notice: notice.into(),
        }
    }

    pub fn order_history() -> Self {
        Self::new(
            PageId::OrderHistory,
            "This page will display a history of all your stock orders.",
            "file-text",
            "Order history functionality is coming soon!",
        )
    }

    /// Generic placeholder for a backlog destination.
    pub fn coming_soon(page: PageId) -> Self {
        let title = page.title();
        Self::new(
            page,
            format!("The {title} page is planned but not yet available."),
            "clock",
            format!("{title} functionality is coming soon!"),
        )
    }
}

impl PageView for PlaceholderPage {
    fn page(&self) -> PageId {
        self.page
    }

    fn render(&self, _ctx: &ViewContext<'_>) -> PageContent {
        PageContent::new(self.title.clone())
            .with(Block::Heading {
                text: self.title.clone(),
            })
            .with(Block::Text {
                text: self.description.clone(),
            })
            .with(Block::Icon {
                name: self.icon.clone(),
            })
            .with(Block::Notice {
                text: self.notice.clone(),
            })
    }
}
