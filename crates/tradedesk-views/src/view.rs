use tradedesk_models::{AppContext, PageContent, PageId, PathParams};

/// Everything a page may read while rendering.
///
/// The shared context is passed in explicitly rather than looked up.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub pathname: &'a str,
    pub params: &'a PathParams,
    pub app: &'a AppContext,
}

/// A renderable page bound to one or more routes.
pub trait PageView: Send + Sync {
    fn page(&self) -> PageId;

    fn render(&self, ctx: &ViewContext<'_>) -> PageContent;
}
