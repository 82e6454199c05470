use thiserror::Error;
use tradedesk_models::PageId;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("No view registered for page: {0:?}")]
    UnregisteredPage(PageId),

    #[error("Router error: {0}")]
    Router(#[from] tradedesk_router::RouterError),
}
