use std::sync::Arc;

use tracing::info;
use tradedesk_models::config::ContextConfig;
use tradedesk_models::AppContext;

/// Owns the shared application context for the life of the session.
///
/// Consumers receive a read-only `Arc<AppContext>` handle.
#[derive(Debug, Clone)]
pub struct ContextProvider {
    context: Arc<AppContext>,
}

impl ContextProvider {
    pub fn new(context: AppContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        let context = AppContext::from_config(config);
        info!(
            session_id = %context.session_id,
            attributes = context.attributes.len(),
            "Application context created"
        );
        Self::new(context)
    }

    pub fn handle(&self) -> Arc<AppContext> {
        Arc::clone(&self.context)
    }
}
