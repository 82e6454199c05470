use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ContextConfig;

/// Session-lifetime state handed to every page render.
///
/// Built once when the shell starts. Routes, the shell and pages only read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppContext {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub app_title: String,
    pub attributes: BTreeMap<String, String>,
}

impl AppContext {
    pub fn from_config(config: &ContextConfig) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            app_title: config.app_title.clone(),
            attributes: config.attributes.clone(),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
