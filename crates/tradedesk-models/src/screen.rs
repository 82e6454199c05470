use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::page::PageId;

/// Path parameters captured from the matched URL, keyed by `:name`.
///
/// Values are the literal URL segments: no decoding, no case changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The value of `name` if present and not blank.
    pub fn non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One renderable element of a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Text { text: String },
    Icon { name: String },
    Notice { text: String },
    Form { name: String, fields: Vec<String> },
    Table { name: String, columns: Vec<String> },
}

/// The document a page view renders to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl PageContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Concatenated text of every heading, text and notice block.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text } | Block::Text { text } | Block::Notice { text } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderBar {
    pub app_title: String,
    pub page_title: Option<String>,
}

/// Layout surrounding a page: side navigation and header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChromeFrame {
    pub side_nav: Vec<NavLink>,
    pub header: HeaderBar,
}

/// The result of one navigation: what the shell shows for a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Screen {
    pub pathname: String,
    /// The route pattern that matched, if any.
    pub pattern: Option<String>,
    /// The page rendered. `None` only for an unmatched path with a blank fallback.
    pub page: Option<PageId>,
    pub params: PathParams,
    pub chrome: Option<ChromeFrame>,
    pub content: Option<PageContent>,
}

impl Screen {
    pub fn has_chrome(&self) -> bool {
        self.chrome.is_some()
    }

    pub fn is_matched(&self) -> bool {
        self.pattern.is_some()
    }
}
