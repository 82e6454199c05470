use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed href: the part of a URL the router cares about.
///
/// Routing and chrome decisions only ever look at `pathname`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    /// Parse an href such as `/market?tab=stocks#order`.
    ///
    /// A missing leading `/` is added. No decoding is applied.
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        let (rest, hash) = match href.find('#') {
            Some(i) => (&href[..i], &href[i..]),
            None => (href, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        let pathname = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            pathname,
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}
