use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Route {pattern} is unreachable: shadowed by earlier route {shadowed_by}")]
    Shadowed {
        pattern: String,
        shadowed_by: String,
    },

    #[error("Unknown backlog route: {0}")]
    UnknownBacklogRoute(String),
}
