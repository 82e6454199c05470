pub mod config;
pub mod context;
pub mod page;
pub mod route_schema;
pub mod screen;

pub use config::{
    ChromeConfig, ChromeMode, ContextConfig, FallbackMode, HistoryConfig, NavLinkConfig,
    RoutingConfig, ShadowPolicy, ShellConfig,
};
pub use context::AppContext;
pub use page::PageId;
pub use route_schema::{BacklogRoute, RouteEntry};
pub use screen::{Block, ChromeFrame, HeaderBar, NavLink, PageContent, PathParams, Screen};
