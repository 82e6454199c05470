pub mod chrome;
pub mod context;
pub mod error;
pub mod pages;
pub mod placeholder;
pub mod registry;
pub mod shell;
pub mod view;

pub use chrome::ChromeBuilder;
pub use context::ContextProvider;
pub use error::ViewError;
pub use placeholder::PlaceholderPage;
pub use registry::PageRegistry;
pub use shell::NavigationShell;
pub use view::{PageView, ViewContext};
