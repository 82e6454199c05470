pub mod chrome;
pub mod error;
pub mod history;
pub mod location;
pub mod pattern;
pub mod table;

pub use chrome::ChromePolicy;
pub use error::RouterError;
pub use history::{History, HistoryEntry};
pub use location::Location;
pub use pattern::{PathPattern, Segment};
pub use table::{Route, RouteMatch, RouteTable};
