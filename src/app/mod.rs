//! Page state and event handling

mod event;
mod page;

pub use event::{Event, Handler};
pub use page::{App, PendingNavigation};
