//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the widget core and the browser.
//! They are defined here (in `app`) so that the widget logic can be exercised
//! with in-memory fakes and driven by `web-sys` in production.

pub mod navigator;
pub mod page;
pub mod scheduler;
pub mod status_source;

pub use navigator::{NavigationError, Navigator};
pub use page::{Element, Page};
pub use scheduler::Scheduler;
pub use status_source::{StatusSource, decode_response};
