//! # sleepy-app
//!
//! Application layer: the status widget's behaviour and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the browser adapter must implement:
//!   - `StatusSource`: fetch one status snapshot
//!   - `Page` / `Element`: query and paint page elements
//!   - `Scheduler`: repeating and one-shot timers
//!   - `Navigator`: open a URL in a new browsing context
//! - Render a snapshot onto the page through optional targets (`render`)
//! - Drive the indicator blink (`blinker`) and the box interactions (`interactions`)
//! - Load the widget configuration (`config`)
//!
//! ## Dependency rule
//! Depends on `sleepy-domain` only (plus `serde`, `thiserror` and `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod blinker;
pub mod config;
pub mod interactions;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod fakes;
