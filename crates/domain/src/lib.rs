//! # sleepy-domain
//!
//! Pure domain model for the sleepy status widget.
//!
//! ## Responsibilities
//! - Define the **status snapshot** reported by the status endpoint
//! - Define **liveness** (alive / asleep) and the appearance each state paints
//! - Define the **glow** levels of the indicator dot and the blink state machine
//! - Define the error raised when a status cannot be fetched or decoded
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod blink;
pub mod liveness;
pub mod snapshot;
