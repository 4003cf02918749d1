//! Domain events.
//!
//! Aggregates record what happened as events; this crate defines the shared
//! contract those events satisfy.

pub mod event;

pub use event::Event;
