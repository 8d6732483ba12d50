#![forbid(unsafe_code)]

//! Domain types for the flashdeck client.
//!
//! Everything here is plain data: deck snapshots as the deck service reports
//! them, client-side drafts with their validation rules, and the clock
//! abstraction used to keep tests deterministic. Transport and UI concerns
//! live in the `api` and `ui` crates.

pub mod model;
pub mod time;

pub use time::Clock;
