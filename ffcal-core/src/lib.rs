//! Core of ffcal, an economic calendar viewer.
//!
//! - `source`: the `DocumentFetcher` seam and the Forex Factory page reader
//! - `extract`: currency filter, time carry-forward, impact classification, dedup
//! - `report`: one fetch + extract cycle for a day
//! - `session` / `refresh`: day navigation and stale-result suppression

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod extract;
pub mod refresh;
pub mod report;
pub mod row;
pub mod session;
pub mod source;

pub use event::{Event, Impact};
pub use row::{RowRecord, RowResult};
