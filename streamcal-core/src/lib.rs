//! Core types for the streamcal toolkit.
//!
//! This crate provides the pieces shared by all three streamcal commands:
//! - `event` — the stream schedule data model (`StreamEvent`, `Localized`)
//! - `window` — relative time-window predicates in the reference timezone
//! - `ics` — ICS calendar feed rendering
//! - `digest` — weekly Discord digest rendering
//! - `store` — wholesale YAML load/save of the schedule file

pub mod digest;
pub mod error;
pub mod event;
pub mod ics;
pub mod store;
pub mod window;

pub use error::{ScheduleError, ScheduleResult};
pub use event::{Localized, StreamEvent};
