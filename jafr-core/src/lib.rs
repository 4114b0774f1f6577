//! Core of jafr, a plain-text task and meeting tracker.
//!
//! - `record`: task and meeting lines, parsed and rendered
//! - `store`: whole-file task and meeting stores
//! - `date_window` / `reminders`: what is due or scheduled today and soon
//! - `completion`, `schedule`, `sharing`: the interactive operations
//! - `registry`, `settings`, `console`: the local users, per-user settings
//!   and the terminal the operations talk to

pub mod completion;
pub mod console;
pub mod date_window;
pub mod error;
pub mod record;
pub mod registry;
pub mod reminders;
pub mod schedule;
pub mod settings;
pub mod sharing;
pub mod store;

pub use error::{JafrError, JafrResult, RecordError};
