//! Screen rendering and input handling.

mod journal;

pub use journal::{Focus, JournalScreen, cycle};
