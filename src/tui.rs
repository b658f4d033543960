//! Terminal presentation of the journal.

mod app;
mod screens;

pub use app::run;
