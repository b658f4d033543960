//! Diagnostic logging to a file beside the journal.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `<data-dir>/zorki.log`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "zorki.log";

/// Installs the global subscriber. Problems are reported on stderr and leave
/// logging disabled; they never stop the program.
pub fn init(dir: &Path, directive: &str) {
    let path = dir.join(LOG_FILE);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "warning: logging disabled, cannot open {}: {e}",
                path.display()
            );
            return;
        }
    };

    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!(
            "warning: invalid log filter {directive:?} ({e}), using \"info\""
        );
        EnvFilter::new("info")
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("warning: logging disabled, cannot install subscriber: {e}");
    }
}
