mod catalog;
mod cli;
mod config;
mod journal;
mod logging;
mod model;
mod prompt;
mod selection;
mod session;
mod storage;
mod tui;

use std::process;

use clap::Parser;

use cli::Cli;
use config::Config;
use journal::Journal;
use prompt::DailyPrompt;
use session::Session;
use storage::FileStore;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        }),
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("{e}\nContinuing with default configuration.");
            Config::default()
        }),
    };

    let root = cli
        .data_dir
        .or_else(|| config.data_dir.clone())
        .or_else(FileStore::default_root)
        .unwrap_or_else(|| {
            eprintln!("Could not determine home directory.");
            process::exit(1);
        });

    let store = match FileStore::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    logging::init(store.root(), config.log_filter());

    let journal = Journal::hydrate(store);
    let prompt = DailyPrompt::choose(&config.prompt_catalog());
    let mut session = Session::new(journal, prompt);

    if let Err(e) = tui::run(&mut session) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
