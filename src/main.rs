mod cli;
mod error;
mod fmt;
mod form;
mod ids;
mod ledger;
mod models;
mod settings;
mod storage;
mod store;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::dashboard::run(),
        Some(Commands::Init { data_dir }) => cli::init::run(data_dir),
        Some(Commands::Add {
            description,
            amount,
            category,
            kind,
            date,
        }) => cli::add::run(
            &description,
            &amount,
            category.as_deref(),
            kind.as_deref(),
            date.as_deref(),
        ),
        Some(Commands::List) => cli::list::run(),
        Some(Commands::Remove { id, yes }) => cli::remove::remove(&id, yes),
        Some(Commands::Clear { yes }) => cli::remove::clear(yes),
        Some(Commands::Summary) => cli::summary::run(),
        Some(Commands::Status) => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
