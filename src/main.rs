// Recipe-Local entry point

use clap::Parser;
use std::path::PathBuf;

use recipe_local::cli::{Cli, Command};
use recipe_local::commands;
use recipe_local::database::DatabaseManager;
use recipe_local::error::AppError;

fn main() {
    // Initialize env_logger to output to stderr (reads RUST_LOG env var)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let db = match open_database(cli.db_path) {
        Ok(db) => db,
        Err(e) => {
            log::error!("Database initialization failed: {e}");
            eprintln!("Error: {e}");
            eprintln!("Please try again.");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Pick { filters, copy } => commands::pick(&db, &filters.into_criteria(), copy),
        Command::List { filters } => commands::list(&db, &filters.into_criteria()),
        Command::Add(args) => commands::add(&db, args.into_draft()),
        Command::Share => commands::share(&db),
        Command::Options => commands::options(&db),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if matches!(e, AppError::StoreUnavailable(_)) {
            eprintln!("Please try again.");
        }
        std::process::exit(1);
    }
}

fn open_database(path: Option<PathBuf>) -> Result<DatabaseManager, AppError> {
    let manager = match path {
        Some(path) => DatabaseManager::new(path),
        None => DatabaseManager::init_default(),
    };

    manager.map_err(AppError::StoreUnavailable)
}
