mod config;
mod db;
mod export;
mod ledger;
mod logging;
mod models;
mod run;
mod storage;
mod summary;
mod ui;

use anyhow::Result;

use logging::LogTarget;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;

    let log_path = config.log_path();
    let target = if args.len() > 1 {
        LogTarget::Stderr
    } else {
        LogTarget::File(&log_path)
    };
    logging::init(target)?;

    let db_path = config.db_path();
    log::info!("opening store at {}", db_path.display());
    let store = db::Database::open(&db_path)?;
    let mut session = ledger::Tracker::open(store)?;

    match args.len() {
        1 => run::as_tui(&mut session, config),
        2.. => run::as_cli(&args, &mut session, &config),
        _ => {
            eprintln!("Usage: spendtrack [command]");
            Ok(())
        }
    }
}
