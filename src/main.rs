// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use expensetrack::{cli, commands, db, store::TransactionStore};

fn main() -> Result<()> {
    setup_logging();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_override = matches.get_one::<PathBuf>("db").cloned();
    let conn = db::open_or_init(db_override.as_deref())?;

    if let Some(("init", _)) = matches.subcommand() {
        match db_override {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        }
        return Ok(());
    }

    let mut store = TransactionStore::load(conn);

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("home", sub)) => commands::reports::home(&store, sub)?,
        Some(("analytics", sub)) => commands::reports::analytics(&store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("alerts", sub)) => commands::alerts::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

// Logs go to stderr; stdout carries only tables and JSON.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
