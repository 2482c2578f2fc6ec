// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use controle::{cli, commands, state::AppState, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut state = AppState::open()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::store_path()?.display());
        }
        Some(("profile", sub)) => commands::profile::handle(&mut state, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut state, sub)?,
        Some(("special", sub)) => commands::special::handle(&mut state, sub)?,
        Some(("card", sub)) => commands::cards::handle(&mut state, sub)?,
        Some(("report", sub)) => commands::reports::handle(&state, sub)?,
        Some(("project", sub)) => commands::projects::handle(&mut state, sub)?,
        Some(("reminders", sub)) => commands::reminders::handle(&state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&state)?,
        Some(("reset", sub)) => {
            if sub.get_flag("all") {
                for key in [
                    store::USER_KEY,
                    store::TRANSACTIONS_KEY,
                    store::CARDS_KEY,
                    store::PROJECTS_KEY,
                ] {
                    store::clear_blob(state.conn(), key)?;
                }
                println!("Cleared every stored blob");
            } else if let Some(key) = sub.get_one::<String>("key") {
                store::clear_blob(state.conn(), key)?;
                println!("Cleared '{}'", key);
            } else {
                eprintln!("Nothing to do: pass --key <name> or --all");
            }
        }
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
