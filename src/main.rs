// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketledger::{cli, commands, storage, store::Ledger};

fn main() -> Result<()> {
    env_logger::init();
    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("path", _)) => {
            println!("{}", storage::data_path()?.display());
        }
        Some(("tx", sub)) => {
            let mut ledger = Ledger::open_default()?;
            commands::transactions::handle(&mut ledger, sub)?;
        }
        Some(("summary", sub)) => {
            let ledger = Ledger::open_default()?;
            commands::summary::handle(&ledger, sub)?;
        }
        Some(("export", sub)) => {
            let ledger = Ledger::open_default()?;
            commands::exporter::handle(&ledger, sub)?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
