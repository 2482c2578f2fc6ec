// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::expand_installments;
use crate::models::Transaction;
use crate::state::AppState;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(state, sub),
        _ => Ok(()),
    }
}

fn export_transactions(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let expanded = sub.get_flag("expanded");

    let data: Vec<Transaction> = if expanded {
        expand_installments(state.transactions())
    } else {
        state.transactions().to_vec()
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "time",
                "title",
                "amount",
                "type",
                "category",
                "method",
                "card",
                "installments",
                "installment",
            ])?;
            for t in &data {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_string(),
                    t.time.clone(),
                    t.title.clone(),
                    t.amount.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    t.payment_method.to_string(),
                    t.card_id.clone().unwrap_or_default(),
                    t.installments_count.map(|n| n.to_string()).unwrap_or_default(),
                    t.current_installment.map(|n| n.to_string()).unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", data.len(), out);
    Ok(())
}
