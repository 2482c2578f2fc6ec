// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow, bail};

use crate::models::{CardKind, CreditCard};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, new_id, parse_decimal, pretty_table};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub),
        Some(("list", sub)) => list(state, sub),
        Some(("rm", sub)) => {
            let reference = sub.get_one::<String>("id").unwrap().trim();
            state.delete_card(reference)?;
            println!("Removed card '{}'", reference);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let bank = sub.get_one::<String>("bank").unwrap().trim().to_string();
    if bank.is_empty() {
        bail!("Bank name must not be empty");
    }
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap())?;
    let kind = match sub.get_one::<String>("type").unwrap().to_uppercase().as_str() {
        "CREDIT" => CardKind::Credit,
        "DEBIT" => CardKind::Debit,
        other => return Err(anyhow!("Unknown card type '{}', expected credit|debit", other)),
    };
    let due_day = *sub.get_one::<u32>("due-day").unwrap_or(&10);
    let closing_day = *sub.get_one::<u32>("closing-day").unwrap_or(&1);
    if !(1..=31).contains(&due_day) || !(1..=31).contains(&closing_day) {
        bail!("Due and closing days must be within 1-31");
    }
    let color = sub.get_one::<String>("color").unwrap().to_string();

    let card = CreditCard {
        id: new_id(),
        bank: bank.clone(),
        limit,
        available_credit: limit,
        due_day,
        closing_day,
        color,
        is_active: true,
        r#type: kind,
    };
    let id = card.id.clone();
    state.add_card(card)?;
    println!("Added {} card '{}' ({}) with limit {}", kind, bank, id, fmt_money(&limit));
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.cards())? {
        let rows: Vec<Vec<String>> = state
            .cards()
            .iter()
            .map(|c| {
                vec![
                    c.bank.clone(),
                    c.r#type.to_string(),
                    fmt_money(&c.limit),
                    format!("day {}", c.due_day),
                    if c.is_active { "yes".into() } else { "no".into() },
                    c.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Bank", "Type", "Limit", "Due", "Active", "Id"], rows)
        );
    }
    Ok(())
}
