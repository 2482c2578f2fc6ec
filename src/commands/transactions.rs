// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::Datelike;

use crate::ledger::expand_installments;
use crate::models::{PaymentMethod, Transaction};
use crate::state::AppState;
use crate::utils::{
    fmt_money, maybe_print_json, new_id, now_parts, parse_date, parse_decimal, parse_entry_type,
    parse_method, parse_month, pretty_table, timestamp_of,
};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub),
        Some(("list", sub)) => list(state, sub),
        Some(("rm", sub)) => rm(state, sub),
        _ => Ok(()),
    }
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let r#type = parse_entry_type(sub.get_one::<String>("type").unwrap())?;
    let method = parse_method(sub.get_one::<String>("method").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let installments = *sub.get_one::<u32>("installments").unwrap_or(&1);

    let (date, time) = match sub.get_one::<String>("date") {
        Some(d) => (parse_date(d)?, "00:00".to_string()),
        None => now_parts(),
    };

    let card_id = match sub.get_one::<String>("card") {
        Some(r) => Some(
            state
                .card_by_ref(r)
                .ok_or_else(|| anyhow!("Card '{}' not found", r))?
                .id
                .clone(),
        ),
        None => None,
    };

    let tx = Transaction {
        id: new_id(),
        title: title.clone(),
        amount,
        r#type,
        category,
        date,
        time: time.clone(),
        timestamp: timestamp_of(date, &time),
        installments_count: Some(installments),
        current_installment: None,
        card_id,
        payment_method: method,
        payment_date: None,
        person_name: None,
        is_special_operation: None,
    };
    state.add_transaction(tx)?;

    println!("Recorded {} '{}' on {} ({})", fmt_money(&amount), title, date, method);
    if method == PaymentMethod::Credit && installments > 1 {
        println!("  split into {} monthly installments of ~{}", installments, fmt_money(&(amount / rust_decimal::Decimal::from(installments)).round_dp(2)));
    }
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let raw = sub.get_flag("raw");
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => {
            let (d, _) = now_parts();
            (d.year(), d.month())
        }
    };
    let type_filter = sub.get_one::<String>("type").unwrap().to_uppercase();

    let mut data: Vec<Transaction> = if raw {
        state.transactions().to_vec()
    } else {
        expand_installments(state.transactions())
    };
    data.retain(|t| t.month() == (year, month));
    match type_filter.as_str() {
        "INCOME" => data.retain(|t| t.is_income()),
        "EXPENSE" => data.retain(|t| t.is_outflow()),
        _ => {}
    }
    data.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let sign = if t.is_income() { "+" } else { "-" };
                vec![
                    t.date.to_string(),
                    t.time.clone(),
                    t.title.clone(),
                    crate::catalog::display_name(&t.category).to_string(),
                    t.payment_method.to_string(),
                    format!("{} {}", sign, fmt_money(&t.amount)),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Time", "Title", "Category", "Method", "Amount", "Id"], rows)
        );
    }
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    state.delete_transaction(id)?;
    println!("Removed transaction '{}'", crate::ledger::base_id(id));
    Ok(())
}
