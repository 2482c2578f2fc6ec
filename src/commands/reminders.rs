// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionType;
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, now_parts, pretty_table};

#[derive(Serialize)]
pub struct Reminder {
    pub due: NaiveDate,
    pub status: &'static str,
    pub kind: &'static str,
    pub title: String,
    pub amount: Decimal,
    pub person: String,
}

/// Special operations due today (REMINDER) or already past (ALERT),
/// newest due date first.
pub fn due_reminders(state: &AppState, today: NaiveDate) -> Vec<Reminder> {
    let mut notes: Vec<Reminder> = state
        .transactions()
        .iter()
        .filter_map(|t| {
            let due = t.payment_date?;
            if due > today {
                return None;
            }
            Some(Reminder {
                due,
                status: if due < today { "ALERT" } else { "REMINDER" },
                kind: match t.r#type {
                    TransactionType::BocaPurchase => "Pending payment",
                    _ => "Loan reminder",
                },
                title: t.title.clone(),
                amount: t.amount,
                person: t.person_name.clone().unwrap_or_default(),
            })
        })
        .collect();
    notes.sort_by(|a, b| b.due.cmp(&a.due));
    notes
}

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let (today, _) = now_parts();
    let notes = due_reminders(state, today);

    if maybe_print_json(json_flag, jsonl_flag, &notes)? {
        return Ok(());
    }
    if notes.is_empty() {
        println!("✅ nothing due");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|n| {
            vec![
                n.due.to_string(),
                n.status.to_string(),
                n.kind.to_string(),
                n.title.clone(),
                fmt_money(&n.amount),
                n.person.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Due", "Status", "Kind", "Title", "Amount", "Person"], rows)
    );
    Ok(())
}
