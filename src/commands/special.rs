// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{PaymentMethod, Transaction, TransactionType};
use crate::state::AppState;
use crate::utils::{fmt_money, new_id, now_parts, parse_date, parse_decimal, timestamp_of};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("boca", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let person = sub.get_one::<String>("person").unwrap().trim().to_string();
            let due = parse_date(sub.get_one::<String>("due").unwrap())?;
            record(
                state,
                TransactionType::BocaPurchase,
                format!("Boca: {}", person),
                amount,
                person,
                due,
            )
        }
        Some(("loan", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let person = sub.get_one::<String>("person").unwrap().trim().to_string();
            let due = parse_date(sub.get_one::<String>("due").unwrap())?;
            let (r#type, title) = match sub.get_one::<String>("direction").unwrap().to_lowercase().as_str() {
                "given" => (TransactionType::LoanGiven, format!("Empréstimo p/ {}", person)),
                "taken" => (TransactionType::LoanTaken, format!("Dívida c/ {}", person)),
                other => return Err(anyhow!("Unknown direction '{}', expected given|taken", other)),
            };
            record(state, r#type, title, amount, person, due)
        }
        _ => Ok(()),
    }
}

fn record(
    state: &mut AppState,
    r#type: TransactionType,
    title: String,
    amount: Decimal,
    person: String,
    due: NaiveDate,
) -> Result<()> {
    let (date, time) = now_parts();
    let tx = Transaction {
        id: new_id(),
        title: title.clone(),
        amount,
        r#type,
        category: "outras_despesas".to_string(),
        date,
        time: time.clone(),
        timestamp: timestamp_of(date, &time),
        installments_count: None,
        current_installment: None,
        card_id: None,
        payment_method: PaymentMethod::Pix,
        payment_date: Some(due),
        person_name: Some(person),
        is_special_operation: Some(true),
    };
    state.add_transaction(tx)?;
    println!("Recorded {} '{}'; reminder due {}", fmt_money(&amount), title, due);
    Ok(())
}
