// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::breakdown::category_breakdown;
use crate::ledger::expand_installments;
use crate::state::AppState;
use crate::summary::{month_summary, overall_balance, range_summary, yearly_flow};
use crate::utils::{
    MONTH_LABELS, fmt_money, maybe_print_json, now_parts, parse_date, parse_month, pretty_table,
    timestamp_of,
};

const MS_PER_DAY: i64 = 86_400_000;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(state, sub),
        Some(("breakdown", sub)) => breakdown(state, sub),
        Some(("compare", sub)) => compare(state, sub),
        Some(("flow", sub)) => flow(state, sub),
        _ => Ok(()),
    }
}

fn month_arg(sub: &clap::ArgMatches) -> Result<(i32, u32)> {
    match sub.get_one::<String>("month") {
        Some(s) => parse_month(s),
        None => {
            let (d, _) = now_parts();
            Ok((d.year(), d.month()))
        }
    }
}

fn fmt_diff(d: f64) -> String {
    format!("{} {:.1}%", if d >= 0.0 { "↑" } else { "↓" }, d.abs())
}

fn summary(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = month_arg(sub)?;

    let expanded = expand_installments(state.transactions());
    let s = month_summary(&expanded, year, month);

    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }

    let rows = vec![
        vec![
            "Income".to_string(),
            fmt_money(&s.income),
            fmt_money(&s.prev_income),
            fmt_diff(s.income_diff),
        ],
        vec![
            "Outflow".to_string(),
            fmt_money(&s.expense),
            fmt_money(&s.prev_expense),
            fmt_diff(s.expense_diff),
        ],
        vec![
            "Balance".to_string(),
            fmt_money(&s.balance),
            fmt_money(&(s.prev_income - s.prev_expense)),
            String::new(),
        ],
    ];
    println!("{:04}-{:02}", year, month);
    println!(
        "{}",
        pretty_table(&["", "Current", "Previous", "Δ vs previous"], rows)
    );

    if let Some(user) = state.user() {
        let goal = user.spending_goal();
        let used = ((s.expense / goal) * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
            .min(100.0);
        println!("Spending goal: {} ({:.0}% used)", fmt_money(&goal), used);
    }
    println!(
        "Overall balance: {}",
        fmt_money(&overall_balance(state.transactions()))
    );
    Ok(())
}

fn breakdown(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let all = sub.get_flag("all");
    let (year, month) = month_arg(sub)?;

    let expanded = expand_installments(state.transactions());
    let slices = category_breakdown(&expanded, year, month);

    // Machine output always carries the full set.
    if maybe_print_json(json_flag, jsonl_flag, &slices)? {
        return Ok(());
    }

    let total: Decimal = slices.iter().map(|s| s.value).sum();
    let shown = if all { slices.len() } else { slices.len().min(5) };
    let rows: Vec<Vec<String>> = slices[..shown]
        .iter()
        .map(|s| {
            let share = if total > Decimal::ZERO {
                ((s.value / total) * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
            } else {
                0.0
            };
            vec![s.name.clone(), fmt_money(&s.value), format!("{:.1}%", share)]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    if shown < slices.len() {
        println!("(top {} of {}; use --all for the full list)", shown, slices.len());
    }
    Ok(())
}

fn compare(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let from = parse_date(sub.get_one::<String>("from").unwrap())?;
    let to = parse_date(sub.get_one::<String>("to").unwrap())?;
    if from > to {
        bail!("Range start must not be after its end");
    }
    let start_ms = timestamp_of(from, "00:00");
    let end_ms = timestamp_of(to, "00:00") + MS_PER_DAY - 1;

    let expanded = expand_installments(state.transactions());
    let s = range_summary(&expanded, start_ms, end_ms);

    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }

    let rows = vec![
        vec![
            "Income".to_string(),
            fmt_money(&s.current.income),
            fmt_money(&s.previous.income),
            fmt_diff(s.income_diff),
        ],
        vec![
            "Outflow".to_string(),
            fmt_money(&s.current.expense),
            fmt_money(&s.previous.expense),
            fmt_diff(s.expense_diff),
        ],
        vec![
            "Balance".to_string(),
            fmt_money(&s.current.balance()),
            fmt_money(&s.previous.balance()),
            fmt_diff(s.balance_diff),
        ],
    ];
    println!("{} — {} vs the preceding period of equal length", from, to);
    println!(
        "{}",
        pretty_table(&["", "Current", "Previous", "Δ"], rows)
    );
    println!("(for outflow, a decrease reads as improvement)");
    Ok(())
}

#[derive(Serialize)]
struct FlowRow {
    month: String,
    income: Decimal,
    expense: Decimal,
}

fn flow(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = match sub.get_one::<i32>("year") {
        Some(y) => *y,
        None => now_parts().0.year(),
    };

    let expanded = expand_installments(state.transactions());
    let months = yearly_flow(&expanded, year);
    let data: Vec<FlowRow> = months
        .iter()
        .enumerate()
        .map(|(i, t)| FlowRow {
            month: MONTH_LABELS[i].to_string(),
            income: t.income,
            expense: t.expense,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = months
            .iter()
            .enumerate()
            .map(|(i, t)| {
                vec![
                    MONTH_LABELS[i].to_string(),
                    fmt_money(&t.income),
                    fmt_money(&t.expense),
                ]
            })
            .collect();
        println!("{}", year);
        println!("{}", pretty_table(&["Month", "Income", "Outflow"], rows));
    }
    Ok(())
}
