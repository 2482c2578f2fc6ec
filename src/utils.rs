// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::{PaymentMethod, TransactionType};

pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((d.year(), d.month()))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_method(s: &str) -> Result<PaymentMethod> {
    match s.trim().to_uppercase().as_str() {
        "PIX" => Ok(PaymentMethod::Pix),
        "CASH" => Ok(PaymentMethod::Cash),
        "DEBIT" => Ok(PaymentMethod::Debit),
        "CREDIT" => Ok(PaymentMethod::Credit),
        other => Err(anyhow!(
            "Unknown payment method '{}', expected pix|cash|debit|credit",
            other
        )),
    }
}

/// Regular entries are either income or expense; loans and boca purchases
/// go through the `special` commands.
pub fn parse_entry_type(s: &str) -> Result<TransactionType> {
    match s.trim().to_uppercase().as_str() {
        "INCOME" => Ok(TransactionType::Income),
        "EXPENSE" => Ok(TransactionType::Expense),
        other => Err(anyhow!("Unknown entry type '{}', expected income|expense", other)),
    }
}

/// pt-BR money rendering: "R$ 1.234,56".
pub fn fmt_money(d: &Decimal) -> String {
    let sign = if d.is_sign_negative() { "-" } else { "" };
    let s = format!("{:.2}", d.abs());
    let (int, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{}R$ {},{}", sign, grouped, frac)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// 9-character base-36 record id, the shape the store has always used.
pub fn new_id() -> String {
    const CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

/// Epoch milliseconds for a wall-clock date + "HH:MM" time. The naive
/// local reading is fixed as UTC so that bucketing a timestamp back into
/// a month always agrees with the recorded date.
pub fn timestamp_of(date: NaiveDate, time: &str) -> i64 {
    let t = NaiveTime::parse_from_str(time, "%H:%M").unwrap_or(NaiveTime::MIN);
    date.and_time(t).and_utc().timestamp_millis()
}

pub fn date_of_timestamp(ts: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.naive_utc().date())
        .unwrap_or(NaiveDate::MIN)
}

pub fn month_of_timestamp(ts: i64) -> (i32, u32) {
    let d = date_of_timestamp(ts);
    (d.year(), d.month())
}

/// Current wall-clock (date, "HH:MM").
pub fn now_parts() -> (NaiveDate, String) {
    let now = Local::now();
    (now.date_naive(), now.format("%H:%M").to_string())
}
