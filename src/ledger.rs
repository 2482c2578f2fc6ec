// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::utils::{date_of_timestamp, timestamp_of};

/// Separator between a stored id and the zero-based installment index in
/// synthetic entry ids.
pub const INSTALLMENT_TAG: &str = "-inst-";

/// Resolves a (possibly synthetic) id back to the stored record id.
pub fn base_id(id: &str) -> &str {
    match id.find(INSTALLMENT_TAG) {
        Some(pos) => &id[..pos],
        None => id,
    }
}

/// Expands multi-installment credit purchases into one synthetic entry per
/// month, dated the first day of consecutive months starting at the
/// purchase month. Pure and recomputed on every read; nothing here is
/// persisted.
///
/// The per-installment amount is the total divided by the count, rounded
/// to 2 decimal places; the final installment absorbs the remainder so the
/// synthetic amounts always sum exactly to the stored total.
pub fn expand_installments(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut out = Vec::with_capacity(transactions.len());
    for t in transactions {
        if !t.is_installment_purchase() {
            out.push(t.clone());
            continue;
        }
        let count = t.installments_count.unwrap_or(1);
        let per = (t.amount / Decimal::from(count)).round_dp(2);
        let d = date_of_timestamp(t.timestamp);
        let first = NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d);
        for i in 0..count {
            let due = first + Months::new(i);
            let amount = if i + 1 == count {
                t.amount - per * Decimal::from(count - 1)
            } else {
                per
            };
            out.push(Transaction {
                id: format!("{}{}{}", t.id, INSTALLMENT_TAG, i),
                title: format!("{} ({}/{})", t.title, i + 1, count),
                amount,
                date: due,
                timestamp: timestamp_of(due, &t.time),
                current_installment: Some(i + 1),
                ..t.clone()
            });
        }
    }
    out
}
