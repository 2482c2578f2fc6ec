// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::Transaction;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl PeriodTotals {
    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub prev_income: Decimal,
    pub prev_expense: Decimal,
    pub income_diff: f64,
    pub expense_diff: f64,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct RangeSummary {
    pub current: PeriodTotals,
    pub previous: PeriodTotals,
    pub income_diff: f64,
    pub expense_diff: f64,
    pub balance_diff: f64,
}

/// Month-over-month percentage difference. A zero base yields exactly 0
/// for any current value.
pub fn pct_diff(curr: Decimal, prev: Decimal) -> f64 {
    if prev == Decimal::ZERO {
        return 0.0;
    }
    ((curr - prev) / prev * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

/// Range-comparison variant: a zero base reads as a full 100% increase
/// when the current value is positive, 0 otherwise.
pub fn pct_diff_versus(curr: Decimal, prev: Decimal) -> f64 {
    if prev == Decimal::ZERO {
        return if curr > Decimal::ZERO { 100.0 } else { 0.0 };
    }
    ((curr - prev) / prev * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

fn totals<'a, I: Iterator<Item = &'a Transaction>>(txs: I) -> PeriodTotals {
    let mut acc = PeriodTotals::default();
    for t in txs {
        if t.is_income() {
            acc.income += t.amount;
        } else {
            acc.expense += t.amount;
        }
    }
    acc
}

/// Income/outflow sums for one calendar month of the expanded ledger.
pub fn month_totals(expanded: &[Transaction], year: i32, month: u32) -> PeriodTotals {
    totals(expanded.iter().filter(|t| t.month() == (year, month)))
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Selected month vs the immediately preceding calendar month.
pub fn month_summary(expanded: &[Transaction], year: i32, month: u32) -> MonthSummary {
    let curr = month_totals(expanded, year, month);
    let (py, pm) = previous_month(year, month);
    let prev = month_totals(expanded, py, pm);
    MonthSummary {
        income_diff: pct_diff(curr.income, prev.income),
        expense_diff: pct_diff(curr.expense, prev.expense),
        balance: curr.balance(),
        income: curr.income,
        expense: curr.expense,
        prev_income: prev.income,
        prev_expense: prev.expense,
    }
}

/// Arbitrary window [start_ms, end_ms] (inclusive) vs the window of equal
/// millisecond duration ending exactly one millisecond before `start_ms`.
pub fn range_summary(expanded: &[Transaction], start_ms: i64, end_ms: i64) -> RangeSummary {
    let duration = end_ms - start_ms;
    let prev_start = start_ms - duration;
    let prev_end = start_ms - 1;

    let current = totals(
        expanded
            .iter()
            .filter(|t| t.timestamp >= start_ms && t.timestamp <= end_ms),
    );
    let previous = totals(
        expanded
            .iter()
            .filter(|t| t.timestamp >= prev_start && t.timestamp <= prev_end),
    );

    RangeSummary {
        income_diff: pct_diff_versus(current.income, previous.income),
        expense_diff: pct_diff_versus(current.expense, previous.expense),
        balance_diff: pct_diff_versus(current.balance(), previous.balance()),
        current,
        previous,
    }
}

/// Headline figure over the raw record list: income adds, every other
/// type subtracts.
pub fn overall_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |acc, t| {
        if t.is_income() { acc + t.amount } else { acc - t.amount }
    })
}

/// Twelve income/outflow pairs for one year of the expanded ledger.
pub fn yearly_flow(expanded: &[Transaction], year: i32) -> Vec<PeriodTotals> {
    (1..=12)
        .map(|m| month_totals(expanded, year, m))
        .collect()
}
