// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::catalog;
use crate::models::Transaction;

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub key: String,
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

/// Outflow totals grouped by category key for one month of the expanded
/// ledger, sorted descending by value. Ties keep the order in which the
/// category first appeared in the ledger. Returns the full set; callers
/// decide how many slices to surface.
pub fn category_breakdown(expanded: &[Transaction], year: i32, month: u32) -> Vec<CategorySlice> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Decimal> = HashMap::new();

    for t in expanded {
        if t.month() != (year, month) || t.is_income() {
            continue;
        }
        if !sums.contains_key(&t.category) {
            order.push(t.category.clone());
        }
        *sums.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }

    let mut slices: Vec<CategorySlice> = order
        .into_iter()
        .map(|key| {
            let value = sums.get(&key).copied().unwrap_or(Decimal::ZERO);
            CategorySlice {
                name: catalog::display_name(&key).to_string(),
                color: catalog::display_color(&key).to_string(),
                key,
                value,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal values keep first-appearance order.
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}
