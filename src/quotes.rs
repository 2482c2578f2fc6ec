// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Multi-supplier quote comparison: supplier ranking, per-item best-price
//! analysis, and a toggleable purchase selection.
//!
//! Item names match by exact string equality, case-sensitive and without
//! trimming. "Cimento" and "cimento" are two different items; the CLI
//! warns when that happens instead of silently folding them together.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::models::BudgetProject;

#[derive(Debug, Clone, Serialize)]
pub struct SupplierTotal {
    pub id: String,
    pub name: String,
    pub total: Decimal,
    pub items_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemAnalysis {
    pub name: String,
    pub best_price: Decimal,
    pub best_supplier: String,
    /// Savings against the second-lowest offer; 0 for single-source items.
    pub delta: Decimal,
    pub single_source: bool,
}

/// Per-supplier quoted totals, cheapest first. Payment terms recorded on
/// the supplier (discount, installments, entry value) are not applied.
pub fn ranking(project: &BudgetProject) -> Vec<SupplierTotal> {
    let mut totals: Vec<SupplierTotal> = project
        .suppliers
        .iter()
        .map(|s| SupplierTotal {
            id: s.id.clone(),
            name: s.name.clone(),
            total: s.items.iter().map(|i| i.price).sum(),
            items_count: s.items.len(),
        })
        .collect();
    totals.sort_by(|a, b| a.total.cmp(&b.total));
    totals
}

/// Cross-supplier best price per distinct item name, in first-appearance
/// order. Items quoted by a single supplier carry a zero delta and the
/// `single_source` flag; they are listed, not compared.
pub fn best_prices(project: &BudgetProject) -> Vec<ItemAnalysis> {
    let mut names: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for s in &project.suppliers {
        for item in &s.items {
            if seen.insert(item.name.as_str()) {
                names.push(item.name.as_str());
            }
        }
    }

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        // First matching item per supplier, in supplier order.
        let mut offers: Vec<(&str, Decimal)> = project
            .suppliers
            .iter()
            .filter_map(|s| {
                s.items
                    .iter()
                    .find(|i| i.name == name)
                    .map(|i| (s.name.as_str(), i.price))
            })
            .collect();
        offers.sort_by(|a, b| a.1.cmp(&b.1));

        match offers.as_slice() {
            [] => {}
            [only] => results.push(ItemAnalysis {
                name: name.to_string(),
                best_price: only.1,
                best_supplier: only.0.to_string(),
                delta: Decimal::ZERO,
                single_source: true,
            }),
            [best, second, ..] => results.push(ItemAnalysis {
                name: name.to_string(),
                best_price: best.1,
                best_supplier: best.0.to_string(),
                delta: second.1 - best.1,
                single_source: false,
            }),
        }
    }
    results
}

/// Item names that only differ by case or surrounding whitespace, for
/// surfacing the exact-match limitation to the user.
pub fn near_miss_names(project: &BudgetProject) -> Vec<(String, String)> {
    let analyses = best_prices(project);
    let mut pairs = Vec::new();
    for (i, a) in analyses.iter().enumerate() {
        for b in &analyses[i + 1..] {
            if a.name != b.name && a.name.trim().to_lowercase() == b.name.trim().to_lowercase() {
                pairs.push((a.name.clone(), b.name.clone()));
            }
        }
    }
    pairs
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedOffer {
    pub supplier: String,
    pub price: Decimal,
}

/// Items marked for purchase, keyed by item name. Toggling is an
/// involution: toggling the same name twice restores the prior state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Selection {
    chosen: BTreeMap<String, SelectedOffer>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the item is selected after the toggle.
    pub fn toggle(&mut self, name: &str, supplier: &str, price: Decimal) -> bool {
        if self.chosen.remove(name).is_some() {
            false
        } else {
            self.chosen.insert(
                name.to_string(),
                SelectedOffer { supplier: supplier.to_string(), price },
            );
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chosen.contains_key(name)
    }

    /// Running project total over the selected items, independent of
    /// ranking and analysis.
    pub fn total(&self) -> Decimal {
        self.chosen.values().map(|o| o.price).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SelectedOffer)> {
        self.chosen.iter()
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
