// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog;
use crate::models::{BudgetProject, CreditCard, PaymentMethod, Transaction, User};
use crate::state::AppState;
use crate::store;
use crate::utils::pretty_table;

pub fn handle(state: &AppState) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Blobs that no longer parse; readers silently treat these as empty.
    check_blob::<Option<User>>(state, store::USER_KEY, &mut rows)?;
    check_blob::<Vec<Transaction>>(state, store::TRANSACTIONS_KEY, &mut rows)?;
    check_blob::<Vec<CreditCard>>(state, store::CARDS_KEY, &mut rows)?;
    check_blob::<Vec<BudgetProject>>(state, store::PROJECTS_KEY, &mut rows)?;

    // 2) Dangling card references.
    for t in state.transactions() {
        if let Some(cid) = &t.card_id {
            if !state.cards().iter().any(|c| &c.id == cid) {
                rows.push(vec!["unknown_card".into(), format!("tx {} -> card {}", t.id, cid)]);
            }
        }
    }

    // 3) Installment counts that only make sense on credit purchases.
    for t in state.transactions() {
        if t.installments_count.is_some_and(|n| n > 1)
            && t.payment_method != PaymentMethod::Credit
        {
            rows.push(vec![
                "installments_without_credit".into(),
                format!("tx {} ({})", t.id, t.payment_method),
            ]);
        }
    }

    // 4) Category keys outside the catalog; reports fall back to 'Outros'.
    let mut flagged: Vec<&str> = Vec::new();
    for t in state.transactions() {
        if catalog::lookup(&t.category).is_none() && !flagged.contains(&t.category.as_str()) {
            flagged.push(&t.category);
            rows.push(vec!["unknown_category".into(), t.category.clone()]);
        }
    }

    // 5) Special operations missing their reminder fields.
    for t in state.transactions() {
        if t.is_special()
            && (t.payment_date.is_none()
                || t.person_name.as_deref().map_or(true, |p| p.trim().is_empty()))
        {
            rows.push(vec!["incomplete_special_op".into(), format!("tx {}", t.id)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

fn check_blob<T: serde::de::DeserializeOwned>(
    state: &AppState,
    key: &str,
    rows: &mut Vec<Vec<String>>,
) -> Result<()> {
    if let Some(raw) = store::read_raw(state.conn(), key)? {
        if serde_json::from_str::<T>(&raw).is_err() {
            rows.push(vec![
                "malformed_blob".into(),
                format!("{} (treated as empty)", key),
            ]);
        }
    }
    Ok(())
}
