// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use controle::ledger::{INSTALLMENT_TAG, base_id, expand_installments};
use controle::models::{PaymentMethod, Transaction, TransactionType};
use controle::utils::timestamp_of;

fn tx(
    id: &str,
    amount: &str,
    method: PaymentMethod,
    installments: Option<u32>,
    date: &str,
) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction {
        id: id.to_string(),
        title: format!("tx {}", id),
        amount: amount.parse().unwrap(),
        r#type: TransactionType::Expense,
        category: "mercado".to_string(),
        date,
        time: "12:00".to_string(),
        timestamp: timestamp_of(date, "12:00"),
        installments_count: installments,
        current_installment: None,
        card_id: None,
        payment_method: method,
        payment_date: None,
        person_name: None,
        is_special_operation: None,
    }
}

#[test]
fn credit_purchase_expands_to_n_entries_with_exact_sum() {
    let input = vec![tx("a1", "1000", PaymentMethod::Credit, Some(3), "2026-01-15")];
    let out = expand_installments(&input);

    assert_eq!(out.len(), 3);
    let total: Decimal = out.iter().map(|t| t.amount).sum();
    assert_eq!(total, "1000".parse::<Decimal>().unwrap());
    // 1000/3 rounds to 333.33; the last installment absorbs the remainder.
    assert_eq!(out[0].amount, "333.33".parse::<Decimal>().unwrap());
    assert_eq!(out[1].amount, "333.33".parse::<Decimal>().unwrap());
    assert_eq!(out[2].amount, "333.34".parse::<Decimal>().unwrap());
}

#[test]
fn synthetic_entries_land_on_consecutive_first_of_month() {
    let input = vec![tx("a1", "300", PaymentMethod::Credit, Some(3), "2026-01-15")];
    let out = expand_installments(&input);

    let months: Vec<(i32, u32, u32)> =
        out.iter().map(|t| (t.date.year(), t.date.month(), t.date.day())).collect();
    assert_eq!(months, vec![(2026, 1, 1), (2026, 2, 1), (2026, 3, 1)]);
    for t in &out {
        assert_eq!((t.date.year(), t.date.month()), t.month());
    }
}

#[test]
fn expansion_rolls_over_the_year() {
    let input = vec![tx("a1", "300", PaymentMethod::Credit, Some(3), "2026-11-10")];
    let out = expand_installments(&input);

    let months: Vec<(i32, u32)> = out.iter().map(|t| t.month()).collect();
    assert_eq!(months, vec![(2026, 11), (2026, 12), (2027, 1)]);
}

#[test]
fn synthetic_ids_are_distinct_and_traceable() {
    let input = vec![tx("a1", "600", PaymentMethod::Credit, Some(6), "2026-01-15")];
    let out = expand_installments(&input);

    let mut ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
    for (i, t) in out.iter().enumerate() {
        assert_eq!(t.id, format!("a1{}{}", INSTALLMENT_TAG, i));
        assert_eq!(base_id(&t.id), "a1");
        assert_eq!(t.current_installment, Some(i as u32 + 1));
        assert_eq!(t.title, format!("tx a1 ({}/6)", i + 1));
    }
}

#[test]
fn non_credit_and_single_installment_pass_through_unchanged() {
    let input = vec![
        tx("p1", "90", PaymentMethod::Pix, Some(1), "2026-02-03"),
        tx("c1", "120", PaymentMethod::Credit, Some(1), "2026-02-04"),
        tx("d1", "75", PaymentMethod::Debit, None, "2026-02-05"),
    ];
    let out = expand_installments(&input);

    assert_eq!(out.len(), 3);
    for (orig, got) in input.iter().zip(&out) {
        assert_eq!(orig.id, got.id);
        assert_eq!(orig.amount, got.amount);
        assert_eq!(orig.date, got.date);
        assert_eq!(orig.title, got.title);
        assert_eq!(orig.current_installment, got.current_installment);
    }
}

#[test]
fn expansion_is_idempotent_over_the_same_input() {
    let input = vec![
        tx("a1", "1000", PaymentMethod::Credit, Some(3), "2026-01-15"),
        tx("p1", "90", PaymentMethod::Pix, Some(1), "2026-02-03"),
    ];
    let once = expand_installments(&input);
    let twice = expand_installments(&input);

    let key = |v: &Vec<Transaction>| -> Vec<(String, Decimal, i64)> {
        v.iter().map(|t| (t.id.clone(), t.amount, t.timestamp)).collect()
    };
    assert_eq!(key(&once), key(&twice));
}

#[test]
fn base_id_resolves_synthetic_and_plain_ids() {
    assert_eq!(base_id("abc123-inst-2"), "abc123");
    assert_eq!(base_id("abc123"), "abc123");
    assert_eq!(base_id("abc123-inst-0"), "abc123");
}
