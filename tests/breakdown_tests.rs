// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use controle::breakdown::category_breakdown;
use controle::catalog::{FALLBACK_COLOR, FALLBACK_NAME};
use controle::models::{PaymentMethod, Transaction, TransactionType};
use controle::utils::timestamp_of;

fn tx(id: &str, amount: &str, r#type: TransactionType, category: &str, date: &str) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction {
        id: id.to_string(),
        title: id.to_string(),
        amount: amount.parse().unwrap(),
        r#type,
        category: category.to_string(),
        date,
        time: "12:00".to_string(),
        timestamp: timestamp_of(date, "12:00"),
        installments_count: None,
        current_installment: None,
        card_id: None,
        payment_method: PaymentMethod::Pix,
        payment_date: None,
        person_name: None,
        is_special_operation: None,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn groups_resolve_labels_and_sort_descending() {
    let txs = vec![
        tx("1", "100", TransactionType::Expense, "mercado", "2026-03-05"),
        tx("2", "50", TransactionType::Expense, "mercado", "2026-03-12"),
        tx("3", "30", TransactionType::Expense, "unknown_key", "2026-03-20"),
    ];
    let slices = category_breakdown(&txs, 2026, 3);

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "Mercado");
    assert_eq!(slices[0].value, dec("150"));
    assert_eq!(slices[1].name, FALLBACK_NAME);
    assert_eq!(slices[1].value, dec("30"));
    assert_eq!(slices[1].color, FALLBACK_COLOR);
}

#[test]
fn income_and_other_months_are_excluded() {
    let txs = vec![
        tx("1", "500", TransactionType::Income, "salario", "2026-03-01"),
        tx("2", "80", TransactionType::Expense, "luz", "2026-03-10"),
        tx("3", "80", TransactionType::Expense, "luz", "2026-04-10"),
    ];
    let slices = category_breakdown(&txs, 2026, 3);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].name, "Luz");
    assert_eq!(slices[0].value, dec("80"));
}

#[test]
fn non_income_special_types_count_as_outflow() {
    let txs = vec![
        tx("1", "70", TransactionType::BocaPurchase, "outras_despesas", "2026-03-08"),
        tx("2", "30", TransactionType::LoanTaken, "outras_despesas", "2026-03-09"),
    ];
    let slices = category_breakdown(&txs, 2026, 3);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].value, dec("100"));
}

#[test]
fn equal_values_keep_first_appearance_order() {
    let txs = vec![
        tx("1", "50", TransactionType::Expense, "luz", "2026-03-03"),
        tx("2", "50", TransactionType::Expense, "agua", "2026-03-04"),
        tx("3", "70", TransactionType::Expense, "mercado", "2026-03-05"),
    ];
    let slices = category_breakdown(&txs, 2026, 3);
    let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Mercado", "Luz", "Água"]);
}

#[test]
fn full_set_is_returned_not_just_the_top_five() {
    let cats = ["aluguel", "luz", "agua", "gas", "internet", "telefone", "mercado"];
    let txs: Vec<Transaction> = cats
        .iter()
        .enumerate()
        .map(|(i, c)| {
            tx(&i.to_string(), &format!("{}", 100 - i as i32 * 10), TransactionType::Expense, c, "2026-03-10")
        })
        .collect();
    let slices = category_breakdown(&txs, 2026, 3);
    assert_eq!(slices.len(), 7);
}
