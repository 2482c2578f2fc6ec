// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

use controle::models::{
    CardKind, CreditCard, PaymentMethod, Transaction, TransactionType, User,
};
use controle::state::AppState;
use controle::utils::timestamp_of;

const SCHEMA: &str = r#"
    CREATE TABLE blobs(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
"#;

fn setup() -> AppState {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    AppState::load(conn).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: &str, amount: &str, method: PaymentMethod, card_id: Option<&str>) -> Transaction {
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    Transaction {
        id: id.to_string(),
        title: format!("tx {}", id),
        amount: dec(amount),
        r#type: TransactionType::Expense,
        category: "mercado".to_string(),
        date,
        time: "12:00".to_string(),
        timestamp: timestamp_of(date, "12:00"),
        installments_count: Some(1),
        current_installment: None,
        card_id: card_id.map(|s| s.to_string()),
        payment_method: method,
        payment_date: None,
        person_name: None,
        is_special_operation: None,
    }
}

fn card(id: &str, bank: &str, limit: &str) -> CreditCard {
    CreditCard {
        id: id.to_string(),
        bank: bank.to_string(),
        limit: dec(limit),
        available_credit: dec(limit),
        due_day: 10,
        closing_day: 1,
        color: "#10b981".to_string(),
        is_active: true,
        r#type: CardKind::Credit,
    }
}

#[test]
fn new_transactions_are_prepended() {
    let mut state = setup();
    state.add_transaction(tx("first", "10", PaymentMethod::Pix, None)).unwrap();
    state.add_transaction(tx("second", "20", PaymentMethod::Pix, None)).unwrap();

    let ids: Vec<&str> = state.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["second", "first"]);
}

#[test]
fn card_limit_is_spent_down_and_never_restored() {
    let mut state = setup();
    state.add_card(card("c1", "Nubank", "1000")).unwrap();
    state
        .add_transaction(tx("t1", "200", PaymentMethod::Credit, Some("c1")))
        .unwrap();
    assert_eq!(state.cards()[0].limit, dec("800"));

    // Deleting the transaction keeps the limit spent down.
    state.delete_transaction("t1").unwrap();
    assert!(state.transactions().is_empty());
    assert_eq!(state.cards()[0].limit, dec("800"));
}

#[test]
fn card_limit_floors_at_zero() {
    let mut state = setup();
    state.add_card(card("c1", "Inter", "100")).unwrap();
    state
        .add_transaction(tx("t1", "250", PaymentMethod::Credit, Some("c1")))
        .unwrap();
    assert_eq!(state.cards()[0].limit, Decimal::ZERO);
}

#[test]
fn deleting_by_synthetic_installment_id_removes_the_base_record() {
    let mut state = setup();
    state.add_card(card("c1", "Nubank", "1000")).unwrap();
    let mut t = tx("base42", "300", PaymentMethod::Credit, Some("c1"));
    t.installments_count = Some(3);
    state.add_transaction(t).unwrap();

    state.delete_transaction("base42-inst-2").unwrap();
    assert!(state.transactions().is_empty());
}

#[test]
fn deleting_an_unknown_id_fails() {
    let mut state = setup();
    let err = state.delete_transaction("nope").unwrap_err();
    assert!(err.to_string().contains("No transaction"));
}

#[test]
fn validation_failures_abort_with_no_partial_save() {
    let mut state = setup();

    let mut empty_title = tx("t1", "10", PaymentMethod::Pix, None);
    empty_title.title = "   ".to_string();
    assert!(state.add_transaction(empty_title).is_err());

    let zero_amount = tx("t2", "0", PaymentMethod::Pix, None);
    assert!(state.add_transaction(zero_amount).is_err());

    let no_card = tx("t3", "10", PaymentMethod::Credit, None);
    assert!(state.add_transaction(no_card).is_err());

    let mut pix_installments = tx("t4", "10", PaymentMethod::Pix, None);
    pix_installments.installments_count = Some(5);
    assert!(state.add_transaction(pix_installments).is_err());

    assert!(state.transactions().is_empty());
}

#[test]
fn referencing_a_missing_card_fails_before_any_write() {
    let mut state = setup();
    let err = state
        .add_transaction(tx("t1", "10", PaymentMethod::Credit, Some("ghost")))
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(state.transactions().is_empty());
}

#[test]
fn malformed_blob_reads_as_empty() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute(
        "INSERT INTO blobs(key, value) VALUES('cp_transactions', 'not json at all {')",
        [],
    )
    .unwrap();
    let state = AppState::load(conn).unwrap();
    assert!(state.transactions().is_empty());
}

#[test]
fn original_camel_case_blobs_load_unchanged() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    let blob = r#"[{
        "id": "abc123xyz",
        "title": "Mercado da esquina",
        "amount": 120.5,
        "type": "EXPENSE",
        "category": "mercado",
        "date": "2026-01-15",
        "time": "18:30",
        "timestamp": 1768501800000,
        "installmentsCount": 3,
        "cardId": "card9",
        "paymentMethod": "CREDIT"
    }]"#;
    conn.execute(
        "INSERT INTO blobs(key, value) VALUES('cp_transactions', ?1)",
        params![blob],
    )
    .unwrap();

    let state = AppState::load(conn).unwrap();
    assert_eq!(state.transactions().len(), 1);
    let t = &state.transactions()[0];
    assert_eq!(t.amount, dec("120.5"));
    assert_eq!(t.r#type, TransactionType::Expense);
    assert_eq!(t.installments_count, Some(3));
    assert_eq!(t.card_id.as_deref(), Some("card9"));
    assert_eq!(t.payment_method, PaymentMethod::Credit);
}

#[test]
fn profile_defaults_the_goal_to_three_thousand() {
    let user = User {
        id: "u1".to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        photo: None,
        password: None,
        monthly_goal: None,
    };
    assert_eq!(user.spending_goal(), dec("3000"));
}

#[test]
fn card_lookup_accepts_id_or_bank_name() {
    let mut state = setup();
    state.add_card(card("c1", "Nubank", "1000")).unwrap();
    assert!(state.card_by_ref("c1").is_some());
    assert!(state.card_by_ref("nubank").is_some());
    assert!(state.card_by_ref("Itaú").is_none());
}

#[test]
fn store_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("controle.sqlite");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        let mut state = AppState::load(conn).unwrap();
        state.add_transaction(tx("persisted", "42", PaymentMethod::Pix, None)).unwrap();
        state.add_card(card("c1", "Inter", "500")).unwrap();
        let pid = state.add_project("Reforma").unwrap();
        state.add_supplier(&pid, "Loja A").unwrap();
        state.add_quote_item(&pid, "Loja A", "cimento", dec("40")).unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let state = AppState::load(conn).unwrap();
    assert_eq!(state.transactions().len(), 1);
    assert_eq!(state.transactions()[0].id, "persisted");
    assert_eq!(state.cards()[0].bank, "Inter");
    let project = state.project_by_ref("Reforma").unwrap();
    assert_eq!(project.suppliers.len(), 1);
    assert_eq!(project.suppliers[0].items[0].name, "cimento");
}

#[test]
fn project_mutations_resolve_names_case_insensitively() {
    let mut state = setup();
    let pid = state.add_project("Obra").unwrap();
    state.add_supplier("obra", "Fornecedor X").unwrap();
    state.add_quote_item(&pid, "fornecedor x", "areia", dec("25")).unwrap();
    state.remove_quote_item("OBRA", "Fornecedor X", "areia").unwrap();

    let project = state.project_by_ref(&pid).unwrap();
    assert!(project.suppliers[0].items.is_empty());

    state.delete_project("Obra").unwrap();
    assert!(state.projects().is_empty());
}
