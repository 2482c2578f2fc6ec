// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;

use controle::models::{PaymentMethod, TransactionType};
use controle::state::AppState;
use controle::{cli, commands};

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

#[test]
fn tx_add_records_with_defaults() {
    let mut state = setup();
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["controle", "tx", "add", "--title", "Mercado", "--amount", "52.30"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        commands::transactions::handle(&mut state, tx_m).unwrap();
    } else {
        panic!("tx command not parsed");
    }

    assert_eq!(state.transactions().len(), 1);
    let t = &state.transactions()[0];
    assert_eq!(t.title, "Mercado");
    assert_eq!(t.amount, dec("52.30"));
    assert_eq!(t.r#type, TransactionType::Expense);
    assert_eq!(t.payment_method, PaymentMethod::Pix);
    assert_eq!(t.category, "outras_despesas");
    assert_eq!(t.installments_count, Some(1));
}

#[test]
fn tx_add_rejects_a_zero_amount() {
    let mut state = setup();
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["controle", "tx", "add", "--title", "Nada", "--amount", "0"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        let err = commands::transactions::handle(&mut state, tx_m).unwrap_err();
        assert!(err.to_string().contains("amount must be greater than zero"));
    } else {
        panic!("tx command not parsed");
    }
    assert!(state.transactions().is_empty());
}

#[test]
fn credit_purchase_through_the_cli_spends_down_the_card() {
    let mut state = setup();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "controle", "card", "add", "--bank", "Nubank", "--limit", "1000",
    ]);
    if let Some(("card", card_m)) = matches.subcommand() {
        commands::cards::handle(&mut state, card_m).unwrap();
    } else {
        panic!("card command not parsed");
    }

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "controle",
        "tx",
        "add",
        "--title",
        "Notebook",
        "--amount",
        "900",
        "--method",
        "credit",
        "--card",
        "Nubank",
        "--installments",
        "3",
        "--date",
        "2026-02-10",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        commands::transactions::handle(&mut state, tx_m).unwrap();
    } else {
        panic!("tx command not parsed");
    }

    assert_eq!(state.cards()[0].limit, dec("100"));
    let t = &state.transactions()[0];
    assert_eq!(t.installments_count, Some(3));
    assert_eq!(t.card_id.as_deref(), Some(state.cards()[0].id.as_str()));
}

#[test]
fn special_loan_defaults_to_given() {
    let mut state = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "controle", "special", "loan", "--amount", "150", "--person", "João", "--due",
        "2026-08-10",
    ]);
    if let Some(("special", sp_m)) = matches.subcommand() {
        commands::special::handle(&mut state, sp_m).unwrap();
    } else {
        panic!("special command not parsed");
    }

    let t = &state.transactions()[0];
    assert_eq!(t.r#type, TransactionType::LoanGiven);
    assert!(t.is_special());
    assert_eq!(t.title, "Empréstimo p/ João");
    assert_eq!(t.person_name.as_deref(), Some("João"));
    assert!(t.payment_date.is_some());
}

#[test]
fn tx_list_limit_parses_as_usize() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "controle", "tx", "list", "--limit", "2", "--month", "2026-03",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            assert_eq!(list_m.get_one::<usize>("limit"), Some(&2));
            assert_eq!(list_m.get_one::<String>("month").unwrap(), "2026-03");
            assert!(!list_m.get_flag("raw"));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn report_compare_parses_its_range() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "controle", "report", "compare", "--from", "2026-01-01", "--to", "2026-01-31", "--json",
    ]);
    if let Some(("report", rep_m)) = matches.subcommand() {
        if let Some(("compare", cmp_m)) = rep_m.subcommand() {
            assert_eq!(cmp_m.get_one::<String>("from").unwrap(), "2026-01-01");
            assert_eq!(cmp_m.get_one::<String>("to").unwrap(), "2026-01-31");
            assert!(cmp_m.get_flag("json"));
        } else {
            panic!("no compare subcommand");
        }
    } else {
        panic!("no report subcommand");
    }
}

#[test]
fn project_compare_accepts_repeated_picks() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "controle", "project", "compare", "--project", "Obra", "--pick", "cimento", "--pick",
        "areia",
    ]);
    if let Some(("project", proj_m)) = matches.subcommand() {
        if let Some(("compare", cmp_m)) = proj_m.subcommand() {
            let picks: Vec<&String> = cmp_m.get_many::<String>("pick").unwrap().collect();
            assert_eq!(picks.len(), 2);
        } else {
            panic!("no compare subcommand");
        }
    } else {
        panic!("no project subcommand");
    }
}
