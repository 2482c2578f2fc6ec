// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::catalog::{CATALOG, CategoryKind, normalize};
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
struct CategoryRow<'a> {
    id: &'a str,
    name: &'a str,
    icon: &'a str,
    color: &'a str,
    kind: &'a str,
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let income_only = m.get_flag("income");
    let expense_only = m.get_flag("expense");
    let search = m.get_one::<String>("search").map(|s| normalize(s));

    let entries: Vec<_> = CATALOG
        .iter()
        .filter(|c| {
            if income_only && c.kind != CategoryKind::Income {
                return false;
            }
            if expense_only && c.kind != CategoryKind::Expense {
                return false;
            }
            match &search {
                Some(needle) => normalize(c.name).contains(needle.as_str()),
                None => true,
            }
        })
        .collect();

    let data: Vec<CategoryRow> = entries
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name,
            icon: c.icon,
            color: c.color,
            kind: match c.kind {
                CategoryKind::Income => "INCOME",
                CategoryKind::Expense => "EXPENSE",
            },
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    format!("{} {}", c.icon, c.name),
                    c.kind.to_string(),
                    c.color.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Key", "Name", "Kind", "Color"], rows));
    }
    Ok(())
}
