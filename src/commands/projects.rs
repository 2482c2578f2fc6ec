// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow, bail};
use serde_json::json;

use crate::quotes::{Selection, best_prices, near_miss_names, ranking};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let id = state.add_project(name)?;
            println!("Created project '{}' ({})", name.trim(), id);
            Ok(())
        }
        Some(("list", sub)) => list(state, sub),
        Some(("rm", sub)) => {
            let reference = sub.get_one::<String>("name").unwrap().trim();
            state.delete_project(reference)?;
            println!("Deleted project '{}'", reference);
            Ok(())
        }
        Some(("supplier", sup)) => match sup.subcommand() {
            Some(("add", sub)) => {
                let project = sub.get_one::<String>("project").unwrap();
                let name = sub.get_one::<String>("name").unwrap();
                let id = state.add_supplier(project, name)?;
                println!("Added supplier '{}' ({}) to '{}'", name.trim(), id, project);
                Ok(())
            }
            _ => Ok(()),
        },
        Some(("item", item)) => match item.subcommand() {
            Some(("add", sub)) => {
                let project = sub.get_one::<String>("project").unwrap();
                let supplier = sub.get_one::<String>("supplier").unwrap();
                let name = sub.get_one::<String>("name").unwrap();
                let price = parse_decimal(sub.get_one::<String>("price").unwrap())?;
                if price < rust_decimal::Decimal::ZERO {
                    bail!("Price must not be negative");
                }
                state.add_quote_item(project, supplier, name, price)?;
                println!("Quoted '{}' at {} under '{}'", name.trim(), fmt_money(&price), supplier);
                Ok(())
            }
            Some(("rm", sub)) => {
                let project = sub.get_one::<String>("project").unwrap();
                let supplier = sub.get_one::<String>("supplier").unwrap();
                let name = sub.get_one::<String>("name").unwrap();
                state.remove_quote_item(project, supplier, name)?;
                println!("Removed '{}' from '{}'", name, supplier);
                Ok(())
            }
            _ => Ok(()),
        },
        Some(("compare", sub)) => compare(state, sub),
        _ => Ok(()),
    }
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.projects())? {
        let rows: Vec<Vec<String>> = state
            .projects()
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.suppliers.len().to_string(),
                    p.suppliers.iter().map(|s| s.items.len()).sum::<usize>().to_string(),
                    p.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Project", "Suppliers", "Quotes", "Id"], rows)
        );
    }
    Ok(())
}

fn compare(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let reference = sub.get_one::<String>("project").unwrap();
    let project = state
        .project_by_ref(reference)
        .ok_or_else(|| anyhow!("Project '{}' not found", reference))?;

    let ranked = ranking(project);
    let items = best_prices(project);

    // --pick toggles, applied in order; picking the same name twice is a
    // no-op by design.
    let mut selection = Selection::new();
    if let Some(picks) = sub.get_many::<String>("pick") {
        for pick in picks {
            let item = items
                .iter()
                .find(|i| i.name == *pick)
                .ok_or_else(|| anyhow!("Item '{}' is not quoted in this project", pick))?;
            selection.toggle(&item.name, &item.best_supplier, item.best_price);
        }
    }

    if json_flag || jsonl_flag {
        let payload = json!({
            "project": project.name,
            "ranking": ranked,
            "items": items,
            "selection": selection,
            "selectionTotal": selection.total(),
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }

    let rank_rows: Vec<Vec<String>> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                format!("{}º", i + 1),
                r.name.clone(),
                fmt_money(&r.total),
                r.items_count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Rank", "Supplier", "Total", "Items"], rank_rows)
    );

    let item_rows: Vec<Vec<String>> = items
        .iter()
        .map(|i| {
            vec![
                i.name.clone(),
                fmt_money(&i.best_price),
                i.best_supplier.clone(),
                if i.single_source {
                    "single source".to_string()
                } else {
                    format!("saves {}", fmt_money(&i.delta))
                },
                if selection.contains(&i.name) { "✔".to_string() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Item", "Best price", "Supplier", "Vs next offer", "Picked"], item_rows)
    );

    for (a, b) in near_miss_names(project) {
        println!(
            "note: '{}' and '{}' differ only by case/spacing and are compared as different items",
            a, b
        );
    }

    if !selection.is_empty() {
        println!(
            "Selected {} item(s), total {}",
            selection.len(),
            fmt_money(&selection.total())
        );
    }
    Ok(())
}
