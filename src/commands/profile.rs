// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::models::User;
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, new_id, parse_decimal};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("register", sub)) => register(state, sub),
        Some(("show", sub)) => show(state, sub),
        Some(("goal", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            if amount <= rust_decimal::Decimal::ZERO {
                bail!("Goal must be greater than zero");
            }
            let mut user = state.require_user()?.clone();
            user.monthly_goal = Some(amount);
            state.set_user(user)?;
            println!("Monthly spending goal set to {}", fmt_money(&amount));
            Ok(())
        }
        Some(("name", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                bail!("Name must not be empty");
            }
            let mut user = state.require_user()?.clone();
            user.name = name.clone();
            state.set_user(user)?;
            println!("Renamed profile to '{}'", name);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn register(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let email = sub.get_one::<String>("email").unwrap().trim().to_string();
    let password = sub.get_one::<String>("password").unwrap().to_string();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        bail!("Name, email and password are all required");
    }
    let monthly_goal = match sub.get_one::<String>("goal") {
        Some(g) => Some(parse_decimal(g)?),
        None => None,
    };

    let user = User {
        id: new_id(),
        name: name.clone(),
        email: email.clone(),
        photo: Some(format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", email)),
        password: Some(password),
        monthly_goal,
    };
    state.set_user(user)?;
    println!("Profile registered for {} <{}>", name, email);
    Ok(())
}

fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = state.require_user()?;
    if !maybe_print_json(json_flag, jsonl_flag, user)? {
        println!("{} <{}>", user.name, user.email);
        println!("Monthly spending goal: {}", fmt_money(&user.spending_goal()));
        if let Some(photo) = &user.photo {
            println!("Photo: {}", photo);
        }
    }
    Ok(())
}
