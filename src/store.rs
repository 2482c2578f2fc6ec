// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Controle", "controle"));

/// Fixed blob keys. Each holds one JSON-serialized collection; writes
/// always replace the whole value.
pub const USER_KEY: &str = "cp_user";
pub const TRANSACTIONS_KEY: &str = "cp_transactions";
pub const CARDS_KEY: &str = "cp_cards";
pub const PROJECTS_KEY: &str = "cp_budgets";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("controle.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = store_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS blobs(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

/// Absent key or malformed JSON both read as `None`; there is no schema
/// migration path, so stale blobs fall back to empty data instead of
/// failing every command.
pub fn read_blob<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let raw = read_raw(conn, key)?;
    Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
}

pub fn read_raw(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM blobs WHERE key=?1", params![key], |r| r.get(0))
        .optional()?;
    Ok(v)
}

pub fn write_blob<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO blobs(key, value, updated_at) VALUES(?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
        params![key, json],
    )?;
    Ok(())
}

/// Manual reset path for a single key.
pub fn clear_blob(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM blobs WHERE key=?1", params![key])?;
    Ok(())
}
