// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::ledger::base_id;
use crate::models::{BudgetProject, CreditCard, PaymentMode, QuoteItem, Supplier, Transaction, User};
use crate::store;
use crate::utils::new_id;

/// Owner of every persisted collection. Computations read snapshots;
/// mutations validate first, then update memory and rewrite the affected
/// blob(s) — the store only ever sees whole-collection replacements.
pub struct AppState {
    conn: Connection,
    user: Option<User>,
    transactions: Vec<Transaction>,
    cards: Vec<CreditCard>,
    projects: Vec<BudgetProject>,
}

impl AppState {
    pub fn open() -> Result<Self> {
        Self::load(store::open_or_init()?)
    }

    pub fn load(conn: Connection) -> Result<Self> {
        let user = store::read_blob(&conn, store::USER_KEY)?;
        let transactions =
            store::read_blob(&conn, store::TRANSACTIONS_KEY)?.unwrap_or_default();
        let cards = store::read_blob(&conn, store::CARDS_KEY)?.unwrap_or_default();
        let projects = store::read_blob(&conn, store::PROJECTS_KEY)?.unwrap_or_default();
        Ok(Self { conn, user, transactions, cards, projects })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ---- profile ----

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> Result<&User> {
        self.user
            .as_ref()
            .ok_or_else(|| anyhow!("No profile registered; run 'controle profile register' first"))
    }

    pub fn set_user(&mut self, user: User) -> Result<()> {
        store::write_blob(&self.conn, store::USER_KEY, &user)?;
        self.user = Some(user);
        Ok(())
    }

    // ---- transactions ----

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validates, prepends (newest first) and persists. A referenced card
    /// must exist; its limit is spent down by the transaction amount,
    /// floored at zero.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<()> {
        tx.validate()?;
        let mut card_idx = None;
        if let Some(cid) = &tx.card_id {
            card_idx = Some(
                self.cards
                    .iter()
                    .position(|c| &c.id == cid)
                    .ok_or_else(|| anyhow!("Card '{}' not found", cid))?,
            );
        }
        if let Some(idx) = card_idx {
            let card = &mut self.cards[idx];
            card.limit = (card.limit - tx.amount).max(Decimal::ZERO);
        }
        self.transactions.insert(0, tx);
        store::write_blob(&self.conn, store::TRANSACTIONS_KEY, &self.transactions)?;
        if card_idx.is_some() {
            store::write_blob(&self.conn, store::CARDS_KEY, &self.cards)?;
        }
        Ok(())
    }

    /// Accepts synthetic installment ids and resolves them back to the
    /// stored record. Card limits stay spent down; deletion does not
    /// restore them.
    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let base = base_id(id).to_string();
        if !self.transactions.iter().any(|t| t.id == base) {
            bail!("No transaction with id '{}'", base);
        }
        self.transactions.retain(|t| t.id != base);
        store::write_blob(&self.conn, store::TRANSACTIONS_KEY, &self.transactions)
    }

    // ---- cards ----

    pub fn cards(&self) -> &[CreditCard] {
        &self.cards
    }

    /// Finds a card by id, falling back to a case-insensitive bank match.
    pub fn card_by_ref(&self, reference: &str) -> Option<&CreditCard> {
        self.cards
            .iter()
            .find(|c| c.id == reference)
            .or_else(|| {
                self.cards
                    .iter()
                    .find(|c| c.bank.eq_ignore_ascii_case(reference))
            })
    }

    pub fn add_card(&mut self, card: CreditCard) -> Result<()> {
        self.cards.push(card);
        store::write_blob(&self.conn, store::CARDS_KEY, &self.cards)
    }

    pub fn delete_card(&mut self, reference: &str) -> Result<()> {
        let id = self
            .card_by_ref(reference)
            .map(|c| c.id.clone())
            .ok_or_else(|| anyhow!("Card '{}' not found", reference))?;
        self.cards.retain(|c| c.id != id);
        store::write_blob(&self.conn, store::CARDS_KEY, &self.cards)
    }

    // ---- budget projects ----

    pub fn projects(&self) -> &[BudgetProject] {
        &self.projects
    }

    pub fn project_by_ref(&self, reference: &str) -> Option<&BudgetProject> {
        self.projects
            .iter()
            .find(|p| p.id == reference)
            .or_else(|| {
                self.projects
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(reference))
            })
    }

    fn project_index(&self, reference: &str) -> Result<usize> {
        let id = self
            .project_by_ref(reference)
            .map(|p| p.id.clone())
            .ok_or_else(|| anyhow!("Project '{}' not found", reference))?;
        Ok(self
            .projects
            .iter()
            .position(|p| p.id == id)
            .unwrap_or_default())
    }

    pub fn add_project(&mut self, name: &str) -> Result<String> {
        if name.trim().is_empty() {
            bail!("Project name must not be empty");
        }
        let project = BudgetProject { id: new_id(), name: name.trim().to_string(), suppliers: Vec::new() };
        let id = project.id.clone();
        self.projects.push(project);
        self.persist_projects()?;
        Ok(id)
    }

    pub fn delete_project(&mut self, reference: &str) -> Result<()> {
        let idx = self.project_index(reference)?;
        self.projects.remove(idx);
        self.persist_projects()
    }

    pub fn add_supplier(&mut self, project: &str, name: &str) -> Result<String> {
        if name.trim().is_empty() {
            bail!("Supplier name must not be empty");
        }
        let idx = self.project_index(project)?;
        let supplier = Supplier {
            id: new_id(),
            name: name.trim().to_string(),
            items: Vec::new(),
            payment_mode: PaymentMode::Cash,
            installments: None,
            entry_value: None,
            discount: None,
        };
        let id = supplier.id.clone();
        self.projects[idx].suppliers.push(supplier);
        self.persist_projects()?;
        Ok(id)
    }

    fn supplier_index(&self, project_idx: usize, reference: &str) -> Result<usize> {
        let suppliers = &self.projects[project_idx].suppliers;
        suppliers
            .iter()
            .position(|s| s.id == reference)
            .or_else(|| {
                suppliers
                    .iter()
                    .position(|s| s.name.eq_ignore_ascii_case(reference))
            })
            .ok_or_else(|| anyhow!("Supplier '{}' not found", reference))
    }

    /// Item names are stored exactly as given (trimmed); matching across
    /// suppliers stays case-sensitive.
    pub fn add_quote_item(
        &mut self,
        project: &str,
        supplier: &str,
        name: &str,
        price: Decimal,
    ) -> Result<()> {
        if name.trim().is_empty() {
            bail!("Item name must not be empty");
        }
        let pidx = self.project_index(project)?;
        let sidx = self.supplier_index(pidx, supplier)?;
        self.projects[pidx].suppliers[sidx].items.push(QuoteItem {
            id: new_id(),
            name: name.trim().to_string(),
            price,
        });
        self.persist_projects()
    }

    pub fn remove_quote_item(&mut self, project: &str, supplier: &str, name: &str) -> Result<()> {
        let pidx = self.project_index(project)?;
        let sidx = self.supplier_index(pidx, supplier)?;
        let items = &mut self.projects[pidx].suppliers[sidx].items;
        let before = items.len();
        items.retain(|i| i.name != name && i.id != name);
        if items.len() == before {
            bail!("Item '{}' not found for that supplier", name);
        }
        self.persist_projects()
    }

    fn persist_projects(&self) -> Result<()> {
        store::write_blob(&self.conn, store::PROJECTS_KEY, &self.projects)
    }
}
