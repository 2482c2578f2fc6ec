// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::utils::month_of_timestamp;

/// Spending goal applied when the profile has none set.
pub static DEFAULT_MONTHLY_GOAL: Lazy<Decimal> = Lazy::new(|| Decimal::from(3000));

pub const MAX_INSTALLMENTS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    LoanGiven,
    LoanTaken,
    BocaPurchase,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::LoanGiven => "LOAN_GIVEN",
            TransactionType::LoanTaken => "LOAN_TAKEN",
            TransactionType::BocaPurchase => "BOCA_PURCHASE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Debit,
    Credit,
    Cash,
    Pix,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Debit => "DEBIT",
            PaymentMethod::Credit => "CREDIT",
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Pix => "PIX",
        };
        f.write_str(s)
    }
}

impl PaymentMethod {
    pub fn requires_card(&self) -> bool {
        matches!(self, PaymentMethod::Debit | PaymentMethod::Credit)
    }
}

/// A single ledger record. Immutable once stored; `amount` is the TOTAL
/// purchase value even for multi-installment credit purchases (the
/// per-installment value is derived at read time, never persisted).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    pub time: String,
    /// Epoch milliseconds; the authoritative ordering key.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_installment: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_special_operation: Option<bool>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }

    /// Everything that is not income counts as an outflow: EXPENSE,
    /// LOAN_GIVEN, LOAN_TAKEN and BOCA_PURCHASE.
    pub fn is_outflow(&self) -> bool {
        !self.is_income()
    }

    pub fn is_special(&self) -> bool {
        self.is_special_operation.unwrap_or(false)
    }

    /// Credit purchases split over more than one installment get expanded
    /// into synthetic monthly entries at read time.
    pub fn is_installment_purchase(&self) -> bool {
        self.payment_method == PaymentMethod::Credit
            && self.installments_count.is_some_and(|n| n > 1)
    }

    /// (year, month) bucket derived from the ordering timestamp.
    pub fn month(&self) -> (i32, u32) {
        month_of_timestamp(self.timestamp)
    }

    /// First violated rule, if any. Submit paths must abort before any
    /// write when this fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.payment_method.requires_card() {
            if self.is_income() {
                return Err(ValidationError::CardOnIncome);
            }
            if self.card_id.is_none() {
                return Err(ValidationError::MissingCard);
            }
        }
        if let Some(n) = self.installments_count {
            if n == 0 || n > MAX_INSTALLMENTS {
                return Err(ValidationError::InvalidInstallments(n));
            }
            if n > 1 && self.payment_method != PaymentMethod::Credit {
                return Err(ValidationError::InstallmentsWithoutCredit);
            }
        }
        if self.is_special() {
            if self.person_name.as_deref().map_or(true, |p| p.trim().is_empty()) {
                return Err(ValidationError::MissingPerson);
            }
            if self.payment_date.is_none() {
                return Err(ValidationError::MissingDueDate);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardKind {
    Credit,
    Debit,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CardKind::Credit => "CREDIT",
            CardKind::Debit => "DEBIT",
        })
    }
}

/// `limit` doubles as account balance for DEBIT cards. It is spent down as
/// transactions reference the card and is never restored on deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub bank: String,
    pub limit: Decimal,
    pub available_credit: Decimal,
    pub due_day: u32,
    pub closing_day: u32,
    pub color: String,
    pub is_active: bool,
    pub r#type: CardKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_goal: Option<Decimal>,
}

impl User {
    pub fn spending_goal(&self) -> Decimal {
        self.monthly_goal.unwrap_or(*DEFAULT_MONTHLY_GOAL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    Installments,
    Mixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// Payment terms are recorded but deliberately not factored into totals or
/// rankings; see the comparison engine notes in DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub items: Vec<QuoteItem>,
    pub payment_mode: PaymentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProject {
    pub id: String,
    pub name: String,
    pub suppliers: Vec<Supplier>,
}
