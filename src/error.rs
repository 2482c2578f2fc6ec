// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Submit-time rule violations. A failed validation aborts the whole
/// operation; nothing is partially saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyTitle,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("select a card for debit or credit payments")]
    MissingCard,
    #[error("card payments are not available for income entries")]
    CardOnIncome,
    #[error("installments are only valid for credit card payments")]
    InstallmentsWithoutCredit,
    #[error("installment count {0} is outside the accepted 1-24 range")]
    InvalidInstallments(u32),
    #[error("person name is required for special operations")]
    MissingPerson,
    #[error("payment due date is required for special operations")]
    MissingDueDate,
}
