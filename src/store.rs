// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ValidationError;
use crate::ids::{IdSource, UuidIds};
use crate::models::{Summary, Transaction, TransactionKind};
use crate::storage::{JsonFileStore, Snapshot};

/// The authoritative ordered list of transactions, newest first, mirrored to
/// a durable snapshot after every mutation.
pub struct Ledger<S: Snapshot> {
    transactions: Vec<Transaction>,
    storage: S,
    ids: Box<dyn IdSource>,
}

impl Ledger<JsonFileStore> {
    /// Ledger over the default snapshot file with UUID ids.
    pub fn open_default() -> Result<Self> {
        Self::open(JsonFileStore::open_default()?, Box::new(UuidIds))
    }
}

impl<S: Snapshot> Ledger<S> {
    /// Load the last persisted snapshot; a missing or corrupt snapshot
    /// starts the ledger empty.
    pub fn open(storage: S, ids: Box<dyn IdSource>) -> Result<Self> {
        let transactions = storage.load()?;
        Ok(Self {
            transactions,
            storage,
            ids,
        })
    }

    /// Validate and record a new transaction. The raw amount must parse as a
    /// positive decimal and the category must be non-empty after trimming;
    /// either failure leaves the ledger untouched. On success the record is
    /// prepended, the full list is persisted, and the record is returned.
    pub fn add(
        &mut self,
        r#type: TransactionKind,
        raw_amount: &str,
        category: &str,
        date: NaiveDate,
        description: &str,
    ) -> Result<Transaction> {
        let amount = parse_amount(raw_amount)?;
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory.into());
        }

        // Id sources always advance, so this terminates; the re-draw covers
        // a counter source restarted over an existing snapshot.
        let mut id = self.ids.next_id();
        while self.transactions.iter().any(|t| t.id == id) {
            id = self.ids.next_id();
        }

        let tx = Transaction {
            id,
            r#type,
            amount,
            category: category.to_string(),
            date,
            description: description.trim().to_string(),
            created_at: Utc::now(),
        };
        self.transactions.insert(0, tx.clone());
        self.storage
            .save(&self.transactions)
            .context("Persist ledger after add")?;
        Ok(tx)
    }

    /// Transactions matching the filters, in store order (newest first).
    /// `None` type matches both kinds; an empty or absent month matches every
    /// date. The month filter is a string-prefix match of `YYYY-MM` against
    /// the ISO date.
    pub fn list(
        &self,
        r#type: Option<TransactionKind>,
        month: Option<&str>,
    ) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| {
                if let Some(kind) = r#type {
                    if t.r#type != kind {
                        return false;
                    }
                }
                if let Some(m) = month {
                    if !m.is_empty() && !t.date.to_string().starts_with(m) {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// Remove the transaction with the given id and persist. An unknown id is
    /// not an error; the snapshot is rewritten either way. Returns whether a
    /// record was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        self.storage
            .save(&self.transactions)
            .context("Persist ledger after delete")?;
        Ok(removed)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Sum a sequence of transactions by kind. Pure; operates on whatever
/// sequence is passed (typically the result of `Ledger::list`).
pub fn summarize<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionKind::Income => income += t.amount,
            TransactionKind::Expense => expense += t.amount,
        }
    }
    let mut balance = income - expense;
    income.rescale(2);
    expense.rescale(2);
    balance.rescale(2);
    Summary {
        income,
        expense,
        balance,
    }
}

/// Parse a raw amount and normalize it to exactly two fractional digits,
/// rounding halves away from zero.
fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    Ok(amount)
}
