// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The transaction store: the session's list of transactions, mirrored as a
//! JSON array into a single key-value slot.
//!
//! Persistence is best effort. A slot that cannot be read or parsed loads as
//! an empty list, and a failed write leaves the in-memory append in place.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::aggregate::{self, BudgetLine, DashboardData};
use crate::budget::Budget;
use crate::error::{PersistenceError, ValidationError};
use crate::models::{NewTransaction, Transaction};

/// Name of the slot holding the serialized transaction list.
pub const SLOT_KEY: &str = "expenses";

/// A local key-value store holding whole serialized values under string keys.
pub trait Slots {
    fn read_slot(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn write_slot(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Slots kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySlots {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots pre-filled with `value` under `key`.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let slots = Self::default();
        slots
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        slots
    }
}

impl Slots for MemorySlots {
    fn read_slot(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct TransactionStore<S: Slots> {
    slots: S,
    records: Vec<Transaction>,
}

impl<S: Slots> TransactionStore<S> {
    /// Restores the list persisted in `slots`, or starts empty.
    pub fn load(slots: S) -> Self {
        let records = match read_records(&slots) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("{e}; starting with no transactions");
                Vec::new()
            }
        };
        tracing::debug!("loaded {} transactions", records.len());
        Self { slots, records }
    }

    /// A store holding `records` as-is. Nothing is written until the next append.
    pub fn with_records(slots: S, records: Vec<Transaction>) -> Self {
        Self { slots, records }
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// The `limit` most recently entered transactions, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        self.records.iter().rev().take(limit).collect()
    }

    /// Records a new transaction dated today (local time).
    pub fn append(&mut self, input: NewTransaction) -> Result<Transaction, ValidationError> {
        self.append_on(input, Local::now().date_naive())
    }

    /// Records a new transaction dated `date`.
    pub fn append_on(
        &mut self,
        input: NewTransaction,
        date: NaiveDate,
    ) -> Result<Transaction, ValidationError> {
        let tx = input.into_transaction(self.next_id(), date)?;
        self.records.push(tx.clone());
        if let Err(e) = self.persist() {
            tracing::error!("{e}; transaction {} kept in memory only", tx.id);
        }
        Ok(tx)
    }

    pub fn dashboard(&self) -> DashboardData {
        aggregate::summarize(&self.records)
    }

    pub fn budget_status(&self, budget: &Budget) -> Vec<BudgetLine> {
        aggregate::budget_status(&self.records, budget)
    }

    fn next_id(&self) -> i64 {
        self.records.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        let payload = serde_json::to_string(&self.records)?;
        self.slots.write_slot(SLOT_KEY, &payload)
    }
}

fn read_records<S: Slots>(slots: &S) -> Result<Vec<Transaction>, PersistenceError> {
    let Some(raw) = slots.read_slot(SLOT_KEY)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|source| PersistenceError::Parse {
        key: SLOT_KEY.to_string(),
        source,
    })
}
