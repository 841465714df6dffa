// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for recording transactions and for the persisted slot.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection of a new transaction. Raised before the store is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount is required")]
    MissingAmount,

    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Amount {0} exceeds the largest allowed amount")]
    AmountTooLarge(Decimal),

    #[error("Merchant is required")]
    EmptyMerchant,

    #[error("Payment source is required")]
    EmptySource,

    #[error("Unknown payment source '{0}' (use UPI|Card)")]
    UnknownSource(String),

    #[error("Unknown category '{0}' (use Food|Transport|Entertainment|Bills|Other)")]
    UnknownCategory(String),

    #[error("Unknown transaction type '{0}' (use debit|credit)")]
    UnknownType(String),
}

/// Failure reading or writing the key-value slot that mirrors the store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Could not read slot '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Could not write slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Slot '{key}' holds unparseable data: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode transactions: {0}")]
    Encode(#[from] serde_json::Error),
}
