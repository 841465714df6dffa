// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" | "expense" => Ok(TransactionType::Debit),
            "credit" | "income" => Ok(TransactionType::Credit),
            other => Err(ValidationError::UnknownType(other.to_string())),
        }
    }
}

/// Spending category. Debits use one of the first five; credits are always `Income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Bills,
    Other,
    Income,
}

impl Category {
    /// Categories a debit may be filed under, in form order.
    pub const EXPENSE: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Other => "Other",
            Category::Income => "Income",
        }
    }

    fn parse_label(s: &str) -> Option<Category> {
        let s = s.trim();
        Category::EXPENSE
            .iter()
            .chain(std::iter::once(&Category::Income))
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
    }

    /// Parses a category a debit can be filed under.
    pub fn parse_expense(s: &str) -> Result<Category, ValidationError> {
        match Category::parse_label(s) {
            Some(Category::Income) | None => Err(ValidationError::UnknownCategory(s.to_string())),
            Some(c) => Ok(c),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored labels are free-form; anything unrecognised is filed as Other.
impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse_label(&s).unwrap_or(Category::Other)
    }
}

/// Payment channel. New entries use `UPI` or `Card`; other labels found in
/// stored data are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentSource {
    Upi,
    Card,
    Other(String),
}

impl PaymentSource {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentSource::Upi => "UPI",
            PaymentSource::Card => "Card",
            PaymentSource::Other(label) => label,
        }
    }

    fn parse_known(s: &str) -> Option<PaymentSource> {
        if s.eq_ignore_ascii_case("upi") {
            Some(PaymentSource::Upi)
        } else if s.eq_ignore_ascii_case("card") {
            Some(PaymentSource::Card)
        } else {
            None
        }
    }
}

impl fmt::Display for PaymentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Accepts only the channels offered for new transactions.
impl FromStr for PaymentSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::EmptySource);
        }
        PaymentSource::parse_known(s).ok_or_else(|| ValidationError::UnknownSource(s.to_string()))
    }
}

impl From<String> for PaymentSource {
    fn from(s: String) -> Self {
        PaymentSource::parse_known(s.trim()).unwrap_or(PaymentSource::Other(s))
    }
}

impl From<PaymentSource> for String {
    fn from(source: PaymentSource) -> Self {
        source.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub source: PaymentSource,
    pub merchant: String,
    pub r#type: TransactionType,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.r#type == TransactionType::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.r#type == TransactionType::Credit
    }
}

/// Raw input for a new transaction, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: String,
    pub merchant: String,
    pub category: Option<String>,
    pub r#type: TransactionType,
    pub source: String,
}

impl NewTransaction {
    /// Validates the input and builds the record it describes.
    ///
    /// Credits are always filed under `Income`. A debit without a category
    /// goes under `Food`, the first choice offered when adding an expense.
    pub fn into_transaction(self, id: i64, date: NaiveDate) -> Result<Transaction, ValidationError> {
        let amount = parse_amount(&self.amount)?;
        let merchant = self.merchant.trim();
        if merchant.is_empty() {
            return Err(ValidationError::EmptyMerchant);
        }
        let source = self.source.parse::<PaymentSource>()?;
        let category = match self.r#type {
            TransactionType::Credit => Category::Income,
            TransactionType::Debit => match self.category.as_deref().map(str::trim) {
                None | Some("") => Category::Food,
                Some(label) => Category::parse_expense(label)?,
            },
        };
        Ok(Transaction {
            id,
            amount,
            category,
            date,
            source,
            merchant: merchant.to_string(),
            r#type: self.r#type,
        })
    }
}

/// Largest amount accepted for a single transaction: one trillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount = raw
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(amount)
}
