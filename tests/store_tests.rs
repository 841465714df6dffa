// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use expensetrack::db;
use expensetrack::error::{PersistenceError, ValidationError};
use expensetrack::models::{Category, MAX_AMOUNT, NewTransaction, PaymentSource, TransactionType};
use expensetrack::store::{MemorySlots, SLOT_KEY, Slots, TransactionStore};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn expense(amount: &str, merchant: &str, category: &str) -> NewTransaction {
    NewTransaction {
        amount: amount.into(),
        merchant: merchant.into(),
        category: Some(category.into()),
        r#type: TransactionType::Debit,
        source: "UPI".into(),
    }
}

fn income(amount: &str, merchant: &str) -> NewTransaction {
    NewTransaction {
        amount: amount.into(),
        merchant: merchant.into(),
        category: None,
        r#type: TransactionType::Credit,
        source: "Card".into(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

struct BrokenSlots;

impl Slots for BrokenSlots {
    fn read_slot(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Read {
            key: key.to_string(),
            source: rusqlite::Error::InvalidQuery,
        })
    }

    fn write_slot(&self, key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Write {
            key: key.to_string(),
            source: rusqlite::Error::InvalidQuery,
        })
    }
}

#[test]
fn load_without_slot_starts_empty() {
    let store = TransactionStore::load(MemorySlots::new());
    assert!(store.is_empty());
}

#[test]
fn load_from_corrupt_slot_starts_empty() {
    let store = TransactionStore::load(MemorySlots::with_slot(SLOT_KEY, "[{not json"));
    assert!(store.is_empty());

    let store = TransactionStore::load(MemorySlots::with_slot(SLOT_KEY, "null"));
    assert!(store.is_empty());
}

#[test]
fn load_from_unreadable_slot_starts_empty() {
    let store = TransactionStore::load(BrokenSlots);
    assert!(store.is_empty());
}

#[test]
fn load_accepts_numeric_amounts_and_free_form_categories() {
    let raw = r#"[
        {"id": 1717000000000, "amount": 250, "category": "Food", "date": "2025-03-01",
         "source": "UPI", "merchant": "Zomato", "type": "debit"},
        {"id": 1717000000001, "amount": 99.5, "category": "Groceries", "date": "2025-03-02",
         "source": "Card", "merchant": "Corner Shop", "type": "debit"}
    ]"#;
    let store = TransactionStore::load(MemorySlots::with_slot(SLOT_KEY, raw));
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].amount, Decimal::from(250));
    assert_eq!(store.records()[1].amount, Decimal::new(995, 1));
    assert_eq!(store.records()[1].category, Category::Other);
    assert_eq!(store.records()[1].source, PaymentSource::Card);
}

#[test]
fn load_keeps_records_with_unfamiliar_sources() {
    let raw = r#"[
        {"id": 1, "amount": "250", "category": "Food", "date": "2025-03-01",
         "source": "UPI", "merchant": "Zomato", "type": "debit"},
        {"id": 2, "amount": "60", "category": "Transport", "date": "2025-03-02",
         "source": "Cash", "merchant": "Auto", "type": "debit"},
        {"id": 3, "amount": "900", "category": "Bills", "date": "2025-03-03",
         "source": "card", "merchant": "Power Co", "type": "debit"}
    ]"#;
    let mut store = TransactionStore::load(MemorySlots::with_slot(SLOT_KEY, raw));
    assert_eq!(store.len(), 3);
    assert_eq!(store.records()[0].source, PaymentSource::Upi);
    assert_eq!(store.records()[1].source, PaymentSource::Other("Cash".into()));
    assert_eq!(store.records()[2].source, PaymentSource::Card);

    store.append_on(expense("5", "Chai", "Food"), day(4)).unwrap();
    let raw = store.slots().read_slot(SLOT_KEY).unwrap().unwrap();
    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 4);
    assert_eq!(persisted[1]["source"], "Cash");
    assert_eq!(persisted[2]["source"], "Card");
}

#[test]
fn append_rejects_amounts_above_the_limit() {
    let mut store = TransactionStore::load(MemorySlots::new());
    let huge = "50000000000000000000000000000";
    assert_eq!(
        store.append_on(expense(huge, "Zomato", "Food"), day(1)).unwrap_err(),
        ValidationError::AmountTooLarge(huge.parse().unwrap())
    );
    assert!(store.is_empty());

    let tx = store
        .append_on(expense("1000000000000", "Zomato", "Food"), day(1))
        .unwrap();
    assert_eq!(tx.amount, MAX_AMOUNT);
    assert!(store.append_on(expense("1000000000000.01", "Zomato", "Food"), day(1)).is_err());
}

#[test]
fn append_assigns_fresh_ids_after_loaded_records() {
    let raw = r#"[{"id": 41, "amount": "10", "category": "Bills", "date": "2025-03-01",
                   "source": "UPI", "merchant": "Power Co", "type": "debit"}]"#;
    let mut store = TransactionStore::load(MemorySlots::with_slot(SLOT_KEY, raw));
    let a = store.append_on(expense("5", "Metro", "Transport"), day(2)).unwrap();
    let b = store.append_on(expense("7", "Metro", "Transport"), day(2)).unwrap();
    assert_eq!(a.id, 42);
    assert_eq!(b.id, 43);
}

#[test]
fn append_rewrites_the_whole_slot() {
    let mut store = TransactionStore::load(MemorySlots::new());
    store.append_on(expense("250", "Zomato", "Food"), day(1)).unwrap();
    store.append_on(income("20000", "Salary"), day(1)).unwrap();

    let raw = store.slots().read_slot(SLOT_KEY).unwrap().unwrap();
    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0]["merchant"], "Zomato");
    assert_eq!(persisted[1]["category"], "Income");
    assert_eq!(persisted[1]["type"], "credit");
    assert_eq!(persisted[0]["date"], "2025-03-01");
}

#[test]
fn append_uses_today_when_no_date_is_given() {
    let mut store = TransactionStore::load(MemorySlots::new());
    let before = chrono::Local::now().date_naive();
    let tx = store.append(expense("12", "Chai", "Food")).unwrap();
    let after = chrono::Local::now().date_naive();
    assert!(tx.date >= before && tx.date <= after);
}

#[test]
fn append_survives_failed_write() {
    let mut store = TransactionStore::load(BrokenSlots);
    let tx = store.append_on(expense("80", "Cinema", "Entertainment"), day(4)).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0], tx);
}

#[test]
fn credit_is_always_income() {
    let mut store = TransactionStore::load(MemorySlots::new());
    let mut input = income("20000", "Salary");
    input.category = Some("Bills".into());
    let tx = store.append_on(input, day(1)).unwrap();
    assert_eq!(tx.category, Category::Income);
}

#[test]
fn debit_without_category_is_food() {
    let mut store = TransactionStore::load(MemorySlots::new());
    let mut input = expense("40", "Dosa Corner", "");
    input.category = None;
    let tx = store.append_on(input, day(1)).unwrap();
    assert_eq!(tx.category, Category::Food);
}

#[test]
fn invalid_input_is_rejected_without_mutation() {
    let mut store = TransactionStore::load(MemorySlots::new());
    store.append_on(expense("100", "Zomato", "Food"), day(1)).unwrap();
    let before = store.dashboard();

    let cases = [
        (expense("", "Zomato", "Food"), ValidationError::MissingAmount),
        (
            expense("abc", "Zomato", "Food"),
            ValidationError::InvalidAmount("abc".into()),
        ),
        (
            expense("0", "Zomato", "Food"),
            ValidationError::NonPositiveAmount(Decimal::ZERO),
        ),
        (
            expense("-5", "Zomato", "Food"),
            ValidationError::NonPositiveAmount(Decimal::from(-5)),
        ),
        (expense("10", "   ", "Food"), ValidationError::EmptyMerchant),
        (
            expense("10", "Zomato", "Groceries"),
            ValidationError::UnknownCategory("Groceries".into()),
        ),
        (
            expense("10", "Zomato", "Income"),
            ValidationError::UnknownCategory("Income".into()),
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(store.append_on(input, day(2)).unwrap_err(), expected);
    }

    let mut no_source = expense("10", "Zomato", "Food");
    no_source.source = "".into();
    assert_eq!(
        store.append_on(no_source, day(2)).unwrap_err(),
        ValidationError::EmptySource
    );

    assert_eq!(store.len(), 1);
    assert_eq!(store.dashboard(), before);
}

#[test]
fn recent_is_newest_first() {
    let mut store = TransactionStore::load(MemorySlots::new());
    for (i, m) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
        store
            .append_on(expense("1", m, "Other"), day(i as u32 + 1))
            .unwrap();
    }
    let recent: Vec<&str> = store.recent(5).into_iter().map(|t| t.merchant.as_str()).collect();
    assert_eq!(recent, vec!["F", "E", "D", "C", "B"]);
}

#[test]
fn sqlite_slot_round_trips_across_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expensetrack.sqlite");

    {
        let conn = db::open_or_init(Some(path.as_path())).unwrap();
        let mut store = TransactionStore::load(conn);
        store.append_on(expense("250", "Zomato", "Food"), day(1)).unwrap();
        store.append_on(income("20000", "Salary"), day(1)).unwrap();
    }

    let conn = db::open_or_init(Some(path.as_path())).unwrap();
    let store = TransactionStore::load(conn);
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].merchant, "Zomato");
    assert_eq!(store.records()[1].category, Category::Income);
    assert_eq!(store.dashboard().balance, Decimal::from(19750));
}

#[test]
fn sqlite_slot_with_garbage_loads_empty() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.write_slot(SLOT_KEY, "definitely not json").unwrap();
    let store = TransactionStore::load(conn);
    assert!(store.is_empty());
}
