// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::store::{Slots, TransactionStore};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: Slots>(store: &mut TransactionStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(store, sub)?;
        }
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Reads the `tx add` arguments into raw transaction input.
pub fn new_transaction(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let arg = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    let r#type = arg("type").parse::<TransactionType>()?;
    Ok(NewTransaction {
        amount: arg("amount"),
        merchant: arg("merchant"),
        category: sub.get_one::<String>("category").cloned(),
        r#type,
        source: arg("source"),
    })
}

pub fn add<S: Slots>(store: &mut TransactionStore<S>, sub: &clap::ArgMatches) -> Result<Transaction> {
    let input = new_transaction(sub)?;
    let tx = store.append(input)?;
    tracing::info!("recorded transaction {}", tx.id);
    let sign = if tx.is_credit() { '+' } else { '-' };
    println!(
        "Recorded {}{} {} on {} at '{}' via {}",
        sign,
        fmt_money(&tx.amount),
        tx.category,
        tx.date,
        tx.merchant,
        tx.source
    );
    Ok(tx)
}

fn list<S: Slots>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&5);
    let data = store.recent(limit);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions yet. Add one!");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data.iter().copied().map(transaction_row).collect();
    println!(
        "{}",
        pretty_table(&["Date", "Merchant", "Category", "Source", "Amount"], rows)
    );
    Ok(())
}

pub fn transaction_row(t: &Transaction) -> Vec<String> {
    let sign = if t.is_credit() { "+" } else { "-" };
    vec![
        t.date.to_string(),
        t.merchant.clone(),
        t.category.to_string(),
        t.source.to_string(),
        format!("{}{}", sign, fmt_money(&t.amount)),
    ]
}
