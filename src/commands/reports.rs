// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget::Budget;
use crate::commands::budgets::budget_rows;
use crate::commands::transactions::transaction_row;
use crate::store::{Slots, TransactionStore};
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;

const RECENT_ON_HOME: usize = 5;

pub fn home<S: Slots>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let budget = Budget::default();
    let data = store.dashboard();
    let lines = store.budget_status(&budget);

    if sub.get_flag("json") {
        let v = json!({
            "balance": data.balance,
            "total_spent": data.total_spent,
            "total_income": data.total_income,
            "budget": lines,
            "recent": store.recent(RECENT_ON_HOME),
        });
        println!("{}", serde_json::to_string_pretty(&v)?);
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Balance", "Spent", "Income"],
            vec![vec![
                fmt_money(&data.balance),
                fmt_money(&data.total_spent),
                fmt_money(&data.total_income),
            ]],
        )
    );
    println!("Budget Overview");
    println!(
        "{}",
        pretty_table(&["Category", "Spent / Limit", "Progress", "Status"], budget_rows(&lines))
    );
    println!("Recent Transactions");
    let recent = store.recent(RECENT_ON_HOME);
    if recent.is_empty() {
        println!("No transactions yet. Add one!");
    } else {
        let rows = recent.into_iter().map(transaction_row).collect();
        println!(
            "{}",
            pretty_table(&["Date", "Merchant", "Category", "Source", "Amount"], rows)
        );
    }
    Ok(())
}

pub fn analytics<S: Slots>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let data = store.dashboard();

    if sub.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("Spending by Category");
    if data.pie_series.is_empty() {
        println!("No spending data to display.");
    } else {
        let rows = data
            .pie_series
            .iter()
            .map(|p| {
                vec![
                    p.name.to_string(),
                    fmt_money(&p.value),
                    format!("{:.0}%", share(p.value, data.total_spent)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }

    println!("Daily Spending Trend");
    if data.trend_series.is_empty() {
        println!("No spending data for trend chart.");
    } else {
        let rows = data
            .trend_series
            .iter()
            .map(|p| vec![p.label.clone(), fmt_money(&p.amount)])
            .collect();
        println!("{}", pretty_table(&["Date", "Spent"], rows));
    }
    Ok(())
}

fn share(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        value / total * Decimal::ONE_HUNDRED
    }
}
