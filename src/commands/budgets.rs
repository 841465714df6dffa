// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{BudgetLine, Tier};
use crate::budget::Budget;
use crate::store::{Slots, TransactionStore};
use crate::utils::{maybe_print_json, pretty_table, progress_bar, CURRENCY_SYMBOL};
use anyhow::Result;

const BAR_WIDTH: usize = 20;

pub fn handle<S: Slots>(store: &TransactionStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budget = Budget::default();
    let lines = store.budget_status(&budget);
    for line in lines.iter().filter(|l| l.tier != Tier::Ok) {
        tracing::debug!(
            "{} at {:.0}% of its limit ({})",
            line.category,
            line.percentage,
            line.tier.as_str()
        );
    }
    if !maybe_print_json(json_flag, jsonl_flag, &lines)? {
        println!(
            "{}",
            pretty_table(&["Category", "Spent / Limit", "Progress", "Status"], budget_rows(&lines))
        );
        println!("Monthly total limit: {}{}", CURRENCY_SYMBOL, budget.total);
    }
    Ok(())
}

pub fn budget_rows(lines: &[BudgetLine]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|l| {
            vec![
                l.category.to_string(),
                format!(
                    "{sym}{:.0} / {sym}{}",
                    l.spent,
                    l.limit,
                    sym = CURRENCY_SYMBOL
                ),
                format!("{} {:.0}%", progress_bar(l.progress, BAR_WIDTH), l.percentage),
                l.tier.as_str().to_string(),
            ]
        })
        .collect()
}
