// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the transaction list: totals, spending per category,
//! the chart series and budget utilization.
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! every render.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::budget::Budget;
use crate::models::{Category, Transaction};

/// Debit totals per category, in order of each category's first debit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals(Vec<(Category, Decimal)>);

impl CategoryTotals {
    pub fn get(&self, category: Category) -> Option<Decimal> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Category, Decimal)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        saturating_sum(self.0.iter().map(|(_, v)| *v))
    }

    fn add(&mut self, category: Category, amount: Decimal) {
        match self.0.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total = total.saturating_add(amount),
            None => self.0.push((category, amount)),
        }
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, total) in &self.0 {
            map.serialize_entry(category.as_str(), total)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiePoint {
    pub name: Category,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Short axis label such as "Jan 5".
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub balance: Decimal,
    pub total_spent: Decimal,
    pub total_income: Decimal,
    pub category_totals: CategoryTotals,
    pub pie_series: Vec<PiePoint>,
    pub trend_series: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Ok,
    Warning,
    Over,
}

impl Tier {
    /// Over 100% is `Over`, over 80% is `Warning`, anything else `Ok`.
    pub fn classify(percentage: Decimal) -> Tier {
        if percentage > Decimal::ONE_HUNDRED {
            Tier::Over
        } else if percentage > Decimal::from(80) {
            Tier::Warning
        } else {
            Tier::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Ok => "ok",
            Tier::Warning => "warning",
            Tier::Over => "over",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: Category,
    pub spent: Decimal,
    pub limit: Decimal,
    pub percentage: Decimal,
    /// Width of the progress bar, capped at 100.
    pub progress: Decimal,
    pub tier: Tier,
}

// Sums clamp at the Decimal range; records read back from storage are not
// bound by the per-transaction amount limit.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, a| acc.saturating_add(a))
}

pub fn total_spent(txs: &[Transaction]) -> Decimal {
    saturating_sum(txs.iter().filter(|t| t.is_debit()).map(|t| t.amount))
}

pub fn total_income(txs: &[Transaction]) -> Decimal {
    saturating_sum(txs.iter().filter(|t| t.is_credit()).map(|t| t.amount))
}

pub fn category_totals(txs: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for t in txs.iter().filter(|t| t.is_debit()) {
        totals.add(t.category, t.amount);
    }
    totals
}

pub fn pie_series(totals: &CategoryTotals) -> Vec<PiePoint> {
    totals
        .iter()
        .filter(|(_, v)| *v > Decimal::ZERO)
        .map(|(c, v)| PiePoint {
            name: *c,
            value: *v,
        })
        .collect()
}

/// Debit spending per calendar day, oldest day first.
pub fn trend_series(txs: &[Transaction]) -> Vec<TrendPoint> {
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for t in txs.iter().filter(|t| t.is_debit()) {
        let total = daily.entry(t.date).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount);
    }
    daily
        .into_iter()
        .map(|(date, amount)| TrendPoint {
            date,
            label: day_label(date),
            amount,
        })
        .collect()
}

pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn summarize(txs: &[Transaction]) -> DashboardData {
    let total_spent = total_spent(txs);
    let total_income = total_income(txs);
    let category_totals = category_totals(txs);
    let pie_series = pie_series(&category_totals);
    DashboardData {
        balance: total_income.saturating_sub(total_spent),
        total_spent,
        total_income,
        category_totals,
        pie_series,
        trend_series: trend_series(txs),
    }
}

pub fn budget_line(category: Category, spent: Decimal, limit: Decimal) -> BudgetLine {
    let percentage = if limit > Decimal::ZERO {
        spent
            .checked_div(limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };
    BudgetLine {
        category,
        spent,
        limit,
        percentage,
        progress: percentage.min(Decimal::ONE_HUNDRED),
        tier: Tier::classify(percentage),
    }
}

pub fn budget_status(txs: &[Transaction], budget: &Budget) -> Vec<BudgetLine> {
    let totals = category_totals(txs);
    budget
        .limits
        .iter()
        .map(|(category, limit)| {
            let spent = totals.get(*category).unwrap_or(Decimal::ZERO);
            budget_line(*category, spent, *limit)
        })
        .collect()
}
