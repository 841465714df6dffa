// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Category;

/// Monthly spending limits per expense category, plus an overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    pub total: Decimal,
    pub limits: Vec<(Category, Decimal)>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            total: Decimal::from(5000),
            limits: vec![
                (Category::Food, Decimal::from(2000)),
                (Category::Transport, Decimal::from(800)),
                (Category::Entertainment, Decimal::from(500)),
                (Category::Bills, Decimal::from(1000)),
                (Category::Other, Decimal::from(700)),
            ],
        }
    }
}
