// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Info,
    Success,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

static SAMPLE: [Notification; 3] = [
    Notification {
        id: 1,
        title: "High Spending Alert",
        message: "Food expenses 15% above budget",
        time: "2h ago",
        kind: NotificationKind::Warning,
    },
    Notification {
        id: 2,
        title: "New Transaction",
        message: "₹250 spent at Zomato",
        time: "5h ago",
        kind: NotificationKind::Info,
    },
    Notification {
        id: 3,
        title: "Saving Tip",
        message: "Switch to metro to save ₹500/month",
        time: "1d ago",
        kind: NotificationKind::Success,
    },
];

/// The fixed notification cards shown in the alerts view.
pub fn sample() -> &'static [Notification] {
    &SAMPLE
}
