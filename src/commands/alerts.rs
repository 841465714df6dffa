// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::notifications;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = notifications::sample();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|n| {
                vec![
                    n.kind.as_str().to_string(),
                    n.title.to_string(),
                    n.message.to_string(),
                    n.time.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Type", "Title", "Message", "When"], rows));
    }
    Ok(())
}
