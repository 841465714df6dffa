// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("expensetrack")
        .about("ExpenseTrack: smart money management")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Database file (defaults to the platform data dir)")
                .value_parser(value_parser!(PathBuf)),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("add")
                        .about("Record an expense or income")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Amount, a positive number"),
                        )
                        .arg(
                            Arg::new("merchant")
                                .long("merchant")
                                .required(true)
                                .help("Merchant, or income source for credits"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Food|Transport|Entertainment|Bills|Other (ignored for credits)"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("debit")
                                .help("debit (expense) or credit (income)"),
                        )
                        .arg(
                            Arg::new("source")
                                .long("source")
                                .default_value("UPI")
                                .help("UPI|Card"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list").about("Most recent transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .default_value("5")
                            .value_parser(value_parser!(usize)),
                    ),
                )),
        )
        .subcommand(
            Command::new("home")
                .about("Balance, spending, income and budget overview")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("analytics")
                .about("Spending by category and daily spending trend")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(json_args(
            Command::new("budget").about("Budget vs. actual per category"),
        ))
        .subcommand(json_args(Command::new("alerts").about("Notifications")))
}
