// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print results as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print results as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .value_name("TYPE")
            .help("Filter by type: all, income or expense")
            .default_value("all"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .value_name("YYYY-MM")
            .help("Only transactions in this calendar month"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .version(crate_version!())
        .about("Pocket-sized income/expense tracker backed by a JSON snapshot")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("income or expense")
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .help("Positive amount, rounded to 2 decimal places")
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME")
                                .required(true),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("note").long("note").value_name("TEXT")),
                )
                .subcommand(json_flags(filter_args(
                    Command::new("list").about("List transactions, newest first").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_name("N")
                            .value_parser(value_parser!(usize)),
                    ),
                )))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").value_name("ID").required(true)),
                ),
        )
        .subcommand(json_flags(filter_args(
            Command::new("summary").about("Income, expense and balance totals"),
        )))
        .subcommand(filter_args(
            Command::new("export")
                .about("Export transactions to CSV or JSON")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FMT")
                        .help("csv or json")
                        .default_value("csv"),
                ),
        ))
        .subcommand(Command::new("path").about("Print the snapshot file location"))
}
