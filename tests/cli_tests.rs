// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::cli;
use pocketledger::commands::{summary, transactions};
use pocketledger::ids::SequenceIds;
use pocketledger::models::TransactionKind;
use pocketledger::storage::MemoryStore;
use pocketledger::store::Ledger;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn setup() -> Ledger<MemoryStore> {
    let mut ledger = Ledger::open(MemoryStore::new(), Box::new(SequenceIds::default())).unwrap();
    ledger
        .add(
            TransactionKind::Income,
            "1000",
            "Salary",
            date("2024-03-01"),
            "",
        )
        .unwrap();
    ledger
        .add(
            TransactionKind::Expense,
            "19.999",
            "Food",
            date("2024-03-05"),
            "",
        )
        .unwrap();
    ledger
        .add(
            TransactionKind::Expense,
            "42",
            "Rent",
            date("2024-04-01"),
            "",
        )
        .unwrap();
    ledger
}

fn tx_list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["pocketledger", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let ledger = setup();
    let list_m = tx_list_matches(&["--limit", "2"]);
    let rows = transactions::query_rows(&ledger, &list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, date("2024-04-01"));
}

#[test]
fn list_type_and_month_filters() {
    let ledger = setup();
    let list_m = tx_list_matches(&["--type", "expense", "--month", "2024-03"]);
    let rows = transactions::query_rows(&ledger, &list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Food");
}

#[test]
fn list_rejects_bad_month() {
    let ledger = setup();
    let list_m = tx_list_matches(&["--month", "2024-13"]);
    assert!(transactions::query_rows(&ledger, &list_m).is_err());
}

#[test]
fn list_rejects_bad_type() {
    let ledger = setup();
    let list_m = tx_list_matches(&["--type", "refund"]);
    assert!(transactions::query_rows(&ledger, &list_m).is_err());
}

#[test]
fn summary_over_filtered_month() {
    let ledger = setup();
    let matches = cli::build_cli().get_matches_from(["pocketledger", "summary", "--month", "2024-03"]);
    let Some(("summary", sum_m)) = matches.subcommand() else {
        panic!("no summary subcommand");
    };
    let s = summary::compute(&ledger, sum_m).unwrap();
    assert_eq!(s.income.to_string(), "1000.00");
    assert_eq!(s.expense.to_string(), "20.00");
    assert_eq!(s.balance.to_string(), "980.00");
}
