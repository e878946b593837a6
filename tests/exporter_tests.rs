// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::cli;
use pocketledger::commands::exporter;
use pocketledger::ids::SequenceIds;
use pocketledger::models::TransactionKind;
use pocketledger::storage::MemoryStore;
use pocketledger::store::Ledger;
use tempfile::tempdir;

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
            "lunch",
        )
        .unwrap();
    ledger
}

fn export_matches(out: &str, extra: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["pocketledger", "export", "--out", out];
    argv.extend_from_slice(extra);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    sub.clone()
}

#[test]
fn export_csv_writes_header_and_rows() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    let sub = export_matches(out.to_str().unwrap(), &["--format", "csv"]);

    exporter::handle(&ledger, &sub).unwrap();

    let raw = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,type,amount,category,date,description,createdAt"
    );
    assert!(lines[1].contains("expense"));
    assert!(lines[1].contains("20.00"));
}

#[test]
fn export_json_respects_filters() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.json");
    let sub = export_matches(
        out.to_str().unwrap(),
        &["--format", "json", "--type", "income"],
    );

    exporter::handle(&ledger, &sub).unwrap();

    let raw = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["category"], "Salary");
    assert_eq!(arr[0]["amount"], "1000.00");
}
