// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;
use chrono::Local;

use crate::models::{Transaction, TransactionKind};
use crate::storage::Snapshot;
use crate::store::Ledger;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, parse_month, pretty_table};

pub fn handle<S: Snapshot>(ledger: &mut Ledger<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub),
        Some(("list", sub)) => list(ledger, sub),
        Some(("delete", sub)) => delete(ledger, sub),
        _ => Ok(()),
    }
}

fn add<S: Snapshot>(ledger: &mut Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let r#type = TransactionKind::from_str(sub.get_one::<String>("type").unwrap())?;
    let amount = sub.get_one::<String>("amount").unwrap();
    let category = sub.get_one::<String>("category").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let note = sub
        .get_one::<String>("note")
        .map(String::as_str)
        .unwrap_or("");

    let tx = ledger.add(r#type, amount, category, date, note)?;
    println!(
        "Recorded {} {} for '{}' on {} (id: {})",
        tx.r#type,
        fmt_amount(&tx.amount),
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

/// Shared `--type`/`--month` handling; "all" and an absent month mean no
/// filter.
pub fn parse_filters(sub: &clap::ArgMatches) -> Result<(Option<TransactionKind>, Option<String>)> {
    let r#type = match sub.get_one::<String>("type").map(String::as_str) {
        None | Some("all") => None,
        Some(other) => Some(TransactionKind::from_str(other)?),
    };
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    Ok((r#type, month))
}

pub fn query_rows<'a, S: Snapshot>(
    ledger: &'a Ledger<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<&'a Transaction>> {
    let (r#type, month) = parse_filters(sub)?;
    let mut data = ledger.list(r#type, month.as_deref());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn list<S: Snapshot>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    fmt_amount(&t.amount),
                    t.description.clone(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Amount", "Note", "Id"], rows)
        );
    }
    Ok(())
}

fn delete<S: Snapshot>(ledger: &mut Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if ledger.delete(id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}
