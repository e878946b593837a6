// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::transactions::parse_filters;
use crate::models::Summary;
use crate::storage::Snapshot;
use crate::store::{Ledger, summarize};
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle<S: Snapshot>(ledger: &Ledger<S>, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let summary = compute(ledger, m)?;
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Balance"],
                vec![vec![
                    fmt_amount(&summary.income),
                    fmt_amount(&summary.expense),
                    fmt_amount(&summary.balance),
                ]],
            )
        );
    }
    Ok(())
}

pub fn compute<S: Snapshot>(ledger: &Ledger<S>, m: &clap::ArgMatches) -> Result<Summary> {
    let (r#type, month) = parse_filters(m)?;
    Ok(summarize(ledger.list(r#type, month.as_deref())))
}
