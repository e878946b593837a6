// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::transactions::parse_filters;
use crate::storage::Snapshot;
use crate::store::Ledger;

pub fn handle<S: Snapshot>(ledger: &Ledger<S>, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();
    let (r#type, month) = parse_filters(m)?;
    let data = ledger.list(r#type, month.as_deref());

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "type",
                "amount",
                "category",
                "date",
                "description",
                "createdAt",
            ])?;
            for t in &data {
                wtr.write_record([
                    t.id.clone(),
                    t.r#type.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.date.to_string(),
                    t.description.clone(),
                    t.created_at.to_rfc3339(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transaction(s) to {}", data.len(), out);
    Ok(())
}
