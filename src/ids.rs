// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use uuid::Uuid;

/// Source of transaction ids. Injected into the ledger so id assignment is
/// deterministic under test.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the default in production.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter, handy for tests.
#[derive(Debug, Default)]
pub struct SequenceIds {
    next: u64,
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}
