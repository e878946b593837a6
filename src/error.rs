// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Input errors a caller can correct and retry. These block the mutation and
/// are surfaced synchronously; they are never logged as system failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid amount: expected a positive number")]
    InvalidAmount,
    #[error("Category must not be empty")]
    MissingCategory,
}
