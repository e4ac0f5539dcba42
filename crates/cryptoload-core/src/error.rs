// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for cryptoload.
//
// Loading a component never fails; these errors only come from the
// surrounding API (parsing names, reading configuration).

use thiserror::Error;

/// Top-level error type for all cryptoload operations.
#[derive(Debug, Error)]
pub enum CryptoLoadError {
    #[error("unknown component: {0:?}")]
    UnknownComponent(String),

    #[error("invalid provider configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CryptoLoadError>;
