// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cryptoload — Core types and error definitions shared across all crates.

pub mod component;
pub mod config;
pub mod error;

pub use component::{Component, LoadedSet};
pub use config::ProviderConfig;
pub use error::{CryptoLoadError, Result};
