// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! cryptoload-provider — loads the process-global parts of the crypto stack
//! on demand, and never twice.
//!
//! [`CryptoProvider`] remembers which [`Component`]s it has initialized and
//! skips them on later requests.  The side-effecting work sits behind the
//! [`ComponentLoader`] trait; [`RustlsLoader`] is the production loader for
//! the rustls + ring stack.  Use [`SharedCryptoProvider`] (or [`global`])
//! when several threads may request components.

pub mod loader;
pub mod provider;
pub mod registry;
pub mod rustls_loader;
pub mod shared;

#[cfg(test)]
mod test_support;

use std::sync::OnceLock;

pub use cryptoload_core::{Component, CryptoLoadError, LoadedSet, ProviderConfig};
pub use loader::ComponentLoader;
pub use provider::CryptoProvider;
pub use registry::{ErrorCode, ErrorLibrary};
pub use rustls_loader::RustlsLoader;
pub use shared::SharedCryptoProvider;

/// The process-wide provider backed by [`RustlsLoader`].
///
/// Code that only ever goes through this handle gets each component
/// initialized at most once per process.
pub fn global() -> &'static SharedCryptoProvider<RustlsLoader> {
    static GLOBAL: OnceLock<SharedCryptoProvider<RustlsLoader>> = OnceLock::new();
    GLOBAL.get_or_init(|| SharedCryptoProvider::new(RustlsLoader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_a_singleton() {
        assert!(std::ptr::eq(global(), global()));
    }

    #[test]
    fn global_loads_through_rustls() {
        global().load([Component::Digests, Component::Ciphers]);
        assert!(global().is_loaded(Component::Digests));
        assert!(registry::digest_by_name("sha256").is_some());
        assert!(registry::cipher_by_name("aes-256-gcm").is_some());
    }
}
