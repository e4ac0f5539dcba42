// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Production loader for the rustls + ring stack.
//
// Each routine mutates process-wide state: the rustls default crypto
// provider, or one of the tables in `registry`.

use rustls::crypto::CryptoProvider as RustlsCryptoProvider;
use tracing::{debug, instrument};

use crate::loader::ComponentLoader;
use crate::registry::{self, ErrorLibrary};

/// [`ComponentLoader`] that initializes rustls and the ring registries.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustlsLoader;

impl ComponentLoader for RustlsLoader {
    /// Install ring as the process-default rustls crypto provider.
    ///
    /// If another default is already installed it is kept.
    #[instrument(skip_all)]
    fn init_ssl(&self) {
        if RustlsCryptoProvider::get_default().is_some() {
            debug!("rustls default crypto provider already installed, keeping it");
            return;
        }

        match RustlsCryptoProvider::install_default(rustls::crypto::ring::default_provider()) {
            Ok(()) => debug!("installed ring as the rustls default crypto provider"),
            // Lost a race with another installer; theirs stays.
            Err(_) => debug!("rustls default crypto provider installed concurrently, keeping it"),
        }
    }

    fn add_all_digests(&self) {
        registry::register_all_digests();
    }

    fn add_all_ciphers(&self) {
        registry::register_all_ciphers();
    }

    fn load_crypto_strings(&self) {
        registry::load_error_strings(ErrorLibrary::Crypto);
    }

    fn load_ssl_strings(&self) {
        registry::load_error_strings(ErrorLibrary::Ssl);
    }
}
