// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test-only loader that records which routines ran, in order.

use std::sync::{Mutex, PoisonError};

use cryptoload_core::Component;

use crate::loader::ComponentLoader;

#[derive(Debug, Default)]
pub(crate) struct RecordingLoader {
    calls: Mutex<Vec<Component>>,
}

impl RecordingLoader {
    fn record(&self, component: Component) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(component);
    }

    /// Every routine invocation so far, in call order.
    pub(crate) fn calls(&self) -> Vec<Component> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn count(&self, component: Component) -> usize {
        self.calls().iter().filter(|c| **c == component).count()
    }
}

impl ComponentLoader for RecordingLoader {
    fn init_ssl(&self) {
        self.record(Component::Ssl);
    }

    fn add_all_digests(&self) {
        self.record(Component::Digests);
    }

    fn add_all_ciphers(&self) {
        self.record(Component::Ciphers);
    }

    fn load_crypto_strings(&self) {
        self.record(Component::CryptoErrorStrings);
    }

    fn load_ssl_strings(&self) {
        self.record(Component::SslErrorStrings);
    }
}

/// Route `tracing` output to the test harness.  Safe to call repeatedly.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
