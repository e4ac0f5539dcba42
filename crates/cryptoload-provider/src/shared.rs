// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Mutex-guarded provider for concurrent callers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cryptoload_core::{Component, LoadedSet, ProviderConfig};

use crate::loader::ComponentLoader;
use crate::provider::CryptoProvider;

/// A [`CryptoProvider`] that can be shared between threads.
///
/// The whole check-then-load sequence runs under one lock, so concurrent
/// requests for the same component still invoke its routine once.
#[derive(Debug)]
pub struct SharedCryptoProvider<L> {
    inner: Mutex<CryptoProvider<L>>,
}

impl<L> SharedCryptoProvider<L> {
    pub fn new(loader: L) -> Self {
        Self::from_provider(CryptoProvider::new(loader))
    }

    pub fn from_provider(provider: CryptoProvider<L>) -> Self {
        Self {
            inner: Mutex::new(provider),
        }
    }

    // A panicking loader leaves its component unrecorded, so the set behind
    // a poisoned lock is still accurate.
    fn lock(&self) -> MutexGuard<'_, CryptoProvider<L>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_loaded(&self, component: Component) -> bool {
        self.lock().is_loaded(component)
    }

    /// Snapshot of the components loaded so far.
    pub fn loaded(&self) -> LoadedSet {
        self.lock().loaded()
    }

    pub fn into_inner(self) -> CryptoProvider<L> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: ComponentLoader> SharedCryptoProvider<L> {
    pub fn with_config(loader: L, config: &ProviderConfig) -> Self {
        Self::from_provider(CryptoProvider::with_config(loader, config))
    }

    /// See [`CryptoProvider::load`].
    pub fn load<I>(&self, components: I) -> usize
    where
        I: IntoIterator<Item = Component>,
    {
        self.lock().load(components)
    }

    pub fn load_all(&self) -> usize {
        self.lock().load_all()
    }
}
