// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The initialization guard: loads each requested component at most once.

use cryptoload_core::{Component, LoadedSet, ProviderConfig};
use tracing::{debug, info, instrument, trace};

use crate::loader::ComponentLoader;

/// Loads crypto library components on demand.
///
/// The guard owns its [`LoadedSet`].  A component in that set has had its
/// loader routine invoked exactly once by this guard, and the set never
/// shrinks.  `load` takes `&mut self`; wrap the guard in a
/// [`SharedCryptoProvider`](crate::SharedCryptoProvider) to share it between
/// threads.
#[derive(Debug)]
pub struct CryptoProvider<L> {
    loader: L,
    loaded: LoadedSet,
}

impl<L> CryptoProvider<L> {
    /// A guard with nothing loaded yet.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            loaded: LoadedSet::new(),
        }
    }

    pub fn is_loaded(&self, component: Component) -> bool {
        self.loaded.contains(component)
    }

    /// Snapshot of the components loaded so far.
    pub fn loaded(&self) -> LoadedSet {
        self.loaded
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn into_loader(self) -> L {
        self.loader
    }
}

impl<L: ComponentLoader> CryptoProvider<L> {
    /// Build a guard and immediately load `config.preload`.
    #[instrument(skip_all, fields(preload = ?config.preload))]
    pub fn with_config(loader: L, config: &ProviderConfig) -> Self {
        let mut provider = Self::new(loader);
        provider.load(config.preload.iter().copied());
        provider
    }

    /// Load every component in `components` that is not loaded yet.
    ///
    /// Components are visited in the order given.  Already-loaded components,
    /// including repeats within the same call, are skipped.  Returns how
    /// many components this call initialized.
    pub fn load<I>(&mut self, components: I) -> usize
    where
        I: IntoIterator<Item = Component>,
    {
        let mut fresh = 0;
        for component in components {
            if self.loaded.contains(component) {
                trace!(%component, "already loaded, skipping");
                continue;
            }

            self.loader.load_component(component);
            self.loaded.insert(component);
            fresh += 1;
            debug!(%component, "component loaded");
        }
        fresh
    }

    /// Load every component, in declaration order.
    pub fn load_all(&mut self) -> usize {
        let fresh = self.load(Component::ALL);
        if fresh > 0 {
            info!(fresh, "all crypto components loaded");
        }
        fresh
    }
}
