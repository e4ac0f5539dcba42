// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trait boundary for the library's one-time setup routines.
// The guard depends on this trait, never on a concrete backend, so tests can
// count invocations instead of touching process-global state.

use cryptoload_core::Component;

/// One method per global setup routine.
///
/// Every routine is parameterless and infallible.  Implementations may assume
/// the guard calls each of them at most once.
pub trait ComponentLoader {
    fn init_ssl(&self);
    fn add_all_digests(&self);
    fn add_all_ciphers(&self);
    fn load_crypto_strings(&self);
    fn load_ssl_strings(&self);

    /// Run the routine that belongs to `component`.
    fn load_component(&self, component: Component) {
        match component {
            Component::Ssl => self.init_ssl(),
            Component::Digests => self.add_all_digests(),
            Component::Ciphers => self.add_all_ciphers(),
            Component::CryptoErrorStrings => self.load_crypto_strings(),
            Component::SslErrorStrings => self.load_ssl_strings(),
        }
    }
}

impl<L: ComponentLoader + ?Sized> ComponentLoader for &L {
    fn init_ssl(&self) {
        (**self).init_ssl()
    }

    fn add_all_digests(&self) {
        (**self).add_all_digests()
    }

    fn add_all_ciphers(&self) {
        (**self).add_all_ciphers()
    }

    fn load_crypto_strings(&self) {
        (**self).load_crypto_strings()
    }

    fn load_ssl_strings(&self) {
        (**self).load_ssl_strings()
    }
}

impl<L: ComponentLoader + ?Sized> ComponentLoader for Box<L> {
    fn init_ssl(&self) {
        (**self).init_ssl()
    }

    fn add_all_digests(&self) {
        (**self).add_all_digests()
    }

    fn add_all_ciphers(&self) {
        (**self).add_all_ciphers()
    }

    fn load_crypto_strings(&self) {
        (**self).load_crypto_strings()
    }

    fn load_ssl_strings(&self) {
        (**self).load_ssl_strings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingLoader;

    #[test]
    fn each_component_dispatches_to_its_own_routine() {
        for component in Component::ALL {
            let loader = RecordingLoader::default();
            loader.load_component(component);
            assert_eq!(loader.calls(), vec![component]);
        }
    }

    #[test]
    fn boxed_trait_object_forwards() {
        let recorder = RecordingLoader::default();
        {
            let boxed: Box<dyn ComponentLoader + '_> = Box::new(&recorder);
            boxed.load_component(Component::SslErrorStrings);
        }
        assert_eq!(recorder.calls(), vec![Component::SslErrorStrings]);
    }
}
