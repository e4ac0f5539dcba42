// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Component identifiers and the loaded-set bitmask.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoLoadError;

/// One global, one-time setup routine of the crypto library.
///
/// Serializes as its kebab-case [`name`](Component::name).  Deserializing
/// goes through [`FromStr`], so configuration files accept the same
/// spellings as `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Component {
    /// The TLS library itself.
    Ssl,
    /// The message digest registry.
    Digests,
    /// The cipher registry.
    Ciphers,
    /// Error descriptions for the crypto APIs.
    CryptoErrorStrings,
    /// Error descriptions for the TLS APIs.
    SslErrorStrings,
}

impl Component {
    /// Every component, in declaration order.
    pub const ALL: [Component; 5] = [
        Component::Ssl,
        Component::Digests,
        Component::Ciphers,
        Component::CryptoErrorStrings,
        Component::SslErrorStrings,
    ];

    /// Stable kebab-case name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Component::Ssl => "ssl",
            Component::Digests => "digests",
            Component::Ciphers => "ciphers",
            Component::CryptoErrorStrings => "crypto-error-strings",
            Component::SslErrorStrings => "ssl-error-strings",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = CryptoLoadError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CryptoLoadError::UnknownComponent(s.to_owned()))
    }
}

impl TryFrom<String> for Component {
    type Error = CryptoLoadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The set of components a guard has already initialized.
///
/// Stored as a bitmask over [`Component`]; it only ever grows.  Guards hand
/// out copies, so inserting into a returned value never touches the guard's
/// own record.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadedSet(u8);

impl LoadedSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn contains(&self, component: Component) -> bool {
        self.0 & component.bit() != 0
    }

    /// Add `component`.  Returns `true` if it was not already present.
    pub fn insert(&mut self, component: Component) -> bool {
        let fresh = !self.contains(component);
        self.0 |= component.bit();
        fresh
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// `true` once every [`Component`] is present.
    pub fn is_complete(&self) -> bool {
        self.len() == Component::ALL.len()
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Component> + '_ {
        Component::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl fmt::Debug for LoadedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Component> for LoadedSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut set = LoadedSet::new();
        for component in iter {
            set.insert(component);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for component in Component::ALL {
            let parsed: Component = component.to_string().parse().expect("parse");
            assert_eq!(parsed, component);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Digests ".parse::<Component>().unwrap(), Component::Digests);
        assert_eq!("SSL".parse::<Component>().unwrap(), Component::Ssl);
    }

    #[test]
    fn parse_unknown_component() {
        match "engines".parse::<Component>() {
            Err(CryptoLoadError::UnknownComponent(name)) => assert_eq!(name, "engines"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Component::CryptoErrorStrings).unwrap();
        assert_eq!(json, "\"crypto-error-strings\"");
        let back: Component = serde_json::from_str("\"ssl-error-strings\"").unwrap();
        assert_eq!(back, Component::SslErrorStrings);
    }

    #[test]
    fn serde_accepts_what_parse_accepts() {
        for raw in ["SSL", " Digests ", "Crypto-Error-Strings"] {
            let via_parse: Component = raw.parse().expect("parse");
            let via_serde: Component =
                serde_json::from_value(serde_json::Value::String(raw.to_owned())).expect("serde");
            assert_eq!(via_parse, via_serde, "{raw:?}");
        }
        assert!(serde_json::from_str::<Component>("\"engines\"").is_err());
    }

    #[test]
    fn loaded_set_grows_monotonically() {
        let mut set = LoadedSet::new();
        assert!(set.is_empty());

        assert!(set.insert(Component::Ciphers));
        assert!(!set.insert(Component::Ciphers));
        assert!(set.insert(Component::Ssl));

        assert_eq!(set.len(), 2);
        assert!(set.contains(Component::Ssl));
        assert!(!set.contains(Component::Digests));
        // Iteration follows declaration order, not insertion order.
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Component::Ssl, Component::Ciphers]
        );
    }

    #[test]
    fn complete_set() {
        let set: LoadedSet = Component::ALL.into_iter().rev().collect();
        assert!(set.is_complete());
        assert_eq!(format!("{set:?}").matches(',').count(), 4);
    }
}
