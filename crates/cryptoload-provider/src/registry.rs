// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Process-global algorithm registries and error-string tables.
//
// These are the global state that `RustlsLoader` populates.  Lookups return
// `None` (or the bare numeric error form) until the matching component has
// been loaded.  Registration is idempotent: running it again re-inserts the
// same entries.
//
// Error codes are packed as `library << 23 | reason`.  Library names and
// reason strings live in separate tables.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use ring::{aead, digest};
use tracing::debug;

// ---------------------------------------------------------------------------
// Algorithm tables
// ---------------------------------------------------------------------------

static DIGEST_TABLE: [(&str, &digest::Algorithm); 5] = [
    ("SHA1", &digest::SHA1_FOR_LEGACY_USE_ONLY),
    ("SHA256", &digest::SHA256),
    ("SHA384", &digest::SHA384),
    ("SHA512", &digest::SHA512),
    ("SHA512256", &digest::SHA512_256),
];

static CIPHER_TABLE: [(&str, &aead::Algorithm); 3] = [
    ("AES128GCM", &aead::AES_128_GCM),
    ("AES256GCM", &aead::AES_256_GCM),
    ("CHACHA20POLY1305", &aead::CHACHA20_POLY1305),
];

static DIGESTS: RwLock<BTreeMap<&'static str, &'static digest::Algorithm>> =
    RwLock::new(BTreeMap::new());

static CIPHERS: RwLock<BTreeMap<&'static str, &'static aead::Algorithm>> =
    RwLock::new(BTreeMap::new());

/// Canonical registry key: upper case, separators dropped, so that
/// `"sha-512/256"`, `"SHA512_256"` and `"sha512256"` all match.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Register every supported digest.  Returns how many were new.
pub fn register_all_digests() -> usize {
    let mut map = DIGESTS.write().unwrap_or_else(PoisonError::into_inner);
    let added = DIGEST_TABLE
        .iter()
        .filter(|&&(name, alg)| map.insert(name, alg).is_none())
        .count();
    debug!(added, total = map.len(), "digests registered");
    added
}

/// Register every supported AEAD cipher.  Returns how many were new.
pub fn register_all_ciphers() -> usize {
    let mut map = CIPHERS.write().unwrap_or_else(PoisonError::into_inner);
    let added = CIPHER_TABLE
        .iter()
        .filter(|&&(name, alg)| map.insert(name, alg).is_none())
        .count();
    debug!(added, total = map.len(), "ciphers registered");
    added
}

/// Look up a registered digest by name.
pub fn digest_by_name(name: &str) -> Option<&'static digest::Algorithm> {
    DIGESTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(normalize(name).as_str())
        .copied()
}

/// Look up a registered AEAD cipher by name.
pub fn cipher_by_name(name: &str) -> Option<&'static aead::Algorithm> {
    CIPHERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(normalize(name).as_str())
        .copied()
}

/// Canonical names of the registered digests.
pub fn registered_digests() -> Vec<&'static str> {
    DIGESTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .copied()
        .collect()
}

/// Canonical names of the registered ciphers.
pub fn registered_ciphers() -> Vec<&'static str> {
    CIPHERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// Error codes and strings
// ---------------------------------------------------------------------------

/// Which library an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorLibrary {
    /// Primitive operations (ring).
    Crypto,
    /// The TLS layer (rustls).
    Ssl,
}

impl ErrorLibrary {
    pub fn number(self) -> u32 {
        match self {
            ErrorLibrary::Crypto => 15,
            ErrorLibrary::Ssl => 20,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ErrorLibrary::Crypto => "crypto library",
            ErrorLibrary::Ssl => "SSL routines",
        }
    }

    fn reasons(self) -> &'static [(u32, &'static str)] {
        match self {
            ErrorLibrary::Crypto => CRYPTO_REASONS,
            ErrorLibrary::Ssl => SSL_REASONS,
        }
    }
}

/// A library-qualified reason code.
///
/// Reasons are limited to 23 bits; [`ErrorCode::new`] masks off the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    library: ErrorLibrary,
    reason: u32,
}

const REASON_MASK: u32 = 0x7F_FFFF;

mod reason {
    pub const UNSPECIFIED: u32 = 1;
    pub const INVALID_ENCODING: u32 = 2;
    pub const WRONG_ALGORITHM: u32 = 3;
    pub const KEY_TOO_SMALL: u32 = 4;
    pub const KEY_TOO_LARGE: u32 = 5;
    pub const INCONSISTENT_COMPONENTS: u32 = 6;
    pub const INVALID_COMPONENT: u32 = 7;
    pub const PUBLIC_KEY_MISSING: u32 = 8;
    pub const VERSION_NOT_SUPPORTED: u32 = 9;

    pub const INAPPROPRIATE_MESSAGE: u32 = 1;
    pub const INAPPROPRIATE_HANDSHAKE_MESSAGE: u32 = 2;
    pub const INVALID_MESSAGE: u32 = 3;
    pub const NO_CERTIFICATES_PRESENTED: u32 = 4;
    pub const DECRYPT_ERROR: u32 = 5;
    pub const ENCRYPT_ERROR: u32 = 6;
    pub const PEER_INCOMPATIBLE: u32 = 7;
    pub const PEER_MISBEHAVED: u32 = 8;
    pub const ALERT_RECEIVED: u32 = 9;
    pub const INVALID_CERTIFICATE: u32 = 10;
    pub const HANDSHAKE_NOT_COMPLETE: u32 = 11;
    pub const OVERSIZED_RECORD: u32 = 12;
    pub const NO_APPLICATION_PROTOCOL: u32 = 13;
    pub const OTHER: u32 = 14;
}

static CRYPTO_REASONS: &[(u32, &str)] = &[
    (reason::UNSPECIFIED, "unspecified failure"),
    (reason::INVALID_ENCODING, "invalid key encoding"),
    (reason::WRONG_ALGORITHM, "wrong algorithm"),
    (reason::KEY_TOO_SMALL, "key too small"),
    (reason::KEY_TOO_LARGE, "key too large"),
    (reason::INCONSISTENT_COMPONENTS, "inconsistent key components"),
    (reason::INVALID_COMPONENT, "invalid key component"),
    (reason::PUBLIC_KEY_MISSING, "public key is missing"),
    (reason::VERSION_NOT_SUPPORTED, "key version not supported"),
];

static SSL_REASONS: &[(u32, &str)] = &[
    (reason::INAPPROPRIATE_MESSAGE, "inappropriate message"),
    (reason::INAPPROPRIATE_HANDSHAKE_MESSAGE, "inappropriate handshake message"),
    (reason::INVALID_MESSAGE, "invalid message"),
    (reason::NO_CERTIFICATES_PRESENTED, "no certificates presented"),
    (reason::DECRYPT_ERROR, "decryption failed"),
    (reason::ENCRYPT_ERROR, "encryption failed"),
    (reason::PEER_INCOMPATIBLE, "peer is incompatible"),
    (reason::PEER_MISBEHAVED, "peer misbehaved"),
    (reason::ALERT_RECEIVED, "alert received"),
    (reason::INVALID_CERTIFICATE, "invalid certificate"),
    (reason::HANDSHAKE_NOT_COMPLETE, "handshake not complete"),
    (reason::OVERSIZED_RECORD, "peer sent oversized record"),
    (reason::NO_APPLICATION_PROTOCOL, "no application protocol"),
    (reason::OTHER, "other TLS error"),
];

impl ErrorCode {
    pub fn new(library: ErrorLibrary, reason: u32) -> Self {
        Self {
            library,
            reason: reason & REASON_MASK,
        }
    }

    pub fn library(self) -> ErrorLibrary {
        self.library
    }

    pub fn reason(self) -> u32 {
        self.reason
    }

    /// The packed numeric form, `library << 23 | reason`.
    pub fn packed(self) -> u32 {
        (self.library.number() << 23) | self.reason
    }

    /// Classify a ring key rejection.
    pub fn from_key_rejected(err: &ring::error::KeyRejected) -> Self {
        let reason = match err.to_string().as_str() {
            "InvalidEncoding" => reason::INVALID_ENCODING,
            "WrongAlgorithm" => reason::WRONG_ALGORITHM,
            "TooSmall" => reason::KEY_TOO_SMALL,
            "TooLarge" => reason::KEY_TOO_LARGE,
            "InconsistentComponents" => reason::INCONSISTENT_COMPONENTS,
            "InvalidComponent" => reason::INVALID_COMPONENT,
            "PublicKeyIsMissing" => reason::PUBLIC_KEY_MISSING,
            "VersionNotSupported" => reason::VERSION_NOT_SUPPORTED,
            _ => reason::UNSPECIFIED,
        };
        Self::new(ErrorLibrary::Crypto, reason)
    }

    /// Classify a rustls error.
    pub fn from_tls_error(err: &rustls::Error) -> Self {
        use rustls::Error;

        let reason = match err {
            Error::InappropriateMessage { .. } => reason::INAPPROPRIATE_MESSAGE,
            Error::InappropriateHandshakeMessage { .. } => reason::INAPPROPRIATE_HANDSHAKE_MESSAGE,
            Error::InvalidMessage(_) => reason::INVALID_MESSAGE,
            Error::NoCertificatesPresented => reason::NO_CERTIFICATES_PRESENTED,
            Error::DecryptError => reason::DECRYPT_ERROR,
            Error::EncryptError => reason::ENCRYPT_ERROR,
            Error::PeerIncompatible(_) => reason::PEER_INCOMPATIBLE,
            Error::PeerMisbehaved(_) => reason::PEER_MISBEHAVED,
            Error::AlertReceived(_) => reason::ALERT_RECEIVED,
            Error::InvalidCertificate(_) => reason::INVALID_CERTIFICATE,
            Error::HandshakeNotComplete => reason::HANDSHAKE_NOT_COMPLETE,
            Error::PeerSentOversizedRecord => reason::OVERSIZED_RECORD,
            Error::NoApplicationProtocol => reason::NO_APPLICATION_PROTOCOL,
            _ => reason::OTHER,
        };
        Self::new(ErrorLibrary::Ssl, reason)
    }
}

impl From<ring::error::Unspecified> for ErrorCode {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::new(ErrorLibrary::Crypto, reason::UNSPECIFIED)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&error_string(*self))
    }
}

/// Library names and reason strings, keyed separately so that no reason
/// code can resolve to a library name.
#[derive(Debug, Default)]
pub(crate) struct ErrorStringTable {
    libraries: BTreeMap<u32, &'static str>,
    reasons: BTreeMap<u32, &'static str>,
}

impl ErrorStringTable {
    pub(crate) const fn new() -> Self {
        Self {
            libraries: BTreeMap::new(),
            reasons: BTreeMap::new(),
        }
    }

    pub(crate) fn load(&mut self, library: ErrorLibrary) -> usize {
        let mut added = usize::from(
            self.libraries
                .insert(library.number(), library.name())
                .is_none(),
        );
        for &(reason, text) in library.reasons() {
            if self
                .reasons
                .insert(ErrorCode::new(library, reason).packed(), text)
                .is_none()
            {
                added += 1;
            }
        }
        added
    }

    pub(crate) fn render(&self, code: ErrorCode) -> String {
        let lib = self.libraries.get(&code.library.number()).copied();
        let reason = self.reasons.get(&code.packed()).copied();
        render(code, lib, reason)
    }
}

static ERROR_STRINGS: RwLock<ErrorStringTable> = RwLock::new(ErrorStringTable::new());

/// Load the reason strings of `library`.  Returns how many entries were new.
pub fn load_error_strings(library: ErrorLibrary) -> usize {
    let added = ERROR_STRINGS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .load(library);
    debug!(?library, added, "error strings loaded");
    added
}

/// Render `code` as `error:<hex>:<library>:<reason>`.
///
/// Parts whose strings have not been loaded fall back to `lib(<n>)` and
/// `reason(<n>)`.
pub fn error_string(code: ErrorCode) -> String {
    ERROR_STRINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .render(code)
}

fn render(code: ErrorCode, lib: Option<&str>, reason: Option<&str>) -> String {
    let lib = match lib {
        Some(name) => name.to_owned(),
        None => format!("lib({})", code.library.number()),
    };
    let reason = match reason {
        Some(text) => text.to_owned(),
        None => format!("reason({})", code.reason),
    };
    format!("error:{:08X}:{lib}:{reason}", code.packed())
}
