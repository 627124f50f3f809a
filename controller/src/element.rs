use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Stable handle for an element on the page.
///
/// This is the element's `id` when it has one. Adapters assign a synthetic
/// key (stored in a `data-pc-key` attribute on the DOM) to elements without.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ElementKey(String);

impl ElementKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key was handed out by a [`KeyAllocator`].
    pub fn is_synthetic(&self) -> bool {
        self.0.starts_with(SYNTHETIC_PREFIX)
    }
}

/// Prefix of adapter-assigned keys.
pub const SYNTHETIC_PREFIX: &str = "pc-";

/// Hands out synthetic keys for elements without an `id`.
///
/// Keys stamped by an earlier binding outlive it on elements that persist
/// across client-side navigation, so every candidate is checked against the
/// page before it is returned.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    next: u32,
}

impl KeyAllocator {
    pub fn next_free(&mut self, is_taken: impl Fn(&ElementKey) -> bool) -> ElementKey {
        loop {
            self.next += 1;
            let key = ElementKey::new(format!("{SYNTHETIC_PREFIX}{}", self.next));
            if !is_taken(&key) {
                return key;
            }
        }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ElementKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
