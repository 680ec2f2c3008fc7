//! Element identity.
//!
//! An [`Id`] is how a widget call in the render pass finds the element the
//! same call created in the layout pass. Ids compare by value, so callers may
//! build them from temporary strings or loop indices.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

/// Caller-supplied identity of one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    /// Anchor of the zero-size sentinel element appended for the render pass.
    pub(crate) const SENTINEL: Self = Self(u64::MAX);

    /// Creates an id by hashing a string key.
    #[must_use]
    pub fn new(key: &str) -> Self {
        let mut hasher = SipHasher13::new();
        hasher.write(key.as_bytes());
        Self(hasher.finish())
    }

    /// Wraps a raw value the caller already guarantees to be unique.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives a distinct id for the `index`-th repetition of this one.
    #[must_use]
    pub fn with_index(self, index: u64) -> Self {
        let mut hasher = SipHasher13::new();
        hasher.write_u64(self.0);
        hasher.write_u64(index);
        Self(hasher.finish())
    }

    /// Derives the id of a named part of this widget.
    #[must_use]
    pub fn child(self, key: &str) -> Self {
        let mut hasher = SipHasher13::new();
        hasher.write_u64(self.0);
        hasher.write(key.as_bytes());
        Self(hasher.finish())
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<&str> for Id {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<&String> for Id {
    fn from(key: &String) -> Self {
        Self::new(key)
    }
}
