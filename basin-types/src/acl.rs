//! Per-object access control lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the everyone entry in an [`Acl`].
pub const PUBLIC: &str = "*";

/// Read/write grants for a single actor (or the [`PUBLIC`] entry).
///
/// `false` flags are omitted on the wire, matching the service format:
/// `{"read": true}` rather than `{"read": true, "write": false}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub write: bool,
}

impl Permission {
    /// Read-only grant.
    #[must_use]
    pub const fn read_only() -> Self {
        Self {
            read: true,
            write: false,
        }
    }

    /// Read and write grant.
    #[must_use]
    pub const fn read_write() -> Self {
        Self {
            read: true,
            write: true,
        }
    }
}

/// Access control list attached to an object when it is created.
///
/// Maps actor ids (or [`PUBLIC`]) to their grants and serializes
/// transparently as that map:
///
/// ```json
/// {"u1": {"read": true, "write": true}, "*": {"read": true}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acl {
    entries: BTreeMap<String, Permission>,
}

impl Acl {
    /// An empty list: nobody is granted anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A list granting everyone read access and nothing else.
    #[must_use]
    pub fn public_read() -> Self {
        Self::new().grant(PUBLIC, true, false)
    }

    /// Adds (or replaces) the grant for `actor`.
    #[must_use]
    pub fn grant(mut self, actor: impl Into<String>, read: bool, write: bool) -> Self {
        self.entries.insert(actor.into(), Permission { read, write });
        self
    }

    /// The grant recorded for `actor`, if any. Does not consult [`PUBLIC`].
    #[must_use]
    pub fn get(&self, actor: &str) -> Option<Permission> {
        self.entries.get(actor).copied()
    }

    /// Whether `actor` may read, directly or through the [`PUBLIC`] entry.
    #[must_use]
    pub fn allows_read(&self, actor: &str) -> bool {
        self.entry_flag(actor, |p| p.read)
    }

    /// Whether `actor` may write, directly or through the [`PUBLIC`] entry.
    #[must_use]
    pub fn allows_write(&self, actor: &str) -> bool {
        self.entry_flag(actor, |p| p.write)
    }

    /// Number of entries, counting the [`PUBLIC`] entry if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no grants are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_flag(&self, actor: &str, flag: impl Fn(&Permission) -> bool) -> bool {
        self.entries.get(actor).is_some_and(&flag) || self.entries.get(PUBLIC).is_some_and(&flag)
    }
}
