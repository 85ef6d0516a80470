//! Locked-tag tracking.
//!
//! Locks live independently of the tag collection: a locked name may refer
//! to a tag that was deleted elsewhere, and that stale entry is tolerated
//! rather than pruned. Membership is case-insensitive but the set keeps
//! names exactly as given at toggle time.

use crate::model::names_equal;

/// The set of tag names currently locked out of default edit affordances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockSet {
    names: Vec<String>,
}

impl LockSet {
    /// Create an empty lock set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lock set from an externally supplied name list.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The locked names, in toggle order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the given name is locked (case-insensitive).
    pub fn is_locked(&self, name: &str) -> bool {
        self.names.iter().any(|locked| names_equal(locked, name))
    }

    /// Toggle a name: unlock it if present, otherwise lock it as given.
    /// Names unknown to the collection are accepted.
    pub fn toggle(&mut self, name: &str) {
        if self.is_locked(name) {
            self.names.retain(|locked| !names_equal(locked, name));
        } else {
            self.names.push(name.to_string());
        }
    }
}
