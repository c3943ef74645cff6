use crate::{DatabaseName, NameHasher};

use parking_lot::Mutex;
use std::{collections::HashSet, sync::Arc};

/// Databases waiting for the end-of-run teardown pass.
///
/// Entries are keyed by the derived [`DatabaseName`], not by the identifier
/// they were registered with. Names are derived before the lock is taken.
#[derive(Debug)]
pub struct PendingDropRegistry {
    hasher: Arc<NameHasher>,
    names: Mutex<HashSet<DatabaseName>>,
}

impl PendingDropRegistry {
    pub fn new(hasher: Arc<NameHasher>) -> PendingDropRegistry {
        PendingDropRegistry {
            hasher,
            names: Mutex::new(HashSet::new()),
        }
    }

    /// Register the database derived from `identifier`. Registering twice is
    /// a no-op.
    pub fn add(&self, identifier: &str) {
        self.insert_name(self.hasher.derive_name(identifier));
    }

    /// Unregister the database derived from `identifier`, if present.
    pub fn remove(&self, identifier: &str) {
        self.take_name(&self.hasher.derive_name(identifier));
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.contains_name(&self.hasher.derive_name(identifier))
    }

    /// Returns `true` if the name was not yet registered.
    pub fn insert_name(&self, name: DatabaseName) -> bool {
        self.names.lock().insert(name)
    }

    /// Removes `name`, returning whether it was registered.
    pub fn take_name(&self, name: &DatabaseName) -> bool {
        self.names.lock().remove(name)
    }

    pub fn contains_name(&self, name: &DatabaseName) -> bool {
        self.names.lock().contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.lock().is_empty()
    }

    /// Snapshot of the registered names, sorted.
    pub fn names(&self) -> Vec<DatabaseName> {
        let mut names: Vec<_> = self.names.lock().iter().cloned().collect();
        names.sort();
        names
    }

    pub fn hasher(&self) -> &Arc<NameHasher> {
        &self.hasher
    }
}
