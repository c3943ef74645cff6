use parking_lot::Mutex;
use std::{collections::hash_map::DefaultHasher, fmt, hash::Hasher};

/// Idle accumulators kept for reuse; extras are dropped.
const MAX_IDLE: usize = 64;

/// Derives database names from test identifiers.
///
/// Names are a pure function of the seed and the identifier. The seed is
/// drawn once when the hasher is built, so two runs give the same test
/// different databases while every lookup within a run agrees.
///
/// Hash state is pooled: each derivation takes an accumulator out of the
/// pool, so concurrent callers never share one.
#[derive(Debug)]
pub struct NameHasher {
    seed: u64,

    /// Accumulator holding only the seed. Used to create and reset pooled
    /// accumulators.
    seeded: DefaultHasher,

    pool: Mutex<Vec<DefaultHasher>>,
}

/// A generated database name, `db_` followed by 16 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatabaseName(String);

/// Exclusive use of a pooled accumulator. Resets it and hands it back on
/// drop.
struct Accumulator<'a> {
    owner: &'a NameHasher,
    hasher: DefaultHasher,
}

impl NameHasher {
    /// Create a hasher with a random seed.
    pub fn new() -> NameHasher {
        NameHasher::with_seed(rand::random())
    }

    /// Create a hasher with a fixed seed.
    pub fn with_seed(seed: u64) -> NameHasher {
        let mut seeded = DefaultHasher::new();
        seeded.write_u64(seed);

        NameHasher {
            seed,
            seeded,
            pool: Mutex::new(Vec::new()),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the database name for `identifier`.
    pub fn derive_name(&self, identifier: &str) -> DatabaseName {
        let mut accumulator = self.acquire();
        accumulator.hasher.write(identifier.as_bytes());
        DatabaseName::from_digest(accumulator.hasher.finish())
    }

    fn acquire(&self) -> Accumulator<'_> {
        let hasher = self
            .pool
            .lock()
            .pop()
            .unwrap_or_else(|| self.seeded.clone());

        Accumulator {
            owner: self,
            hasher,
        }
    }

    #[cfg(test)]
    fn idle(&self) -> usize {
        self.pool.lock().len()
    }
}

impl Default for NameHasher {
    fn default() -> Self {
        NameHasher::new()
    }
}

impl Drop for Accumulator<'_> {
    fn drop(&mut self) {
        let mut pool = self.owner.pool.lock();

        if pool.len() < MAX_IDLE {
            self.hasher.clone_from(&self.owner.seeded);
            pool.push(std::mem::take(&mut self.hasher));
        }
    }
}

impl DatabaseName {
    const PREFIX: &'static str = "db_";

    fn from_digest(digest: u64) -> DatabaseName {
        DatabaseName(format!("{}{digest:016x}", Self::PREFIX))
    }

    /// Parses a database id produced by [`NameHasher::derive_name`]. Any
    /// other shape, including uppercase hex, returns `None`.
    pub fn parse(id: &str) -> Option<DatabaseName> {
        let digits = id.strip_prefix(Self::PREFIX)?;

        let well_formed = digits.len() == 16
            && digits
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        well_formed.then(|| DatabaseName(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DatabaseName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DatabaseName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
