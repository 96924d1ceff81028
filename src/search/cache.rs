use bitvec::vec::BitVec;
use std::collections::HashSet;

use crate::io::configuration::FAILURE_CACHE_CAPACITY;
use crate::layer::Grid;

/// Search state at the moment a frame is entered
///
/// Every cell before `index` is occupied, and no brick anchored before
/// `index` reaches further than one row past it, so the occupancy of the
/// next `cols` cells decides everything the remaining search can do.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct FrontierKey {
    index: usize,
    frontier: BitVec,
}

impl FrontierKey {
    /// Capture the occupancy of `second` from `index` up to one row ahead
    pub fn new(second: &Grid, index: usize) -> Self {
        let (rows, cols) = second.dimensions();
        let end = (index + cols).min(rows * cols);
        let frontier = (index..end)
            .map(|cell| !second.is_free(cell / cols, cell % cols))
            .collect();

        Self { index, frontier }
    }
}

/// Hit and miss counts for a [`FailureCache`]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a known failure
    pub hits: usize,
    /// Lookups that found nothing
    pub misses: usize,
}

/// Search states already known to have no completion
///
/// Recording stops silently once [`FAILURE_CACHE_CAPACITY`] states are held;
/// lookups keep working on what was stored.
#[derive(Default, Debug)]
pub struct FailureCache {
    failed: HashSet<FrontierKey>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl FailureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// True when entering `index` with this layer is known to fail
    pub fn is_known_failure(&mut self, second: &Grid, index: usize) -> bool {
        if self.failed.contains(&FrontierKey::new(second, index)) {
            self.stats.hits += 1;
            true
        } else {
            self.stats.misses += 1;
            false
        }
    }

    /// Remember that entering `index` with this layer fails
    pub fn record_failure(&mut self, second: &Grid, index: usize) {
        if self.failed.len() < FAILURE_CACHE_CAPACITY {
            self.failed.insert(FrontierKey::new(second, index));
        }
    }

    /// Number of remembered states
    pub fn len(&self) -> usize {
        self.failed.len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }
}
