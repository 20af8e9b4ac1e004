//! Shared memoization of generated candidate spaces
//!
//! The mapping Configuration → full space is pure, so it is computed at most
//! once per cache and handed out as an immutable shared slice. Sessions copy
//! that slice into their own working set before filtering.

use super::generate;
use crate::core::{Code, Configuration};
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard};

type Slot = Arc<OnceLock<Arc<[Code]>>>;

static GLOBAL_CACHE: OnceLock<SpaceCache> = OnceLock::new();

/// Compute-once cache of candidate spaces keyed by configuration
///
/// Safe to share between threads. Lookups of different configurations never
/// wait on each other; concurrent lookups of the same missing configuration
/// wait for a single generation instead of racing.
#[derive(Debug, Default)]
pub struct SpaceCache {
    slots: RwLock<FxHashMap<Configuration, Slot>>,
}

impl SpaceCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache for callers that do not manage their own
    pub fn global() -> &'static Self {
        GLOBAL_CACHE.get_or_init(Self::new)
    }

    /// Get the full space for `config`, generating it on first request
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Configuration;
    /// use strikeball_solver::space::SpaceCache;
    /// use std::sync::Arc;
    ///
    /// let cache = SpaceCache::new();
    /// let first = cache.get(Configuration::standard());
    /// let second = cache.get(Configuration::standard());
    ///
    /// assert_eq!(first.len(), 4536);
    /// assert!(Arc::ptr_eq(&first, &second));
    /// ```
    pub fn get(&self, config: Configuration) -> Arc<[Code]> {
        let slot = self.slot(config);
        // Generation happens outside the map lock; OnceLock blocks duplicate initializers
        Arc::clone(slot.get_or_init(|| generate(config).into()))
    }

    /// Whether `config` has already been generated
    #[must_use]
    pub fn contains(&self, config: Configuration) -> bool {
        self.read()
            .get(&config)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of generated spaces held
    #[must_use]
    pub fn len(&self) -> usize {
        self.read()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, config: Configuration) -> Slot {
        if let Some(slot) = self.read().get(&config) {
            return Arc::clone(slot);
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(config).or_default())
    }

    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<Configuration, Slot>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }
}
