//! Shared solar-term engine with a per-year instant cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::SearchError;
use crate::jieqi::compute_year_terms;
use crate::jieqi_types::{JieqiConfig, JieqiEvent};

/// The 24 term instants of one term year, in term order.
pub type YearTerms = [JieqiEvent; 24];

/// Cache telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JieqiCacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Term years solved from scratch.
    pub solves: u64,
    /// Term years currently held.
    pub years_cached: usize,
}

/// Solar-term solver handle.
///
/// `JieqiEngine` is [`Send`] + [`Sync`]. Solved years are kept in an
/// append-only map behind a `RwLock`; two threads racing on the same
/// uncached year both solve it and the second insert is dropped. Instants
/// never change once solved, so nothing is ever evicted.
///
/// ```rust,ignore
/// let engine = Arc::new(JieqiEngine::new(JieqiConfig::default())?);
/// let handle = std::thread::spawn({
///     let engine = Arc::clone(&engine);
///     move || year_terms(&engine, 2024)
/// });
/// ```
#[derive(Debug)]
pub struct JieqiEngine {
    config: JieqiConfig,
    cache: RwLock<HashMap<i32, Arc<YearTerms>>>,
    hits: AtomicU64,
    solves: AtomicU64,
}

impl JieqiEngine {
    /// Validate `config` and build an engine with an empty cache.
    pub fn new(config: JieqiConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            solves: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &JieqiConfig {
        &self.config
    }

    /// All 24 instants of `term_year`, solving and caching on first use.
    pub fn year_terms(&self, term_year: i32) -> Result<Arc<YearTerms>, SearchError> {
        if self.config.use_cache {
            let cached = self
                .cache
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&term_year)
                .cloned();
            if let Some(terms) = cached {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(term_year, "solar term cache hit");
                return Ok(terms);
            }
        }

        let terms = Arc::new(compute_year_terms(term_year, &self.config)?);
        self.solves.fetch_add(1, Ordering::Relaxed);

        if self.config.use_cache {
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            let stored = Arc::clone(cache.entry(term_year).or_insert(terms));
            tracing::debug!(term_year, years_cached = cache.len(), "cached solar term year");
            return Ok(stored);
        }
        Ok(terms)
    }

    /// Cached entry for `term_year`, without solving.
    pub(crate) fn cached_year(&self, term_year: i32) -> Option<Arc<YearTerms>> {
        if !self.config.use_cache {
            return None;
        }
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&term_year)
            .cloned()
    }

    pub fn cache_stats(&self) -> JieqiCacheStats {
        JieqiCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            solves: self.solves.load(Ordering::Relaxed),
            years_cached: self
                .cache
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
        }
    }

    /// Drop every cached year. Stats are kept.
    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
