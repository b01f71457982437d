//! Parsed option caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::error::ConfigError;
use crate::options::FormatConfig;

/// Global cache for parsed money options, keyed by their JSON text.
static CACHE: Mutex<Option<LruCache<String, FormatConfig>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a money configuration, using the cache.
///
/// Forms re-bind the same few option objects every time a view is shown, so
/// parsing each distinct JSON text once is enough.
pub fn get_or_parse(options: &str) -> Result<FormatConfig, ConfigError> {
    // The cache holds plain values; a panic elsewhere cannot leave it torn.
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(config) = cache.get(options) {
        return Ok(config.clone());
    }

    let config = FormatConfig::from_json(options)?;
    cache.put(options.to_string(), config.clone());
    Ok(config)
}
