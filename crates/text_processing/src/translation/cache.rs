//! Whole-text result cache
//!
//! Keyed by the (source, target, text) triple as given. Least recently used
//! entries are evicted once `capacity` is reached.

use indexmap::IndexMap;
use parking_lot::Mutex;

use santali_translator_core::TranslationResult;

type CacheKey = (String, String, String);

/// Bounded LRU cache of translation results
pub struct TranslationCache {
    entries: Mutex<IndexMap<CacheKey, TranslationResult>>,
    capacity: usize,
}

impl TranslationCache {
    /// A capacity of 0 disables caching
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            capacity,
        }
    }

    fn make_key(text: &str, from: &str, to: &str) -> CacheKey {
        (from.to_string(), to.to_string(), text.to_string())
    }

    pub fn get(&self, text: &str, from: &str, to: &str) -> Option<TranslationResult> {
        if self.capacity == 0 {
            return None;
        }
        let key = Self::make_key(text, from, to);
        let mut entries = self.entries.lock();
        // move to the most recently used end
        let result = entries.shift_remove(&key)?;
        entries.insert(key, result.clone());
        Some(result)
    }

    pub fn insert(&self, text: &str, from: &str, to: &str, result: TranslationResult) {
        if self.capacity == 0 {
            return;
        }
        let key = Self::make_key(text, from, to);
        let mut entries = self.entries.lock();
        entries.shift_remove(&key);
        while entries.len() >= self.capacity {
            entries.shift_remove_index(0);
        }
        entries.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> TranslationResult {
        let mut result = TranslationResult::failure(text, "placeholder");
        result.success = true;
        result.translated_text = text.to_uppercase();
        result.error = None;
        result
    }

    #[test]
    fn test_cache() {
        let cache = TranslationCache::new(10);
        cache.insert("hello", "en", "hi", result("hello"));

        let hit = cache.get("hello", "en", "hi");
        assert_eq!(hit.map(|r| r.translated_text), Some("HELLO".to_string()));

        // Different direction should not match
        assert!(cache.get("hello", "hi", "en").is_none());
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = TranslationCache::new(2);
        cache.insert("a", "hi", "sat", result("a"));
        cache.insert("b", "hi", "sat", result("b"));
        // touch "a" so "b" becomes the oldest
        assert!(cache.get("a", "hi", "sat").is_some());
        cache.insert("c", "hi", "sat", result("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b", "hi", "sat").is_none());
        assert!(cache.get("a", "hi", "sat").is_some());
        assert!(cache.get("c", "hi", "sat").is_some());
    }

    #[test]
    fn test_codes_with_separators_do_not_collide() {
        let cache = TranslationCache::new(10);
        cache.insert("x:पानी", "hi", "sat", result("x:पानी"));

        assert!(cache.get("पानी", "hi", "sat:x").is_none());
        assert!(cache.get("sat:x:पानी", "hi", "").is_none());
        assert!(cache.get("x:पानी", "hi", "sat").is_some());
    }

    #[test]
    fn test_zero_capacity_disables() {
        let cache = TranslationCache::new(0);
        cache.insert("a", "hi", "sat", result("a"));
        assert!(cache.is_empty());
        assert!(cache.get("a", "hi", "sat").is_none());
    }

    #[test]
    fn test_clear() {
        let cache = TranslationCache::new(4);
        cache.insert("a", "hi", "sat", result("a"));
        cache.insert("a", "hi", "sat", result("a"));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
