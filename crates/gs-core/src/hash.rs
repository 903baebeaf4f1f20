//! Fast hash map type alias.
//!
//! Filter state and the dataset registry are keyed by short strings (field
//! keys, dataset ids), which is where the Fx hash from `rustc-hash` does
//! well. None of these maps hold untrusted keys, so DoS resistance is not a
//! concern.
//!
//! # Examples
//!
//! ```
//! use gs_core::{FxHashMap, fx_hash_map};
//!
//! let mut filters: FxHashMap<String, String> = fx_hash_map();
//! filters.insert("severity".to_owned(), "critical".to_owned());
//! assert_eq!(filters.len(), 1);
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_hash_map_operations() {
        let mut map: FxHashMap<&str, &str> = fx_hash_map();
        map.insert("severity", "critical");
        map.insert("url", "zzzz");
        assert_eq!(map.get("severity"), Some(&"critical"));
        assert_eq!(map.get("component"), None);
    }
}
