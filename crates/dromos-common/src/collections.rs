//! Standard collection type aliases for Dromos.
//!
//! Use these instead of direct HashMap/HashSet so the whole workspace hashes
//! the same way. FxHash is fast on the small integer keys that dominate
//! graph workloads.

use rustc_hash::FxBuildHasher;

/// Standard HashMap with FxHash (fast, non-cryptographic).
pub type DromosMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Standard HashSet with FxHash.
pub type DromosSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Create a new empty [`DromosMap`].
#[inline]
#[must_use]
pub fn dromos_map<K, V>() -> DromosMap<K, V> {
    DromosMap::with_hasher(FxBuildHasher)
}

/// Create a new [`DromosMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn dromos_map_with_capacity<K, V>(capacity: usize) -> DromosMap<K, V> {
    DromosMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Create a new empty [`DromosSet`].
#[inline]
#[must_use]
pub fn dromos_set<T>() -> DromosSet<T> {
    DromosSet::with_hasher(FxBuildHasher)
}

/// Create a new [`DromosSet`] with the specified capacity.
#[inline]
#[must_use]
pub fn dromos_set_with_capacity<T>(capacity: usize) -> DromosSet<T> {
    DromosSet::with_capacity_and_hasher(capacity, FxBuildHasher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_basic_operations() {
        let mut map: DromosMap<u32, &str> = dromos_map();
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(map.get(&1), Some(&"one"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_set_basic_operations() {
        let mut set: DromosSet<u32> = dromos_set_with_capacity(4);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_map_with_capacity() {
        let map: DromosMap<u32, u32> = dromos_map_with_capacity(16);
        assert!(map.capacity() >= 16);
    }
}
