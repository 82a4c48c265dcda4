use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Ordered map holding any number of values per key. Values sharing a key
/// are kept in insertion order.
#[derive(Clone, Debug)]
pub struct MultiMap<K, V> {
    entries: BTreeMap<K, Vec<V>>,
    len: usize,
}

#[allow(dead_code)]
impl<K: Ord, V> MultiMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// Values stored under `key`, empty if there are none.
    pub fn find<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: Ord, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let map: MultiMap<String, u32> = MultiMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.find("missing").is_empty());
    }

    #[test]
    fn test_duplicates_keep_insertion_order() {
        let map = [("b", 1), ("a", 2), ("b", 3), ("b", 4)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect::<MultiMap<_, _>>();
        assert_eq!(map.len(), 4);
        assert_eq!(map.key_count(), 2);
        assert_eq!(map.find("b"), &[1, 3, 4]);
        assert_eq!(map.find("a"), &[2]);
        assert!(map.find("c").is_empty());
    }
}
