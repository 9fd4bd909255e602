//! Ordered keyed collections.

use indexmap::IndexMap;

use crate::key::Key;
use crate::ordering::canonical_cmp;
use crate::value::Value;

/// An ordered mapping from unique [`Key`]s to [`Value`]s.
///
/// Iteration follows insertion order. Replacing the value of an existing key
/// keeps the key at its original position; removing a key preserves the
/// relative order of the remaining entries.
#[derive(Clone, Debug, Default)]
pub struct KeyedArray {
    entries: IndexMap<Key, Value>,
}

impl KeyedArray {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list-like collection keyed `0..n` in iteration order.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::Int(i as i64), v))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace the value stored under `key`, returning the
    /// previous value if there was one.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Append a value under the next free integer key and return that key.
    ///
    /// The next key is one past the largest integer key present, or `0` when
    /// the collection has no integer keys.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let next = self
            .entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        let key = Key::Int(next);
        self.entries.insert(key.clone(), value.into());
        key
    }

    /// Remove an entry, keeping the order of the others.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// A copy whose values are sorted by [`canonical_cmp`] and re-keyed
    /// `0..n`. The original keys are discarded.
    pub fn sorted_by_value(&self) -> Self {
        let mut values: Vec<Value> = self.entries.values().cloned().collect();
        values.sort_by(canonical_cmp);
        Self::from_values(values)
    }
}

/// Order-sensitive equality: two collections are equal when they hold the
/// same entries in the same order.
impl PartialEq for KeyedArray {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl FromIterator<(Key, Value)> for KeyedArray {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyedArray {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(array: &KeyedArray) -> Vec<Key> {
        array.keys().cloned().collect()
    }

    #[test]
    fn push_continues_after_largest_integer_key() {
        let mut array = KeyedArray::new();
        assert_eq!(array.push(1), Key::Int(0));
        array.insert("name", "x");
        array.insert(7, 2);
        assert_eq!(array.push(3), Key::Int(8));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut array = KeyedArray::new();
        array.insert("a", 1);
        array.insert("b", 2);
        let previous = array.insert("a", 10);
        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(keys_of(&array), vec![Key::from("a"), Key::from("b")]);
        assert_eq!(array.get(&Key::from("a")), Some(&Value::Int(10)));
    }

    #[test]
    fn remove_preserves_order() {
        let mut array = KeyedArray::from_values([Value::Int(1), Value::Int(2), Value::Int(3)]);
        array.remove(&Key::Int(0));
        assert_eq!(keys_of(&array), vec![Key::Int(1), Key::Int(2)]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut ab = KeyedArray::new();
        ab.insert("a", 1);
        ab.insert("b", 2);
        let mut ba = KeyedArray::new();
        ba.insert("b", 2);
        ba.insert("a", 1);
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn sorted_by_value_reindexes() {
        let mut array = KeyedArray::new();
        array.insert("x", 3);
        array.insert("y", 1);
        array.insert("z", 2);

        let sorted = array.sorted_by_value();
        assert_eq!(keys_of(&sorted), vec![Key::Int(0), Key::Int(1), Key::Int(2)]);
        let values: Vec<&Value> = sorted.values().collect();
        assert_eq!(values, vec![&Value::Int(1), &Value::Int(2), &Value::Int(3)]);
    }
}
