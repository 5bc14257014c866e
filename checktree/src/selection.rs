//! Selection snapshot handed back to the renderer.

/// Fully checked records after a selection call.
///
/// `keys` and `records` are index-aligned and follow pre-order traversal of
/// the tree, not the order rows were toggled in. Indeterminate rows are never
/// part of the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected<'t, R, K> {
    /// Keys of checked records.
    pub keys: Vec<K>,
    /// The checked records themselves.
    pub records: Vec<&'t R>,
}

impl<'t, R, K> Selected<'t, R, K> {
    /// Get the number of selected records.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate `(key, record)` pairs in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &'t R)> + '_ {
        self.keys.iter().zip(self.records.iter().copied())
    }

    /// Check if a key is part of the selection.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.keys.contains(key)
    }

    /// Drop the records, keeping the keys.
    pub fn into_keys(self) -> Vec<K> {
        self.keys
    }
}
