//! TreeRecord trait for records that can be managed by a [`CheckTree`](crate::CheckTree).

/// Trait for hierarchical records shown as rows of a checkbox table.
///
/// The engine only needs to walk the tree; record keys come from the row key
/// function configured on the engine, so the same record type can be keyed
/// differently by different tables.
///
/// # Example
///
/// ```
/// use checktree::TreeRecord;
///
/// #[derive(Clone, Debug)]
/// struct Department {
///     id: String,
///     name: String,
///     children: Vec<Department>,
/// }
///
/// impl TreeRecord for Department {
///     fn children(&self) -> &[Self] {
///         &self.children
///     }
/// }
/// ```
pub trait TreeRecord: Sized {
    /// Child records, in display order. Return an empty slice for leaf rows.
    fn children(&self) -> &[Self];

    /// Whether this record has no children.
    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}
