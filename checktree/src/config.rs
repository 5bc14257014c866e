//! Engine configuration.

use std::fmt;

/// Function extracting a record's key.
pub type RowKey<R, K> = Box<dyn Fn(&R) -> K + Send + Sync>;

/// Selection-changed callback: selected keys and records, index-aligned, in pre-order.
pub type ChangeCallback<R, K> = Box<dyn FnMut(&[K], &[&R]) + Send>;

/// Per-table configuration for a [`CheckTree`](crate::CheckTree).
///
/// The row key is mandatory; there is no field-name convention to fall back on.
///
/// # Example
///
/// ```ignore
/// let config = CheckTreeConfig::new(|row: &Row| row.id.clone())
///     .name("Departments")
///     .on_change(|keys, _rows| println!("selected: {keys:?}"));
/// let engine = CheckTree::with_config(config);
/// ```
pub struct CheckTreeConfig<R, K> {
    /// Label used in log lines.
    pub name: &'static str,

    pub(crate) row_key: RowKey<R, K>,

    pub(crate) on_change: Option<ChangeCallback<R, K>>,
}

impl<R, K> CheckTreeConfig<R, K> {
    /// Create a config keyed by `row_key`.
    pub fn new(row_key: impl Fn(&R) -> K + Send + Sync + 'static) -> Self {
        Self {
            name: "CheckTree",
            row_key: Box::new(row_key),
            on_change: None,
        }
    }

    /// Set the label used in log lines.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Register the callback invoked after every toggle.
    pub fn on_change(mut self, callback: impl FnMut(&[K], &[&R]) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}

impl<R, K> fmt::Debug for CheckTreeConfig<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckTreeConfig")
            .field("name", &self.name)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
