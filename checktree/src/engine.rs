//! The checkbox selection engine.

use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::hash::Hash;

use log::{debug, trace};

use crate::config::CheckTreeConfig;
use crate::error::{Result, SelectionError};
use crate::index::TreeIndex;
use crate::record::TreeRecord;
use crate::selection::Selected;
use crate::state::{CheckState, NodeState};

/// Keeps checked/indeterminate flags consistent across a tree of records.
///
/// The caller keeps ownership of the tree and passes it into every call. The
/// engine indexes it once in [`derive_state`](Self::derive_state) and caches
/// each record's ancestors and descendants until a differently shaped tree
/// shows up. All state lives in the engine; records are never mutated.
///
/// After every call, an internal row is checked iff every leaf below it is
/// checked, and indeterminate iff some but not all are. Leaves are never
/// indeterminate.
///
/// # Example
///
/// ```ignore
/// let mut engine = CheckTree::new(|row: &Row| row.id.clone());
/// engine.derive_state(&rows, &selected_ids)?;
///
/// // Row checkbox clicked
/// let selected = engine.toggle_node(&rows, &row_id, true)?;
/// on_selection_change(selected.keys, selected.records);
/// ```
pub struct CheckTree<R, K> {
    config: CheckTreeConfig<R, K>,
    index: Option<TreeIndex<K>>,
}

impl<R, K> CheckTree<R, K>
where
    R: TreeRecord,
    K: Eq + Hash + Clone + Debug,
{
    /// Create an engine keyed by `row_key` with default configuration.
    pub fn new(row_key: impl Fn(&R) -> K + Send + Sync + 'static) -> Self {
        Self::with_config(CheckTreeConfig::new(row_key))
    }

    /// Create an engine from a full configuration.
    pub fn with_config(config: CheckTreeConfig<R, K>) -> Self {
        Self {
            config,
            index: None,
        }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &CheckTreeConfig<R, K> {
        &self.config
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Derive every row's state from an externally controlled set of keys.
    ///
    /// Rebuilds the caches when `tree` differs in shape from the last indexed
    /// tree. Keys missing from the tree are ignored. An internal row whose own
    /// key is selected is still only checked when all leaves below it are.
    ///
    /// On `DuplicateKey` the previous caches are dropped and nothing is
    /// annotated.
    pub fn derive_state<'k, I>(&mut self, tree: &[R], selected_keys: I) -> Result<()>
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        let selected: HashSet<&K> = selected_keys.into_iter().collect();

        let mut index = match self.index.take() {
            Some(index) if index.bind(tree, &self.config.row_key).is_ok() => index,
            previous => {
                if previous.is_some() {
                    debug!("{}: tree shape changed, rebuilding index", self.config.name);
                }
                let index = TreeIndex::build(tree, &self.config.row_key)?;
                debug!("{}: indexed {} records", self.config.name, index.len());
                index
            }
        };

        for position in 0..index.len() {
            let checked = selected.contains(&index.slot(position).key);
            index.set_state(position, NodeState::uniform(checked));
        }
        index.settle_all();

        let unknown = selected
            .iter()
            .filter(|key| index.position(key).is_none())
            .count();
        if unknown > 0 {
            debug!(
                "{}: ignored {} selected keys not present in the tree",
                self.config.name, unknown
            );
        }

        self.index = Some(index);
        Ok(())
    }

    /// Check or uncheck one row, cascading to its subtree and re-deriving its ancestors.
    ///
    /// Returns the new selection and forwards it to the `on_change` callback.
    pub fn toggle_node<'t>(
        &mut self,
        tree: &'t [R],
        key: &K,
        checked: bool,
    ) -> Result<Selected<'t, R, K>> {
        let index = self.index.as_mut().ok_or_else(SelectionError::not_indexed)?;
        let records = index.bind(tree, &self.config.row_key)?;
        let position = index
            .position(key)
            .ok_or_else(|| SelectionError::UnknownNode {
                key: format!("{key:?}"),
            })?;

        trace!("{}: toggle {:?} -> {}", self.config.name, key, checked);

        index.set_state(position, NodeState::uniform(checked));
        let descendants = index.descendants(position);
        index.fill(descendants, checked);
        let ancestors = index.slot(position).ancestors.clone();
        for ancestor in ancestors {
            index.settle(ancestor);
        }

        let selected = collect(index, records);
        self.notify(&selected);
        Ok(selected)
    }

    /// Check or uncheck every row in the tree.
    ///
    /// Returns the new selection and forwards it to the `on_change` callback.
    pub fn toggle_all<'t>(&mut self, tree: &'t [R], checked: bool) -> Result<Selected<'t, R, K>> {
        let index = self.index.as_mut().ok_or_else(SelectionError::not_indexed)?;
        let records = index.bind(tree, &self.config.row_key)?;

        trace!("{}: toggle all -> {}", self.config.name, checked);
        let all = 0..index.len();
        index.fill(all, checked);

        let selected = collect(index, records);
        self.notify(&selected);
        Ok(selected)
    }

    /// Fully checked rows of `tree`, in pre-order.
    pub fn extract_selected<'t>(&self, tree: &'t [R]) -> Result<Selected<'t, R, K>> {
        let index = self.index.as_ref().ok_or_else(SelectionError::not_indexed)?;
        let records = index.bind(tree, &self.config.row_key)?;
        Ok(collect(index, records))
    }

    fn notify(&mut self, selected: &Selected<'_, R, K>) {
        if let Some(on_change) = self.config.on_change.as_mut() {
            on_change(&selected.keys, &selected.records);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Keys of fully checked rows in pre-order, without walking a tree.
    pub fn selected_keys(&self) -> Vec<K> {
        self.index
            .iter()
            .flat_map(|index| index.slots())
            .filter(|slot| slot.state.checked)
            .map(|slot| slot.key.clone())
            .collect()
    }

    /// Number of fully checked rows.
    pub fn selected_count(&self) -> usize {
        self.index
            .iter()
            .flat_map(|index| index.slots())
            .filter(|slot| slot.state.checked)
            .count()
    }

    /// Whether the row is checked. False for unknown keys.
    pub fn is_checked(&self, key: &K) -> bool {
        self.node_state(key).is_some_and(|state| state.checked)
    }

    /// Whether the row is indeterminate. False for unknown keys.
    pub fn is_indeterminate(&self, key: &K) -> bool {
        self.node_state(key).is_some_and(|state| state.indeterminate)
    }

    /// Raw checked/indeterminate flags of a row. None for unknown keys.
    pub fn node_state(&self, key: &K) -> Option<NodeState> {
        self.index.as_ref()?.get(key).map(|slot| slot.state)
    }

    /// Tri-state value of a row's checkbox. None for unknown keys.
    pub fn state(&self, key: &K) -> Option<CheckState> {
        self.node_state(key).map(CheckState::from)
    }

    /// Cached ancestors of a row, root first.
    pub fn ancestors(&self, key: &K) -> Option<Vec<&K>> {
        let index = self.index.as_ref()?;
        let slot = index.get(key)?;
        Some(
            slot.ancestors
                .iter()
                .map(|&position| &index.slot(position).key)
                .collect(),
        )
    }

    /// Cached descendants of a row, in pre-order.
    pub fn descendants(&self, key: &K) -> Option<Vec<&K>> {
        let index = self.index.as_ref()?;
        let position = index.position(key)?;
        Some(
            index.slots()[index.descendants(position)]
                .iter()
                .map(|slot| &slot.key)
                .collect(),
        )
    }

    /// Number of indexed rows.
    pub fn len(&self) -> usize {
        self.index.as_ref().map_or(0, TreeIndex::len)
    }

    /// Check if no rows are indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a tree has been indexed.
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Drop the caches and every row's state.
    pub fn invalidate(&mut self) {
        if self.index.take().is_some() {
            debug!("{}: index invalidated", self.config.name);
        }
    }
}

fn collect<'t, R, K>(index: &TreeIndex<K>, records: Vec<&'t R>) -> Selected<'t, R, K>
where
    K: Eq + Hash + Clone + Debug,
{
    let (keys, records): (Vec<K>, Vec<&'t R>) = index
        .slots()
        .iter()
        .zip(records)
        .filter(|(slot, _)| slot.state.checked)
        .map(|(slot, record)| (slot.key.clone(), record))
        .unzip();
    Selected { keys, records }
}

impl<R, K: Debug> Debug for CheckTree<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckTree")
            .field("config", &self.config)
            .field("index", &self.index)
            .finish()
    }
}
