//! Pre-order index over a record tree.
//!
//! One slot per record, in pre-order. Each slot caches the record's ancestors
//! (root-first positions) and the end of its subtree, so the descendants of
//! the slot at `i` are exactly the slots in `i + 1..end`. The index also owns
//! the checkbox state, keeping it out of the caller's records.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use crate::config::RowKey;
use crate::error::{Result, SelectionError};
use crate::record::TreeRecord;
use crate::state::NodeState;

#[derive(Debug, Clone)]
pub(crate) struct Slot<K> {
    pub key: K,
    pub depth: usize,
    pub leaf: bool,
    /// Exclusive end of this slot's subtree.
    pub end: usize,
    pub ancestors: Vec<usize>,
    pub state: NodeState,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeIndex<K> {
    slots: Vec<Slot<K>>,
    positions: HashMap<K, usize>,
}

impl<K> TreeIndex<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Index `tree`, rejecting duplicate keys.
    ///
    /// Walks with an explicit stack, so tree depth is not limited by the
    /// thread's stack size.
    pub fn build<R: TreeRecord>(tree: &[R], row_key: &RowKey<R, K>) -> Result<Self> {
        let mut index = Self {
            slots: Vec::new(),
            positions: HashMap::new(),
        };
        // Open internal slots from the root down to the current parent.
        let mut path: Vec<usize> = Vec::new();
        let mut stack: Vec<(&R, usize)> = tree.iter().rev().map(|record| (record, 0)).collect();

        while let Some((record, depth)) = stack.pop() {
            let position = index.slots.len();
            for closed in path.drain(depth..) {
                index.slots[closed].end = position;
            }

            let key = row_key(record);
            if index.positions.insert(key.clone(), position).is_some() {
                return Err(SelectionError::DuplicateKey {
                    key: format!("{key:?}"),
                });
            }

            let leaf = record.is_leaf();
            index.slots.push(Slot {
                key,
                depth,
                leaf,
                end: position + 1,
                ancestors: path.clone(),
                state: NodeState::default(),
            });

            if !leaf {
                path.push(position);
                stack.extend(record.children().iter().rev().map(|child| (child, depth + 1)));
            }
        }

        let len = index.slots.len();
        for closed in path {
            index.slots[closed].end = len;
        }
        Ok(index)
    }

    /// Walk `tree` against the index and return its records in pre-order.
    ///
    /// Fails with `ShapeMismatch` unless the tree has exactly the indexed
    /// keys at the indexed depths, in the same order.
    pub fn bind<'t, R: TreeRecord>(
        &self,
        tree: &'t [R],
        row_key: &RowKey<R, K>,
    ) -> Result<Vec<&'t R>> {
        let mut records = Vec::with_capacity(self.slots.len());
        let mut stack: Vec<(&'t R, usize)> =
            tree.iter().rev().map(|record| (record, 0)).collect();

        while let Some((record, depth)) = stack.pop() {
            let position = records.len();
            let Some(slot) = self.slots.get(position) else {
                return Err(SelectionError::ShapeMismatch {
                    position,
                    reason: format!("tree has more than {} records", self.slots.len()),
                });
            };

            let key = row_key(record);
            if key != slot.key || depth != slot.depth {
                return Err(SelectionError::ShapeMismatch {
                    position,
                    reason: format!(
                        "expected {:?} at depth {}, found {:?} at depth {}",
                        slot.key, slot.depth, key, depth
                    ),
                });
            }

            records.push(record);
            stack.extend(record.children().iter().rev().map(|child| (child, depth + 1)));
        }

        if records.len() != self.slots.len() {
            return Err(SelectionError::ShapeMismatch {
                position: records.len(),
                reason: format!(
                    "tree has {} records, index has {}",
                    records.len(),
                    self.slots.len()
                ),
            });
        }
        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn slot(&self, position: usize) -> &Slot<K> {
        &self.slots[position]
    }

    pub fn slots(&self) -> &[Slot<K>] {
        &self.slots
    }

    pub fn get(&self, key: &K) -> Option<&Slot<K>> {
        self.position(key).map(|position| &self.slots[position])
    }

    pub fn descendants(&self, position: usize) -> Range<usize> {
        position + 1..self.slots[position].end
    }

    pub fn set_state(&mut self, position: usize, state: NodeState) {
        self.slots[position].state = state;
    }

    /// Set every slot in `range` to a uniform state.
    pub fn fill(&mut self, range: Range<usize>, checked: bool) {
        for slot in &mut self.slots[range] {
            slot.state = NodeState::uniform(checked);
        }
    }

    /// Settle every internal slot in one backward pass.
    ///
    /// Children follow their parent in pre-order, so walking backwards sees
    /// every child before its parent; each slot hands its leaf counts up to
    /// its parent.
    pub fn settle_all(&mut self) {
        let mut counts = vec![(0usize, 0usize); self.slots.len()];
        for position in (0..self.slots.len()).rev() {
            let slot = &mut self.slots[position];
            if slot.leaf {
                counts[position] = (usize::from(slot.state.checked), 1);
            } else {
                let (checked, leaves) = counts[position];
                slot.state = NodeState::from_leaves(checked, leaves);
            }

            if let Some(&parent) = slot.ancestors.last() {
                let (checked, leaves) = counts[position];
                counts[parent].0 += checked;
                counts[parent].1 += leaves;
            }
        }
    }

    /// Recompute an internal slot's state from the leaves of its subtree.
    ///
    /// Reads leaves only, so settling ancestors in any order gives the same
    /// result. Leaf slots are left as they are.
    pub fn settle(&mut self, position: usize) {
        if self.slots[position].leaf {
            return;
        }

        let (mut checked, mut leaves) = (0, 0);
        for slot in &self.slots[self.descendants(position)] {
            if slot.leaf {
                leaves += 1;
                if slot.state.checked {
                    checked += 1;
                }
            }
        }
        self.slots[position].state = NodeState::from_leaves(checked, leaves);
    }
}
