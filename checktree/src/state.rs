//! Per-row checkbox state.

use serde::{Deserialize, Serialize};

/// Tri-state value of a row's checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// Neither the row nor any leaf below it is selected.
    #[default]
    Unchecked,
    /// The row and its whole subtree are selected.
    Checked,
    /// Some, but not all, leaves below the row are selected.
    Indeterminate,
}

impl CheckState {
    /// Checkbox glyph for text renderers: "■", "▣" or "□".
    pub fn glyph(self) -> &'static str {
        match self {
            CheckState::Checked => "■",
            CheckState::Indeterminate => "▣",
            CheckState::Unchecked => "□",
        }
    }
}

/// Checked/indeterminate flags the engine keeps for each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeState {
    pub checked: bool,
    pub indeterminate: bool,
}

impl NodeState {
    /// Uniform state: checked or unchecked, never indeterminate.
    pub fn uniform(checked: bool) -> Self {
        Self {
            checked,
            indeterminate: false,
        }
    }

    /// State of an internal node given how many of its `leaves` are checked.
    pub fn from_leaves(checked: usize, leaves: usize) -> Self {
        Self {
            checked: leaves > 0 && checked == leaves,
            indeterminate: checked > 0 && checked < leaves,
        }
    }

    /// Collapse the flags into a single [`CheckState`].
    pub fn check_state(self) -> CheckState {
        if self.checked {
            CheckState::Checked
        } else if self.indeterminate {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

impl From<NodeState> for CheckState {
    fn from(state: NodeState) -> Self {
        state.check_state()
    }
}
