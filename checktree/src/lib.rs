//! Checkbox selection state for hierarchical tables.
//!
//! [`CheckTree`] keeps per-row checked/indeterminate flags consistent across a
//! tree of records. The table renderer drives it through three operations:
//!
//! - [`CheckTree::derive_state`] - rebuild state from an externally controlled key set
//! - [`CheckTree::toggle_node`] - a row checkbox was clicked
//! - [`CheckTree::toggle_all`] - the header checkbox was clicked
//!
//! and reads [`CheckTree::is_checked`] / [`CheckTree::is_indeterminate`] to paint
//! each row.

pub mod config;
pub mod engine;
pub mod error;
mod index;
pub mod record;
pub mod selection;
pub mod state;

pub use config::CheckTreeConfig;
pub use engine::CheckTree;
pub use error::{Result, SelectionError};
pub use record::TreeRecord;
pub use selection::Selected;
pub use state::{CheckState, NodeState};

pub mod prelude {
    pub use crate::config::CheckTreeConfig;
    pub use crate::engine::CheckTree;
    pub use crate::error::SelectionError;
    pub use crate::record::TreeRecord;
    pub use crate::selection::Selected;
    pub use crate::state::{CheckState, NodeState};
}
