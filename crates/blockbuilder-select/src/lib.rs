//! Selection state for BlockBuilder.
//!
//! Three layers, composed rather than inherited:
//! - [`Selector`]: the cursor cell under the pointer
//! - [`AreaSelector`]: a cursor plus a two-corner drag region
//! - [`SymmetrySelector`]: a primary area selector and up to three mirrors
//!   replaying every operation under the active [`Symmetry`]
//!
//! Selection state machine of an area selector:
//! ```text
//! Idle ─select()─> Hovering ─set_first_coords()─> DragFirst
//!                     ^                               │
//!                     │                    set_last_coords() + select_area()
//!                     │                               v
//!                     └─────────reset_area()──────  DragSecond
//! ```

mod selector;
mod symmetry;

pub use selector::{AreaSelector, SelectionState, Selector};
pub use symmetry::{Mirror, Symmetry, SymmetrySelector};
