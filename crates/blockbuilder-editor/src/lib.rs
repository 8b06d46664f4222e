//! BlockBuilder editor.
//!
//! [`Builder`] owns the block grid and the symmetry selector and turns
//! pointer picks reported by the window layer into edits. Rendering and
//! windowing stay with the host; this crate only consumes [`PickResult`]s.
//!
//! [`PickResult`]: blockbuilder_pick::PickResult

pub mod builder;
pub mod gesture;
pub mod logging;

pub use builder::{Builder, ImportReport, PickOutcome};
pub use gesture::ButtonPhase;
pub use logging::{init_tracing, try_init_tracing};
