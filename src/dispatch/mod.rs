//! Dispatch primitives for unidirectional document-state flow.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View / caller
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of the edited document
//! - **Intent**: a user edit or the completion of an asynchronous run
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Reducers never perform I/O; the caller owns every side effect (issuing
//! the run request, persisting the document) around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
