//! Editor state for a prompt document.
//!
//! Holds the locally-edited copy of a document while the GUI works on it.
//! Every prompt row carries a UI-only [`PromptId`] (stable across renames,
//! never serialized) and a transient running flag. All mutation goes through
//! [`EditorReducer`]: discrete intents in, new state out, no I/O.
//!
//! The one nontrivial transition is run completion: the server returns an
//! authoritative document some time after the run started, and the user may
//! have kept editing in between. [`reconcile`] merges the server copy back in
//! without discarding either side; see that module for the exact rule.

mod intent;
mod reconcile;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorDocument, EditorPrompt, PromptId};

use thiserror::Error;

/// Contract violations surfaced by [`EditorReducer`].
///
/// These are programming errors, not recoverable conditions; callers should
/// treat them as fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// A run response did not contain the prompt that ran. Names are the
    /// join key between local and server copies, so a response missing the
    /// expected name means the two sides disagree about the document.
    #[error("run response has no prompt named '{name}'")]
    MissingServerPrompt { name: String },
}
