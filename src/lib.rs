//! Editor-state core for prompt documents.
//!
//! A prompt document is an ordered list of named prompts plus model
//! configuration and execution outputs. This crate holds everything a GUI
//! editor needs around that document except the GUI itself:
//!
//! - [`schema`] — the wire-format document model (serde, JSON)
//! - [`document`] — name-keyed operations on a document
//! - [`editor`] — the locally-edited copy: UI-only row ids, transient
//!   running flags, a reducer over edit/run intents, and the reconciliation
//!   rule that merges a server-returned run result into a document the user
//!   kept editing in the meantime
//! - [`dispatch`] — the State/Intent/Reducer traits the editor implements
//! - [`storage`] — JSON load/save with validation
//!
//! The reducer performs no I/O and spawns nothing; every transition is a
//! discrete intent applied synchronously.

pub mod dispatch;
pub mod document;
pub mod editor;
pub mod schema;
pub mod storage;

pub use document::DocumentError;
pub use editor::{EditorDocument, EditorIntent, EditorPrompt, EditorReducer, PromptId, StateError};
pub use schema::{Output, Prompt, PromptDocument, PromptInput};
pub use storage::StoreError;
