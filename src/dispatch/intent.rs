//! Base trait for intents (user edits / run-completion events).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Direct user edits (insert, delete, field updates)
/// - Completion of an asynchronous run against the server
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
