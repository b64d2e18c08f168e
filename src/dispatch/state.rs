//! Base trait for dispatchable state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render or serialize the document)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
