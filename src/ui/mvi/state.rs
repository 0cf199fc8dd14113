//! Snapshot trait for store state.

/// A complete, renderable snapshot held by a store.
///
/// A reducer returns a new snapshot rather than mutating the old one, so a
/// snapshot handed out by the store never changes underneath its reader.
/// Scoreboard snapshots are `Arc`s: cloning one is a pointer copy, and a
/// reducer that leaves the state alone returns the same allocation.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
