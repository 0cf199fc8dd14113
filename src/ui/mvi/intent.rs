//! Base trait for intents (feed/user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Feed updates decoded from the companion process
/// - Navigation (date change, game selection, back)
///
/// `Default` must be the initialization intent: one that no reducer
/// recognizes, dispatched once when a store is constructed.
pub trait Intent: Default + Send + 'static {}
