//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between the companion feed and the display.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Store ──→ Reconciler ──→ Scene
//!    ↑                                                        │
//!    └──────────────── new dispatch only ─────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every dispatch
//! - **Intent**: Feed messages or user navigation, as a closed enum
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
