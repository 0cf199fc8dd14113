//! Display process: store, reconciler and the terminal front end.

pub mod app;
pub mod draw;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod reconcile;
pub mod runtime;
pub mod scene;
pub mod scoreboard;
pub mod slots;
pub mod store;
pub mod terminal_guard;
pub mod theme;
