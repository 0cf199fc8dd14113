//! Scoreboard feature module.
//!
//! Holds everything the display shows: which screen is up, the games for
//! the selected date, scoring plays for the opened game and the progress
//! of the batch currently streaming in from the companion.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot and domain types (games, teams, events)
//! - `intent.rs` - Feed and navigation intents
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ScoreboardIntent;
pub use reducer::ScoreboardReducer;
pub use state::{
    Game, GameEvent, GameId, GameStatus, Progress, ScoreboardState, Screen, ScreenFlags,
    Snapshot, Team,
};
