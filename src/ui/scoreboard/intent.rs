use crate::ui::mvi::Intent;

use super::state::{Game, GameEvent, GameId, Screen};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScoreboardIntent {
    /// Dispatched once by the store on construction. No reducer acts on it.
    #[default]
    Init,
    /// Make `Screen` the only visible screen.
    Show(Screen),
    SetDate(String),
    SetUpdated(String),
    SetProgressDone(u32),
    SetProgressTotal(u32),
    /// Insert by id, or replace the existing entry at its current position.
    AddGame(Game),
    ClearGames,
    SetActiveGame(Option<GameId>),
    /// Insert by id, or replace the existing entry at its current position.
    AddGameEvent(GameEvent),
    ClearGameEvents,
}

impl Intent for ScoreboardIntent {}
