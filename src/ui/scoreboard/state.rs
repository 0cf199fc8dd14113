//! State for the scoreboard.

use crate::ui::mvi::UiState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type GameId = u64;

/// Immutable handle to one scoreboard state.
///
/// The store hands these out from `get_state()`; a new one is allocated for
/// every recognized intent, so two snapshots that are `Arc::ptr_eq` are the
/// same state.
pub type Snapshot = Arc<ScoreboardState>;

impl UiState for Snapshot {}

/// Top-level screens. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Loading,
    NoGames,
    GameList,
    GameEvents,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Loading,
        Screen::NoGames,
        Screen::GameList,
        Screen::GameEvents,
    ];

    fn index(self) -> usize {
        match self {
            Screen::Loading => 0,
            Screen::NoGames => 1,
            Screen::GameList => 2,
            Screen::GameEvents => 3,
        }
    }
}

/// Visibility flag per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenFlags([bool; 4]);

impl ScreenFlags {
    /// Flags with only `screen` set.
    pub fn only(screen: Screen) -> Self {
        let mut flags = [false; 4];
        flags[screen.index()] = true;
        Self(flags)
    }

    pub fn is_shown(&self, screen: Screen) -> bool {
        self.0[screen.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Screen, bool)> + '_ {
        Screen::ALL.into_iter().map(|screen| (screen, self.is_shown(screen)))
    }

    pub fn shown_count(&self) -> usize {
        self.0.iter().filter(|shown| **shown).count()
    }
}

impl Default for ScreenFlags {
    fn default() -> Self {
        Self::only(Screen::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Abbreviation, possibly with a status suffix such as `" (PP)"`.
    pub name: String,
    /// `None` until the game has started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// The two text lines shown beside a game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStatus {
    pub top: String,
    pub bottom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub home: Team,
    pub away: Team,
    #[serde(rename = "game")]
    pub status: GameStatus,
}

/// A scoring play of the active game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u64,
    pub scorer: String,
    pub assists: String,
    pub game_state: String,
    pub time: String,
}

/// Counters for the batch of games currently streaming in.
///
/// `total >= 1`. `done` is stored as sent and read clamped to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: u32,
    pub total: u32,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }

    /// Filled part of a track `track_length` units long, rounded.
    pub fn fill(&self, track_length: u32) -> u32 {
        let total = self.total.max(1);
        let done = self.done.min(total);
        (done as f64 * track_length as f64 / total as f64).round() as u32
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self { done: 0, total: 1 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardState {
    pub screens: ScreenFlags,
    pub games: Vec<Game>,
    pub game_events: Vec<GameEvent>,
    pub active_game: Option<GameId>,
    pub date: String,
    pub updated: String,
    pub progress: Progress,
}

impl Default for ScoreboardState {
    fn default() -> Self {
        Self {
            screens: ScreenFlags::default(),
            games: Vec::new(),
            game_events: Vec::new(),
            active_game: None,
            date: "loading".to_string(),
            updated: "loading".to_string(),
            progress: Progress::default(),
        }
    }
}

impl ScoreboardState {
    pub fn is_showing(&self, screen: Screen) -> bool {
        self.screens.is_shown(screen)
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// The game currently opened on the events screen, if it still exists.
    pub fn active(&self) -> Option<&Game> {
        self.active_game.and_then(|id| self.game(id))
    }
}
