use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::scoreboard::{GameId, GameStatus, Team};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Companion I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Companion connection closed")]
    Disconnected,
}

/// Companion → display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CompanionMessage {
    /// One game of a schedule batch. `i` is the zero-based position of this
    /// game in a batch of `count`. `offset` echoes the request it answers.
    AddGame {
        #[serde(default)]
        offset: i64,
        id: GameId,
        home: Team,
        away: Team,
        game: GameStatus,
        count: u32,
        i: u32,
        updated: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    NoGames {
        #[serde(default)]
        offset: i64,
        date: String,
    },
    AddEvent {
        game_id: GameId,
        id: u64,
        scorer: String,
        assists: String,
        game_state: String,
        time: String,
    },
}

impl CompanionMessage {
    /// Display date carried by the message, if any.
    pub fn date(&self) -> Option<&str> {
        match self {
            CompanionMessage::AddGame { date, .. } => date.as_deref(),
            CompanionMessage::NoGames { date, .. } => Some(date),
            CompanionMessage::AddEvent { .. } => None,
        }
    }

    /// Day offset of the schedule request a batch message answers.
    pub fn offset(&self) -> Option<i64> {
        match self {
            CompanionMessage::AddGame { offset, .. } | CompanionMessage::NoGames { offset, .. } => {
                Some(*offset)
            }
            CompanionMessage::AddEvent { .. } => None,
        }
    }
}

/// Display → companion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CompanionRequest {
    /// Refetch the schedule for today plus `offset` days.
    FetchGames { offset: i64 },
    /// Fetch the scoring plays of one game and keep them refreshed.
    FetchEvents { game_id: GameId },
}
