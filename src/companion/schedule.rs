//! Schedule endpoint payload and its mapping onto `add_game` messages.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::ipc::CompanionMessage;
use crate::ui::scoreboard::{GameStatus, Team};

use super::clock::start_time;

#[derive(Debug, Default, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub game_pk: u64,
    #[serde(default)]
    pub game_date: String,
    pub teams: Matchup<TeamEntry>,
    #[serde(default)]
    pub linescore: Linescore,
    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Default, Deserialize)]
pub struct Matchup<T> {
    pub home: T,
    pub away: T,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub team: TeamInfo,
}

#[derive(Debug, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub current_period: u32,
    #[serde(default)]
    pub current_period_ordinal: String,
    #[serde(default)]
    pub current_period_time_remaining: String,
    #[serde(default)]
    pub teams: Matchup<LinescoreTeam>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinescoreTeam {
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub power_play: bool,
    #[serde(default)]
    pub goalie_pulled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default)]
    pub abstract_game_state: String,
}

const FINAL_STATE: &str = "Final";
const UNSCHEDULED_TIME: &str = "TBD";

impl Schedule {
    /// Games of the first date in the response.
    pub fn games(&self) -> &[ScheduledGame] {
        self.dates
            .first()
            .map(|date| date.games.as_slice())
            .unwrap_or_default()
    }
}

/// Messages for one schedule fetch.
///
/// An empty day yields a single `no_games`; otherwise one `add_game` per
/// game, numbered in response order. Every message carries `offset`.
pub fn game_messages(
    schedule: &Schedule,
    offset: i64,
    local: &FixedOffset,
    updated: &str,
    date_label: &str,
) -> Vec<CompanionMessage> {
    let games = schedule.games();
    if games.is_empty() {
        return vec![CompanionMessage::NoGames {
            offset,
            date: date_label.to_string(),
        }];
    }

    let count = u32::try_from(games.len()).unwrap_or(u32::MAX);
    games
        .iter()
        .zip(0u32..)
        .map(|(game, i)| {
            let period = game.linescore.current_period;
            CompanionMessage::AddGame {
                offset,
                id: game.game_pk,
                home: team(&game.teams.home, &game.linescore.teams.home, period),
                away: team(&game.teams.away, &game.linescore.teams.away, period),
                game: game_status(game, local),
                count,
                i,
                updated: updated.to_string(),
                date: Some(date_label.to_string()),
            }
        })
        .collect()
}

/// Team abbreviation with its power-play / empty-net suffix. No score before
/// the first period.
pub fn team(entry: &TeamEntry, line: &LinescoreTeam, period: u32) -> Team {
    let abbreviation = entry
        .team
        .abbreviation
        .clone()
        .unwrap_or_else(|| entry.team.name.clone());
    let suffix = match (line.power_play, line.goalie_pulled) {
        (true, true) => " (PP, EN)",
        (true, false) => " (PP)",
        (false, true) => " (EN)",
        (false, false) => "",
    };
    Team {
        name: format!("{abbreviation}{suffix}"),
        score: (period != 0).then_some(line.goals),
    }
}

pub fn game_status(game: &ScheduledGame, local: &FixedOffset) -> GameStatus {
    let line = &game.linescore;
    if line.current_period == 0 {
        let top = start_time(&game.game_date, local).unwrap_or_else(|| {
            tracing::debug!(game = game.game_pk, date = %game.game_date, "unparsable start time");
            UNSCHEDULED_TIME.to_string()
        });
        GameStatus {
            top,
            bottom: String::new(),
        }
    } else if game.status.abstract_game_state == FINAL_STATE {
        GameStatus {
            top: line.current_period_time_remaining.clone(),
            bottom: line.current_period_ordinal.clone(),
        }
    } else {
        GameStatus {
            top: line.current_period_ordinal.clone(),
            bottom: line.current_period_time_remaining.clone(),
        }
    }
}
