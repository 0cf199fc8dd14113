//! Reducer for the scoreboard.

use crate::ui::mvi::Reducer;
use std::sync::Arc;

use super::intent::ScoreboardIntent;
use super::state::{Game, GameEvent, ScoreboardState, ScreenFlags, Snapshot};

/// Reducer for scoreboard state transitions.
///
/// Pure function. Every recognized intent yields a freshly allocated
/// snapshot; the previous one is never touched, so readers holding it keep
/// a consistent view. `Init` returns the incoming handle itself.
pub struct ScoreboardReducer;

impl Reducer for ScoreboardReducer {
    type State = Snapshot;
    type Intent = ScoreboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if matches!(intent, ScoreboardIntent::Init) {
            return state;
        }

        let mut next = ScoreboardState::clone(&state);
        match intent {
            ScoreboardIntent::Init => {}
            ScoreboardIntent::Show(screen) => next.screens = ScreenFlags::only(screen),
            ScoreboardIntent::SetDate(value) => next.date = value,
            ScoreboardIntent::SetUpdated(value) => next.updated = value,
            ScoreboardIntent::SetProgressDone(value) => next.progress.done = value,
            ScoreboardIntent::SetProgressTotal(value) => next.progress.total = value.max(1),
            ScoreboardIntent::AddGame(game) => upsert(&mut next.games, game),
            ScoreboardIntent::ClearGames => next.games.clear(),
            ScoreboardIntent::SetActiveGame(value) => next.active_game = value,
            ScoreboardIntent::AddGameEvent(event) => upsert(&mut next.game_events, event),
            ScoreboardIntent::ClearGameEvents => next.game_events.clear(),
        }
        Arc::new(next)
    }
}

trait Keyed {
    fn key(&self) -> u64;
}

impl Keyed for Game {
    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for GameEvent {
    fn key(&self) -> u64 {
        self.id
    }
}

/// Replace the entry with the same key where it stands, or append.
///
/// Slots are bound by position, so an update must never move an entry.
fn upsert<T: Keyed>(items: &mut Vec<T>, item: T) {
    match items.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::scoreboard::{GameStatus, Progress, Screen, Team};

    fn game(id: u64, home_score: Option<u32>) -> Game {
        Game {
            id,
            home: Team {
                name: "BOS".to_string(),
                score: home_score,
            },
            away: Team {
                name: "NYR".to_string(),
                score: Some(1),
            },
            status: GameStatus {
                top: "3rd".to_string(),
                bottom: "4:21".to_string(),
            },
        }
    }

    fn reduce_all(intents: Vec<ScoreboardIntent>) -> Snapshot {
        intents
            .into_iter()
            .fold(Snapshot::default(), ScoreboardReducer::reduce)
    }

    #[test]
    fn init_returns_same_snapshot() {
        let state = Snapshot::default();
        let next = ScoreboardReducer::reduce(Arc::clone(&state), ScoreboardIntent::Init);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn recognized_intent_allocates_new_snapshot() {
        let state = Snapshot::default();
        let next = ScoreboardReducer::reduce(
            Arc::clone(&state),
            ScoreboardIntent::SetDate("Mon Oct 16".to_string()),
        );
        assert!(!Arc::ptr_eq(&state, &next));
        assert_eq!(state.date, "loading");
        assert_eq!(next.date, "Mon Oct 16");
    }

    #[test]
    fn show_sets_exactly_one_screen() {
        for screen in Screen::ALL {
            let state = reduce_all(vec![ScoreboardIntent::Show(screen)]);
            assert!(state.is_showing(screen));
            assert_eq!(state.screens.shown_count(), 1);
        }
    }

    #[test]
    fn add_game_twice_keeps_one_entry_with_latest_fields() {
        let state = reduce_all(vec![
            ScoreboardIntent::AddGame(game(7, Some(2))),
            ScoreboardIntent::AddGame(game(7, Some(3))),
        ]);
        assert_eq!(state.games.len(), 1);
        assert_eq!(state.games[0].home.score, Some(3));
    }

    #[test]
    fn update_keeps_position() {
        let state = reduce_all(vec![
            ScoreboardIntent::AddGame(game(1, None)),
            ScoreboardIntent::AddGame(game(2, None)),
            ScoreboardIntent::AddGame(game(1, Some(4))),
        ]);
        let ids: Vec<_> = state.games.iter().map(|game| game.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(state.games[0].home.score, Some(4));
    }

    #[test]
    fn progress_fields_are_independent_of_order() {
        let done_first = reduce_all(vec![
            ScoreboardIntent::SetProgressDone(3),
            ScoreboardIntent::SetProgressTotal(10),
        ]);
        let total_first = reduce_all(vec![
            ScoreboardIntent::SetProgressTotal(10),
            ScoreboardIntent::SetProgressDone(3),
        ]);
        assert_eq!(done_first.progress, Progress { done: 3, total: 10 });
        assert_eq!(done_first.progress, total_first.progress);
    }

    #[test]
    fn progress_total_never_drops_below_one() {
        let state = reduce_all(vec![
            ScoreboardIntent::SetProgressDone(1),
            ScoreboardIntent::SetProgressTotal(0),
        ]);
        assert_eq!(state.progress, Progress { done: 1, total: 1 });
    }

    #[test]
    fn clear_games_leaves_events_alone() {
        let state = reduce_all(vec![
            ScoreboardIntent::AddGame(game(1, None)),
            ScoreboardIntent::AddGameEvent(GameEvent {
                id: 9,
                scorer: "Pastrnak (12)".to_string(),
                assists: "Marchand".to_string(),
                game_state: "1 - 0".to_string(),
                time: "4:21 1st".to_string(),
            }),
            ScoreboardIntent::ClearGames,
        ]);
        assert!(state.games.is_empty());
        assert_eq!(state.game_events.len(), 1);
    }
}
