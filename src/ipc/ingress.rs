//! Feed messages → scoreboard intents.

use crate::ui::scoreboard::{
    Game, GameEvent, ScoreboardIntent, ScoreboardReducer, ScoreboardState, Screen,
};
use crate::ui::store::Store;

use super::types::CompanionMessage;

/// Intents for `message`, given the state it arrives into.
pub fn intents_for(state: &ScoreboardState, message: CompanionMessage) -> Vec<ScoreboardIntent> {
    let mut intents = Vec::new();
    if let Some(date) = message.date() {
        intents.push(ScoreboardIntent::SetDate(date.to_string()));
    }

    match message {
        CompanionMessage::AddGame {
            id,
            home,
            away,
            game,
            count,
            i,
            updated,
            ..
        } => {
            intents.push(ScoreboardIntent::AddGame(Game {
                id,
                home,
                away,
                status: game,
            }));
            intents.push(ScoreboardIntent::SetProgressTotal(count));
            intents.push(ScoreboardIntent::SetProgressDone(i.saturating_add(1)));
            intents.push(ScoreboardIntent::SetUpdated(updated));
            // A refresh must not pull the user off the events screen.
            if state.is_showing(Screen::Loading) || state.is_showing(Screen::NoGames) {
                intents.push(ScoreboardIntent::Show(Screen::GameList));
            }
        }
        CompanionMessage::NoGames { .. } => {
            intents.push(ScoreboardIntent::Show(Screen::NoGames));
        }
        CompanionMessage::AddEvent {
            game_id,
            id,
            scorer,
            assists,
            game_state,
            time,
        } => {
            if state.active_game == Some(game_id) {
                intents.push(ScoreboardIntent::AddGameEvent(GameEvent {
                    id,
                    scorer,
                    assists,
                    game_state,
                    time,
                }));
            } else {
                tracing::debug!(game_id, "dropping event for inactive game");
            }
        }
    }
    intents
}

/// Dispatch the intents for `message` into `store`.
pub fn apply(store: &Store<ScoreboardReducer>, message: CompanionMessage) {
    let state = store.get_state();
    for intent in intents_for(&state, message) {
        store.dispatch(intent);
    }
}
