use crate::ipc::{self, CompanionMessage, CompanionRequest};
use crate::ui::scoreboard::{ScoreboardIntent, ScoreboardReducer, Screen, Snapshot};
use crate::ui::store::Store;
use std::rc::Rc;
use std::sync::mpsc::Sender;

/// Display-side controller.
///
/// Turns key presses and companion messages into store dispatches and
/// companion requests. Holds no view state of its own beyond the day offset.
pub struct App {
    store: Rc<Store<ScoreboardReducer>>,
    requests: Sender<CompanionRequest>,
    events_enabled: bool,
    day_offset: i64,
    should_quit: bool,
    companion_online: bool,
    last_link_error: Option<String>,
}

impl App {
    pub fn new(
        store: Rc<Store<ScoreboardReducer>>,
        requests: Sender<CompanionRequest>,
        events_enabled: bool,
    ) -> Self {
        Self {
            store,
            requests,
            events_enabled,
            day_offset: 0,
            should_quit: false,
            companion_online: true,
            last_link_error: None,
        }
    }

    pub fn state(&self) -> Snapshot {
        self.store.get_state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Days relative to today of the schedule being shown.
    pub fn day_offset(&self) -> i64 {
        self.day_offset
    }

    pub fn companion_online(&self) -> bool {
        self.companion_online
    }

    pub fn last_link_error(&self) -> Option<&str> {
        self.last_link_error.as_deref()
    }

    /// Ask for the current day's schedule.
    pub fn refresh(&mut self) {
        self.send(CompanionRequest::FetchGames {
            offset: self.day_offset,
        });
    }

    /// Move the schedule `delta` days and reload.
    pub fn change_date(&mut self, delta: i64) {
        self.day_offset = self.day_offset.saturating_add(delta);
        self.store.dispatch(ScoreboardIntent::SetActiveGame(None));
        self.store.dispatch(ScoreboardIntent::ClearGameEvents);
        self.store.dispatch(ScoreboardIntent::ClearGames);
        self.store.dispatch(ScoreboardIntent::SetProgressTotal(1));
        self.store.dispatch(ScoreboardIntent::SetProgressDone(0));
        self.store.dispatch(ScoreboardIntent::Show(Screen::Loading));
        self.refresh();
    }

    /// Open the scoring plays of the game in list slot `index`.
    ///
    /// Ignored unless the game list is showing and the slot holds a game.
    pub fn select_game(&mut self, index: usize) {
        if !self.events_enabled {
            return;
        }
        let state = self.store.get_state();
        if !state.is_showing(Screen::GameList) {
            return;
        }
        let Some(game) = state.games.get(index) else {
            return;
        };
        let game_id = game.id;
        tracing::debug!(game_id, index, "opening game events");
        self.store.dispatch(ScoreboardIntent::ClearGameEvents);
        self.store
            .dispatch(ScoreboardIntent::SetActiveGame(Some(game_id)));
        self.store.dispatch(ScoreboardIntent::Show(Screen::GameEvents));
        self.send(CompanionRequest::FetchEvents { game_id });
    }

    /// Leave the events screen for the game list.
    pub fn back(&mut self) {
        if !self.store.get_state().is_showing(Screen::GameEvents) {
            return;
        }
        self.store.dispatch(ScoreboardIntent::SetActiveGame(None));
        self.store.dispatch(ScoreboardIntent::ClearGameEvents);
        self.store.dispatch(ScoreboardIntent::Show(Screen::GameList));
        // The companion stops watching plays once it sees a games request.
        self.refresh();
    }

    /// Apply a companion message. Schedule batches for a day other than the
    /// one on screen are answers to superseded requests and are dropped.
    pub fn on_companion(&mut self, message: CompanionMessage) {
        self.companion_online = true;
        if let Some(offset) = message.offset() {
            if offset != self.day_offset {
                tracing::debug!(
                    offset,
                    day_offset = self.day_offset,
                    "dropping stale schedule"
                );
                return;
            }
        }
        ipc::apply(&self.store, message);
    }

    pub fn on_companion_closed(&mut self) {
        tracing::warn!("companion closed its output");
        self.companion_online = false;
    }

    fn send(&mut self, request: CompanionRequest) {
        match self.requests.send(request) {
            Ok(()) => self.last_link_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "companion request dropped");
                self.last_link_error = Some(format!("Companion unreachable: {err}"));
            }
        }
    }
}
