//! Incremental renderer.
//!
//! Brings the scene in line with a scoreboard snapshot. Each slot is bound
//! to the list entry with the same index; every text, visibility and span is
//! compared against what the scene already holds and only written when it
//! differs. Rendering the same snapshot twice performs no writes the second
//! time.

use crate::ui::layout::{TRACK_LENGTH, TRACK_X_START};
use crate::ui::scene::{ElementId, Surface};
use crate::ui::scoreboard::{Game, GameEvent, ScoreboardState, Screen, Team};
use crate::ui::slots::{EventSlot, GameSlot, SlotMap};

/// Header shown when the opened game is no longer in the list.
pub const UNKNOWN_GAME_LABEL: &str = "Game unavailable";

pub struct Reconciler {
    slots: SlotMap,
}

impl Reconciler {
    pub fn new(slots: SlotMap) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &SlotMap {
        &self.slots
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, state: &ScoreboardState) {
        for (screen, shown) in state.screens.iter() {
            if let Some(group) = self.slots.screen(screen) {
                show(surface, group, shown);
            }
        }

        if state.is_showing(Screen::GameList) {
            for (index, slot) in self.slots.games.iter().enumerate() {
                match state.games.get(index) {
                    Some(game) => bind_game(surface, slot, game),
                    None => show(surface, slot.root, false),
                }
            }
        }

        self.render_progress(surface, state);

        if state.is_showing(Screen::GameList) {
            write(surface, self.slots.game_list_date, &state.date);
        } else if state.is_showing(Screen::NoGames) {
            write(surface, self.slots.no_games_date, &state.date);
        }

        self.render_events(surface, state);
    }

    fn render_progress<S: Surface + ?Sized>(&self, surface: &mut S, state: &ScoreboardState) {
        let in_progress = !state.progress.is_complete();
        if in_progress {
            let fill = state.progress.fill(TRACK_LENGTH).min(TRACK_LENGTH);
            place(
                surface,
                self.slots.bar,
                TRACK_X_START + fill,
                TRACK_LENGTH - fill,
            );
        } else {
            write(
                surface,
                self.slots.updated,
                &format!("Updated {}", state.updated),
            );
        }
        show(surface, self.slots.bar, in_progress);
        show(surface, self.slots.bar_fill, in_progress);
        show(surface, self.slots.updated, !in_progress);
    }

    fn render_events<S: Surface + ?Sized>(&self, surface: &mut S, state: &ScoreboardState) {
        let Some(events) = &self.slots.events else {
            return;
        };

        if state.active_game.is_none() {
            for slot in &events.slots {
                show(surface, slot.root, false);
            }
            return;
        }

        let header = match state.active() {
            Some(game) => matchup(game),
            None => UNKNOWN_GAME_LABEL.to_string(),
        };
        write(surface, events.header, &header);

        for (index, slot) in events.slots.iter().enumerate() {
            match state.game_events.get(index) {
                Some(event) => bind_event(surface, slot, event),
                None => show(surface, slot.root, false),
            }
        }
    }
}

/// `"<away> at <home>"`.
pub fn matchup(game: &Game) -> String {
    format!("{} at {}", game.away.name, game.home.name)
}

fn score_text(team: &Team) -> String {
    team.score.map(|score| score.to_string()).unwrap_or_default()
}

fn bind_game<S: Surface + ?Sized>(surface: &mut S, slot: &GameSlot, game: &Game) {
    write(surface, slot.home_name, &game.home.name);
    write(surface, slot.home_score, &score_text(&game.home));
    write(surface, slot.away_name, &game.away.name);
    write(surface, slot.away_score, &score_text(&game.away));
    write(surface, slot.top, &game.status.top);
    write(surface, slot.bottom, &game.status.bottom);
    show(surface, slot.root, true);
}

fn bind_event<S: Surface + ?Sized>(surface: &mut S, slot: &EventSlot, event: &GameEvent) {
    write(surface, slot.scorer, &event.scorer);
    write(surface, slot.assists, &event.assists);
    write(surface, slot.game_state, &event.game_state);
    write(surface, slot.time, &event.time);
    show(surface, slot.root, true);
}

fn write<S: Surface + ?Sized>(surface: &mut S, id: ElementId, text: &str) {
    if surface.text(id) != text {
        surface.set_text(id, text);
    }
}

fn show<S: Surface + ?Sized>(surface: &mut S, id: ElementId, visible: bool) {
    if surface.is_visible(id) != visible {
        surface.set_visible(id, visible);
    }
}

fn place<S: Surface + ?Sized>(surface: &mut S, id: ElementId, x: u32, width: u32) {
    if surface.span(id) != (x, width) {
        surface.set_span(id, x, width);
    }
}
