//! Slot discovery.
//!
//! Resolves the element ids the reconciler writes to, once, at start-up.
//! Game and event slots are probed by index (`game-0`, `game-1`, ...) until
//! the first missing one, so the slot counts are whatever the layout built
//! and stay fixed for the life of the process.

use crate::ui::layout::{
    event_slot, field, game_slot, BAR, BAR_FILL, EVENT_HEADER, GAME_EVENTS, GAME_LIST,
    GAME_LIST_DATE, LOADING, NO_GAMES, NO_GAMES_DATE, UPDATED,
};
use crate::ui::scene::{ElementId, Surface};
use crate::ui::scoreboard::Screen;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("Layout is missing required element '{0}'")]
    MissingElement(String),
}

#[derive(Debug, Clone, Copy)]
pub struct GameSlot {
    pub root: ElementId,
    pub home_name: ElementId,
    pub home_score: ElementId,
    pub away_name: ElementId,
    pub away_score: ElementId,
    pub top: ElementId,
    pub bottom: ElementId,
}

#[derive(Debug, Clone, Copy)]
pub struct EventSlot {
    pub root: ElementId,
    pub scorer: ElementId,
    pub assists: ElementId,
    pub game_state: ElementId,
    pub time: ElementId,
}

/// Everything on the events screen. Absent when the layout has none.
#[derive(Debug, Clone)]
pub struct EventsScreen {
    pub group: ElementId,
    pub header: ElementId,
    pub slots: Vec<EventSlot>,
}

#[derive(Debug, Clone)]
pub struct SlotMap {
    pub loading: ElementId,
    pub no_games: ElementId,
    pub game_list: ElementId,
    pub bar: ElementId,
    pub bar_fill: ElementId,
    pub updated: ElementId,
    pub game_list_date: ElementId,
    pub no_games_date: ElementId,
    pub games: Vec<GameSlot>,
    pub events: Option<EventsScreen>,
}

impl SlotMap {
    pub fn discover<S: Surface + ?Sized>(surface: &S) -> Result<Self, SlotError> {
        let games = probe(surface, game_slot, |root, slot| {
            Ok(GameSlot {
                root,
                home_name: require(surface, &field(slot, "home-name"))?,
                home_score: require(surface, &field(slot, "home-score"))?,
                away_name: require(surface, &field(slot, "away-name"))?,
                away_score: require(surface, &field(slot, "away-score"))?,
                top: require(surface, &field(slot, "game-top"))?,
                bottom: require(surface, &field(slot, "game-bottom"))?,
            })
        })?;

        let events = match surface.find(GAME_EVENTS) {
            Some(group) => Some(EventsScreen {
                group,
                header: require(surface, EVENT_HEADER)?,
                slots: probe(surface, event_slot, |root, slot| {
                    Ok(EventSlot {
                        root,
                        scorer: require(surface, &field(slot, "scorer"))?,
                        assists: require(surface, &field(slot, "assists"))?,
                        game_state: require(surface, &field(slot, "game-state"))?,
                        time: require(surface, &field(slot, "time"))?,
                    })
                })?,
            }),
            None => None,
        };

        let map = Self {
            loading: require(surface, LOADING)?,
            no_games: require(surface, NO_GAMES)?,
            game_list: require(surface, GAME_LIST)?,
            bar: require(surface, BAR)?,
            bar_fill: require(surface, BAR_FILL)?,
            updated: require(surface, UPDATED)?,
            game_list_date: require(surface, GAME_LIST_DATE)?,
            no_games_date: require(surface, NO_GAMES_DATE)?,
            games,
            events,
        };
        tracing::debug!(
            game_slots = map.games.len(),
            event_slots = map.events.as_ref().map_or(0, |events| events.slots.len()),
            "slots discovered"
        );
        Ok(map)
    }

    /// Group element of a top-level screen.
    pub fn screen(&self, screen: Screen) -> Option<ElementId> {
        match screen {
            Screen::Loading => Some(self.loading),
            Screen::NoGames => Some(self.no_games),
            Screen::GameList => Some(self.game_list),
            Screen::GameEvents => self.events.as_ref().map(|events| events.group),
        }
    }
}

fn require<S: Surface + ?Sized>(surface: &S, name: &str) -> Result<ElementId, SlotError> {
    surface
        .find(name)
        .ok_or_else(|| SlotError::MissingElement(name.to_string()))
}

fn probe<S, T, N, B>(surface: &S, name: N, mut bind: B) -> Result<Vec<T>, SlotError>
where
    S: Surface + ?Sized,
    N: Fn(usize) -> String,
    B: FnMut(ElementId, &str) -> Result<T, SlotError>,
{
    let mut slots = Vec::new();
    loop {
        let slot = name(slots.len());
        let Some(root) = surface.find(&slot) else {
            return Ok(slots);
        };
        slots.push(bind(root, &slot)?);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::build_scene;
    use crate::ui::scene::Scene;

    #[test]
    fn discovers_every_built_slot() {
        let scene = build_scene(4, 2);
        let slots = SlotMap::discover(&scene).unwrap();
        assert_eq!(slots.games.len(), 4);
        assert_eq!(slots.events.as_ref().unwrap().slots.len(), 2);
        assert!(slots.screen(Screen::GameEvents).is_some());
    }

    #[test]
    fn events_screen_absent_without_group() {
        let scene = build_scene(1, 0);
        let slots = SlotMap::discover(&scene).unwrap();
        assert!(slots.events.is_none());
        assert!(slots.screen(Screen::GameEvents).is_none());
    }

    #[test]
    fn probing_stops_at_first_gap() {
        let mut scene = build_scene(1, 0);
        // game-2 without game-1 is unreachable.
        for name in crate::ui::layout::GAME_FIELDS {
            scene.add(field("game-2", name));
        }
        scene.add("game-2");
        let slots = SlotMap::discover(&scene).unwrap();
        assert_eq!(slots.games.len(), 1);
    }

    #[test]
    fn missing_field_is_reported() {
        let mut scene = Scene::new();
        scene.add("game-0");
        let err = SlotMap::discover(&scene).unwrap_err();
        assert_eq!(
            err,
            SlotError::MissingElement("game-0/home-name".to_string())
        );
    }
}
