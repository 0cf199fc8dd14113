use crate::ui::scene::Scene;
use ratatui::layout::Rect;

/// Length of the progress track in scene units.
pub const TRACK_LENGTH: u32 = 336;
/// Left edge of the progress track in scene units.
pub const TRACK_X_START: u32 = 6;

pub const LOADING: &str = "loading";
pub const NO_GAMES: &str = "no-games";
pub const GAME_LIST: &str = "game-list";
pub const GAME_EVENTS: &str = "game-events";

pub const BAR: &str = "bar";
pub const BAR_FILL: &str = "bar-fill";
pub const UPDATED: &str = "updated";
pub const GAME_LIST_DATE: &str = "game-list/date";
pub const NO_GAMES_DATE: &str = "no-games/date";
pub const EVENT_HEADER: &str = "game-events/header";

pub fn game_slot(index: usize) -> String {
    format!("game-{index}")
}

pub fn event_slot(index: usize) -> String {
    format!("event-{index}")
}

/// Name of a field element inside a slot, e.g. `game-3/home-score`.
pub fn field(slot: &str, field: &str) -> String {
    format!("{slot}/{field}")
}

pub const GAME_FIELDS: [&str; 6] = [
    "home-name",
    "home-score",
    "away-name",
    "away-score",
    "game-top",
    "game-bottom",
];

pub const EVENT_FIELDS: [&str; 4] = ["scorer", "assists", "game-state", "time"];

/// Build the scene for the given slot counts. All elements start hidden.
///
/// With `event_slots == 0` the events screen is left out entirely.
pub fn build_scene(game_slots: usize, event_slots: usize) -> Scene {
    let mut scene = Scene::new();
    for name in [LOADING, NO_GAMES, GAME_LIST] {
        scene.add(name);
    }
    for name in [BAR, BAR_FILL, UPDATED, GAME_LIST_DATE, NO_GAMES_DATE] {
        scene.add(name);
    }
    for index in 0..game_slots {
        let slot = game_slot(index);
        for name in GAME_FIELDS {
            scene.add(field(&slot, name));
        }
        scene.add(slot);
    }

    if event_slots > 0 {
        scene.add(GAME_EVENTS);
        scene.add(EVENT_HEADER);
        for index in 0..event_slots {
            let slot = event_slot(index);
            for name in EVENT_FIELDS {
                scene.add(field(&slot, name));
            }
            scene.add(slot);
        }
    }
    scene
}

/// Split the terminal into header, body and footer rows.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}
