//! Shared test utilities: a spy surface and scoreboard fixtures.

#![allow(dead_code, unused_imports)]

use rinkwatch::ipc::CompanionMessage;
use rinkwatch::ui::layout::build_scene;
use rinkwatch::ui::reconcile::Reconciler;
use rinkwatch::ui::scene::{ElementId, Scene, Surface};
use rinkwatch::ui::scoreboard::{Game, GameStatus, Team};
use rinkwatch::ui::slots::SlotMap;

/// One setter call seen by [`SpySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    Text(ElementId, String),
    Visible(ElementId, bool),
    Span(ElementId, u32, u32),
}

/// Scene wrapper that records every write.
pub struct SpySurface {
    pub scene: Scene,
    pub writes: Vec<Write>,
}

impl SpySurface {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            writes: Vec::new(),
        }
    }

    /// Drain the recorded writes.
    pub fn take(&mut self) -> Vec<Write> {
        std::mem::take(&mut self.writes)
    }
}

impl Surface for SpySurface {
    fn find(&self, name: &str) -> Option<ElementId> {
        self.scene.find(name)
    }

    fn text(&self, id: ElementId) -> &str {
        self.scene.text(id)
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        self.writes.push(Write::Text(id, text.to_string()));
        self.scene.set_text(id, text);
    }

    fn is_visible(&self, id: ElementId) -> bool {
        self.scene.is_visible(id)
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        self.writes.push(Write::Visible(id, visible));
        self.scene.set_visible(id, visible);
    }

    fn span(&self, id: ElementId) -> (u32, u32) {
        self.scene.span(id)
    }

    fn set_span(&mut self, id: ElementId, x: u32, width: u32) {
        self.writes.push(Write::Span(id, x, width));
        self.scene.set_span(id, x, width);
    }
}

/// Spy surface over a freshly built scene, plus a reconciler bound to it.
pub fn spy_fixture(game_slots: usize, event_slots: usize) -> (SpySurface, Reconciler) {
    let surface = SpySurface::new(build_scene(game_slots, event_slots));
    let slots = SlotMap::discover(&surface).expect("layout has every element");
    (surface, Reconciler::new(slots))
}

pub fn team(name: &str, score: Option<u32>) -> Team {
    Team {
        name: name.to_string(),
        score,
    }
}

pub fn game(id: u64, home: &str, away: &str) -> Game {
    Game {
        id,
        home: team(home, Some(0)),
        away: team(away, Some(0)),
        status: GameStatus {
            top: "1st".to_string(),
            bottom: "20:00".to_string(),
        },
    }
}

pub fn add_game_message(game: &Game, i: u32, count: u32) -> CompanionMessage {
    CompanionMessage::AddGame {
        offset: 0,
        id: game.id,
        home: game.home.clone(),
        away: game.away.clone(),
        game: game.status.clone(),
        count,
        i,
        updated: "7:05 PM EST".to_string(),
        date: Some("Mon Oct 16".to_string()),
    }
}
