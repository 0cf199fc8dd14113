mod common;

use common::{add_game_message, game, spy_fixture};
use rinkwatch::ipc::{apply, decode_line, CompanionMessage};
use rinkwatch::ui::scene::Surface;
use rinkwatch::ui::scoreboard::{ScoreboardIntent, ScoreboardReducer, Screen};
use rinkwatch::ui::store::Store;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn streamed_day_fills_list_and_completes_progress() {
    let store = Store::<ScoreboardReducer>::new();
    let games = [game(1, "BOS", "NYR"), game(2, "TOR", "MTL"), game(3, "EDM", "CGY")];

    apply(&store, add_game_message(&games[0], 0, 3));
    let midway = store.get_state();
    assert!(midway.is_showing(Screen::GameList));
    assert_eq!(midway.progress.done, 1);
    assert!(!midway.progress.is_complete());

    apply(&store, add_game_message(&games[1], 1, 3));
    apply(&store, add_game_message(&games[2], 2, 3));

    let state = store.get_state();
    assert_eq!(state.games, games.to_vec());
    assert!(state.progress.is_complete());
    assert_eq!(state.date, "Mon Oct 16");
    assert_eq!(state.updated, "7:05 PM EST");
}

#[test]
fn poll_refresh_keeps_events_screen() {
    let store = Store::<ScoreboardReducer>::new();
    let bos = game(1, "BOS", "NYR");
    apply(&store, add_game_message(&bos, 0, 1));
    store.dispatch(ScoreboardIntent::SetActiveGame(Some(1)));
    store.dispatch(ScoreboardIntent::Show(Screen::GameEvents));

    let mut later = bos.clone();
    later.home.score = Some(4);
    apply(&store, add_game_message(&later, 0, 1));

    let state = store.get_state();
    assert!(state.is_showing(Screen::GameEvents));
    assert_eq!(state.games[0].home.score, Some(4));
}

#[test]
fn wire_lines_drive_the_scene() {
    let (surface, reconciler) = spy_fixture(4, 2);
    let surface = Rc::new(RefCell::new(surface));
    let reconciler = Rc::new(reconciler);
    let store = Rc::new(Store::<ScoreboardReducer>::new());
    let _subscription = {
        let surface = Rc::clone(&surface);
        let reconciler = Rc::clone(&reconciler);
        let weak = Rc::downgrade(&store);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                reconciler.render(&mut *surface.borrow_mut(), &store.get_state());
            }
        })
    };

    let lines = [
        r#"{"action":"add_game","id":7,"home":{"name":"BOS","score":2},"away":{"name":"NYR","score":1},"game":{"top":"3rd","bottom":"4:21"},"count":1,"i":0,"updated":"9:40 PM EST","date":"Mon Oct 16"}"#,
        r#"{"action":"no_games","date":"Tue Oct 17"}"#,
    ];

    let first: CompanionMessage = decode_line(lines[0]).unwrap();
    apply(&store, first);
    {
        let surface = surface.borrow();
        let slots = reconciler.slots();
        assert!(surface.is_visible(slots.game_list));
        assert_eq!(surface.text(slots.games[0].home_score), "2");
        assert_eq!(surface.text(slots.game_list_date), "Mon Oct 16");
        assert_eq!(surface.text(slots.updated), "Updated 9:40 PM EST");
    }

    let second: CompanionMessage = decode_line(lines[1]).unwrap();
    apply(&store, second);
    let surface = surface.borrow();
    let slots = reconciler.slots();
    assert!(surface.is_visible(slots.no_games));
    assert!(!surface.is_visible(slots.game_list));
    assert_eq!(surface.text(slots.no_games_date), "Tue Oct 17");
}

#[test]
fn unknown_action_is_rejected_before_store() {
    let result = decode_line::<CompanionMessage>(r#"{"action":"teleport","to":"Mars"}"#);
    assert!(result.is_err());
}
