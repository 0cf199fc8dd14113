mod common;

use common::game;
use rinkwatch::ui::scoreboard::{ScoreboardIntent, ScoreboardReducer, Screen};
use rinkwatch::ui::store::{Store, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn new_store_starts_on_loading() {
    let store = Store::<ScoreboardReducer>::new();
    let state = store.get_state();
    assert!(state.is_showing(Screen::Loading));
    assert!(state.games.is_empty());
}

#[test]
fn listeners_observe_each_transition() {
    let store = Rc::new(Store::<ScoreboardReducer>::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _subscription = {
        let seen = Rc::clone(&seen);
        let weak = Rc::downgrade(&store);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                seen.borrow_mut().push(store.get_state().games.len());
            }
        })
    };

    store.dispatch(ScoreboardIntent::AddGame(game(1, "BOS", "NYR")));
    store.dispatch(ScoreboardIntent::AddGame(game(2, "TOR", "MTL")));
    store.dispatch(ScoreboardIntent::ClearGames);

    assert_eq!(*seen.borrow(), vec![1, 2, 0]);
}

#[test]
fn unsubscribe_twice_is_harmless() {
    let store = Store::<ScoreboardReducer>::new();
    let calls = Rc::new(RefCell::new(0));
    let first = {
        let calls = Rc::clone(&calls);
        store.subscribe(move || *calls.borrow_mut() += 1)
    };
    let _second = store.subscribe(|| {});

    first.unsubscribe();
    first.unsubscribe();
    assert_eq!(store.listener_count(), 1);

    store.dispatch(ScoreboardIntent::ClearGames);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn snapshot_held_by_reader_is_stable() {
    let store = Store::<ScoreboardReducer>::new();
    let held = store.get_state();
    store.dispatch(ScoreboardIntent::AddGame(game(1, "BOS", "NYR")));
    assert!(held.games.is_empty());
    assert_eq!(store.get_state().games.len(), 1);
}

#[test]
fn dispatch_from_listener_runs_after_pass() {
    let store = Rc::new(Store::<ScoreboardReducer>::new());
    let screens = Rc::new(RefCell::new(Vec::new()));

    let _redirect = {
        let weak = Rc::downgrade(&store);
        store.subscribe(move || {
            let Some(store) = weak.upgrade() else {
                return;
            };
            if store.get_state().is_showing(Screen::NoGames) {
                store.dispatch(ScoreboardIntent::Show(Screen::Loading));
            }
        })
    };
    let _recorder = {
        let weak = Rc::downgrade(&store);
        let screens = Rc::clone(&screens);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                let state = store.get_state();
                let shown = Screen::ALL
                    .into_iter()
                    .find(|screen| state.is_showing(*screen));
                screens.borrow_mut().push(shown);
            }
        })
    };

    store.dispatch(ScoreboardIntent::Show(Screen::NoGames));
    assert_eq!(
        *screens.borrow(),
        vec![Some(Screen::NoGames), Some(Screen::Loading)]
    );
}

#[test]
fn listener_changes_during_a_pass_apply_to_the_next_one() {
    let store = Rc::new(Store::<ScoreboardReducer>::new());
    let calls = Rc::new(RefCell::new(Vec::new()));
    let b_subscription: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let c_subscription: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let _a = {
        let weak = Rc::downgrade(&store);
        let calls = Rc::clone(&calls);
        let b_subscription = Rc::clone(&b_subscription);
        let c_subscription = Rc::clone(&c_subscription);
        store.subscribe(move || {
            calls.borrow_mut().push("A");
            if let Some(b) = b_subscription.borrow_mut().take() {
                b.unsubscribe();
            }
            let Some(store) = weak.upgrade() else {
                return;
            };
            if c_subscription.borrow().is_none() {
                let calls = Rc::clone(&calls);
                let c = store.subscribe(move || calls.borrow_mut().push("C"));
                *c_subscription.borrow_mut() = Some(c);
            }
        })
    };
    let b = {
        let calls = Rc::clone(&calls);
        store.subscribe(move || calls.borrow_mut().push("B"))
    };
    *b_subscription.borrow_mut() = Some(b);

    store.dispatch(ScoreboardIntent::ClearGames);
    assert_eq!(*calls.borrow(), vec!["A", "B"]);

    calls.borrow_mut().clear();
    store.dispatch(ScoreboardIntent::ClearGames);
    assert_eq!(*calls.borrow(), vec!["A", "C"]);
}
