//! Single-threaded state container.
//!
//! Holds the current snapshot of one reducer, runs every dispatched intent
//! through it and notifies subscribers after each transition.
//!
//! Dispatching from inside a listener does not recurse: the intent is queued
//! and reduced after the current notification pass has reached every
//! listener. Listeners therefore always observe transitions one at a time,
//! in dispatch order.

use crate::ui::mvi::Reducer;
use scopeguard::defer;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut()>>;

struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

pub struct Store<R: Reducer> {
    state: RefCell<R::State>,
    listeners: Rc<RefCell<Listeners>>,
    pending: RefCell<VecDeque<R::Intent>>,
    dispatching: Cell<bool>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store and dispatch the initialization intent.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let store = Self {
            state: RefCell::new(state),
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            _reducer: PhantomData,
        };
        store.dispatch(R::Intent::default());
        store
    }

    /// Current snapshot.
    pub fn get_state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Reduce `intent` and notify every listener.
    ///
    /// Called from a listener, the intent is deferred until the running
    /// notification pass completes.
    pub fn dispatch(&self, intent: R::Intent) {
        self.pending.borrow_mut().push_back(intent);
        if self.dispatching.get() {
            tracing::trace!("store: deferring re-entrant dispatch");
            return;
        }

        self.dispatching.set(true);
        // A panicking listener abandons whatever it queued.
        defer! {
            self.pending.borrow_mut().clear();
            self.dispatching.set(false);
        }

        loop {
            let Some(intent) = self.pending.borrow_mut().pop_front() else {
                break;
            };

            let current = self.state.borrow().clone();
            let next = R::reduce(current, intent);
            *self.state.borrow_mut() = next;

            // Snapshot so listeners may subscribe/unsubscribe mid-pass.
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .entries
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                (&mut *listener.borrow_mut())();
            }
        }
    }

    /// Register `listener`, called with no arguments after every dispatch.
    pub fn subscribe<F: FnMut() + 'static>(&self, listener: F) -> Subscription {
        let listener: Listener = Rc::new(RefCell::new(listener));
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, listener));
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it does not unsubscribe.
pub struct Subscription {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Subscription {
    /// Remove the listener. Further calls are no-ops.
    pub fn unsubscribe(&self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        listeners
            .borrow_mut()
            .entries
            .retain(|(id, _)| *id != self.id);
    }
}
