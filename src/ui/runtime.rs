use crate::config::DisplayConfig;
use crate::ipc::CompanionLink;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::draw::draw;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::build_scene;
use crate::ui::reconcile::Reconciler;
use crate::ui::scene::Scene;
use crate::ui::scoreboard::ScoreboardReducer;
use crate::ui::slots::SlotMap;
use crate::ui::store::{Store, Subscription};
use crate::ui::terminal_guard::setup_terminal;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// How to start the companion child process.
#[derive(Debug, Clone)]
pub struct CompanionCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Scene, slots and store wired together: every dispatch re-renders the
/// scene through the reconciler.
pub struct Display {
    pub scene: Rc<RefCell<Scene>>,
    pub reconciler: Rc<Reconciler>,
    pub store: Rc<Store<ScoreboardReducer>>,
    subscription: Subscription,
}

impl Display {
    pub fn new(config: &DisplayConfig) -> io::Result<Self> {
        let scene = build_scene(config.game_slots, config.event_slots);
        let slots = SlotMap::discover(&scene).map_err(io::Error::other)?;
        tracing::info!(
            games = slots.games.len(),
            events = slots.events.as_ref().map_or(0, |events| events.slots.len()),
            "slots discovered"
        );

        let scene = Rc::new(RefCell::new(scene));
        let reconciler = Rc::new(Reconciler::new(slots));
        let store = Rc::new(Store::<ScoreboardReducer>::new());

        let subscription = {
            let scene = Rc::clone(&scene);
            let reconciler = Rc::clone(&reconciler);
            let weak_store = Rc::downgrade(&store);
            store.subscribe(move || {
                if let Some(store) = weak_store.upgrade() {
                    reconciler.render(&mut *scene.borrow_mut(), &store.get_state());
                }
            })
        };
        reconciler.render(&mut *scene.borrow_mut(), &store.get_state());

        Ok(Self {
            scene,
            reconciler,
            store,
            subscription,
        })
    }

    pub fn has_events_screen(&self) -> bool {
        self.reconciler.slots().events.is_some()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

pub fn run(config: &DisplayConfig, companion: &CompanionCommand) -> io::Result<()> {
    let display = Display::new(config)?;
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownHandle::new();
    let tick_rate = Duration::from_millis(config.tick_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let mut link = CompanionLink::spawn(&companion.program, &companion.args, events.sender())
        .map_err(io::Error::other)?;
    let mut app = App::new(
        Rc::clone(&display.store),
        link.requests(),
        display.has_events_screen(),
    );
    app.refresh();

    // Scene write count at the last draw; `None` forces a redraw.
    let mut drawn: Option<u64> = None;
    loop {
        let writes = display.scene.borrow().writes();
        if drawn != Some(writes) {
            let scene = display.scene.borrow();
            terminal.draw(|frame| draw(frame, &scene, display.reconciler.slots(), &app))?;
            drawn = Some(writes);
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                drawn = None;
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                drawn = None;
            }
            Ok(AppEvent::Companion(message)) => app.on_companion(message),
            Ok(AppEvent::CompanionClosed) => {
                app.on_companion_closed();
                drawn = None;
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    if let Err(err) = link.shutdown() {
        tracing::warn!(error = %err, "companion shutdown failed");
    }
    drop(guard);
    Ok(())
}
