//! The sheet presentation-state controller.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::context::SheetContext;
use crate::view::{BoxedView, EmptyView, SheetView, WithEnvironment};

/// Stored factory producing the sheet body on demand.
type ViewFactory = Arc<dyn Fn() -> BoxedView + Send + Sync>;

/// Transform applied to the materialized sheet view before display.
///
/// Install one with [`SheetController::set_environment`] to re-inject
/// whatever ambient context the sheet's descendants need.
pub type EnvironmentSetter = Arc<dyn Fn(BoxedView) -> BoxedView + Send + Sync>;

/// Handle to a subscriber registration; pass it to
/// [`SheetController::unsubscribe`] to stop delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(bool) + Send>;

/// Presentation state. `Showing` owning the factory makes "presented iff a
/// factory is pending" structural rather than a convention.
#[derive(Default)]
enum SheetState {
    #[default]
    Hidden,
    Showing {
        factory: ViewFactory,
    },
}

impl SheetState {
    fn is_presented(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }
}

struct ControllerState {
    sheet: SheetState,
    /// Bumped on every `show`; lets hosts detect factory replacement
    /// without comparing closures.
    generation: u64,
    environment: Option<EnvironmentSetter>,
}

struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
    /// Ids unsubscribed while their entry was checked out by a publish.
    stale: Vec<u64>,
}

struct Inner {
    state: Mutex<ControllerState>,
    subscribers: Mutex<Subscribers>,
}

/// Utility controlling the presentation of sheets.
///
/// Cheap to clone; clones share one underlying controller (identity is
/// reference identity, see [`ptr_eq`](Self::ptr_eq)). Create one per
/// presenting subtree, hand it to a
/// [`SheetControllerHost`](crate::SheetControllerHost), and put a clone in
/// the subtree's [`SheetContext`] so descendants can request sheets without
/// threading the handle through every intermediate view.
///
/// Calls are synchronous and total: `show` while already presented replaces
/// the pending content (last call wins, nothing is queued), `dismiss` while
/// hidden is a no-op.
#[derive(Clone)]
pub struct SheetController {
    inner: Arc<Inner>,
}

impl SheetController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(ControllerState {
                    sheet: SheetState::Hidden,
                    generation: 0,
                    environment: None,
                }),
                subscribers: Mutex::new(Subscribers {
                    next_id: 0,
                    entries: Vec::new(),
                    stale: Vec::new(),
                }),
            }),
        }
    }

    /// Whether a sheet is currently presented.
    pub fn is_presented(&self) -> bool {
        self.inner.state.lock().sheet.is_presented()
    }

    /// Current presentation generation; moves on every [`show`](Self::show).
    pub(crate) fn generation(&self) -> u64 {
        self.inner.state.lock().generation
    }

    /// Present the view produced by `factory`.
    ///
    /// The factory runs lazily, when the host materializes the sheet body.
    /// Calling `show` while a sheet is already presented silently replaces
    /// the pending content.
    pub fn show<V, F>(&self, factory: F)
    where
        V: SheetView + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        let generation = {
            let mut state = self.inner.state.lock();
            state.sheet = SheetState::Showing {
                factory: Arc::new(move || Box::new(factory()) as BoxedView),
            };
            state.generation += 1;
            state.generation
        };
        debug!(generation, "sheet presented");
        self.publish(true);
    }

    /// Hide the sheet and drop the pending factory.
    ///
    /// Idempotent: while hidden this does nothing and notifies nobody.
    pub fn dismiss(&self) {
        {
            let mut state = self.inner.state.lock();
            if !state.sheet.is_presented() {
                return;
            }
            state.sheet = SheetState::Hidden;
        }
        debug!("sheet dismissed");
        self.publish(false);
    }

    /// Install the transform applied to the materialized sheet view before
    /// display, replacing the default controller re-injection.
    pub fn set_environment<F>(&self, setter: F)
    where
        F: Fn(BoxedView) -> BoxedView + Send + Sync + 'static,
    {
        self.inner.state.lock().environment = Some(Arc::new(setter));
    }

    /// Remove the installed environment setter, restoring the default
    /// behavior of re-injecting this controller.
    pub fn clear_environment(&self) {
        self.inner.state.lock().environment = None;
    }

    /// Materialize the pending sheet view.
    ///
    /// Returns an [`EmptyView`] placeholder while hidden. While presented,
    /// invokes the stored factory once and applies the environment setter
    /// if one is installed; otherwise the view is wrapped so its ambient
    /// context contains this controller. Never panics; always yields a
    /// renderable view. No lock is held while the factory or setter runs,
    /// so either may re-enter the controller.
    pub fn resolve_presented_view(&self) -> BoxedView {
        let (factory, environment) = {
            let state = self.inner.state.lock();
            match &state.sheet {
                SheetState::Hidden => return Box::new(EmptyView),
                SheetState::Showing { factory } => (factory.clone(), state.environment.clone()),
            }
        };

        let view = factory();
        match environment {
            Some(setter) => setter(view),
            None => {
                let env = SheetContext::new().with(self.clone());
                Box::new(WithEnvironment::new(view, env))
            }
        }
    }

    /// Register a callback invoked with the new visibility after every
    /// state change: `true` on every `show` (including replacements),
    /// `false` when a presented sheet is dismissed.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(bool) + Send + 'static,
    {
        let mut subs = self.inner.subscribers.lock();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.entries.push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    /// Stop delivery to a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.inner.subscribers.lock();
        match subs.entries.iter().position(|(entry, _)| *entry == id.0) {
            Some(pos) => {
                subs.entries.remove(pos);
            }
            // The entry may be checked out by a publish running on this
            // thread; record the removal so the merge drops it.
            None => subs.stale.push(id.0),
        }
    }

    /// Look up a controller in an ambient context.
    pub fn from_context(ctx: &SheetContext) -> Option<SheetController> {
        ctx.get::<SheetController>().map(|shared| (*shared).clone())
    }

    /// Reference identity: `true` iff both handles share one controller.
    pub fn ptr_eq(&self, other: &SheetController) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Invoke subscribers with no lock held, honoring registrations and
    /// removals made by the callbacks themselves.
    fn publish(&self, presented: bool) {
        let mut checked_out = std::mem::take(&mut self.inner.subscribers.lock().entries);
        for (_, callback) in checked_out.iter_mut() {
            callback(presented);
        }

        let mut subs = self.inner.subscribers.lock();
        let stale = std::mem::take(&mut subs.stale);
        checked_out.retain(|(id, _)| !stale.contains(id));
        // Callbacks registered during the publish landed in the fresh list;
        // keep them, in registration order after the survivors.
        checked_out.append(&mut subs.entries);
        subs.entries = checked_out;
    }
}

impl Default for SheetController {
    fn default() -> Self {
        Self::new()
    }
}
