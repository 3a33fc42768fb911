//! View abstraction for sheet content.
//!
//! Sheets are ordinary values implementing [`SheetView`]: they draw into a
//! region of the frame and may react to key input. The controller stores
//! factories producing boxed views, so heterogeneous sheet types share one
//! presentation slot.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::context::SheetContext;

/// A renderable unit of sheet content.
///
/// `render` draws the view into `area`. `on_key` lets the view react to a
/// key while it is on screen and reports whether it consumed the key; the
/// [`SheetContext`] it receives is the view's ambient environment. For a
/// presented sheet body it contains the presenting
/// [`SheetController`](crate::SheetController) unless a custom environment
/// setter replaced it.
pub trait SheetView: Send {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect);

    fn on_key(&mut self, key: KeyEvent, ctx: &SheetContext) -> bool {
        let _ = (key, ctx);
        false
    }
}

/// Boxed, type-erased view.
pub type BoxedView = Box<dyn SheetView>;

/// Placeholder returned when nothing is presented. Draws nothing and
/// consumes no input.
pub struct EmptyView;

impl SheetView for EmptyView {
    fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect) {}
}

/// Decorator substituting the ambient context seen by its inner view.
///
/// This is how environment re-injection works: by default the controller
/// wraps the materialized sheet in a `WithEnvironment` whose context
/// contains the controller itself, so descendants of the sheet (a dismiss
/// button, say) can reach it. A custom environment setter can use it to
/// supply a context of its own instead.
pub struct WithEnvironment {
    inner: BoxedView,
    env: SheetContext,
}

impl WithEnvironment {
    pub fn new(inner: BoxedView, env: SheetContext) -> Self {
        Self { inner, env }
    }
}

impl SheetView for WithEnvironment {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.inner.render(frame, area);
    }

    fn on_key(&mut self, key: KeyEvent, _outer: &SheetContext) -> bool {
        self.inner.on_key(key, &self.env)
    }
}
