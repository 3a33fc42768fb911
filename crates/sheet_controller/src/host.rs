//! Host view bridging controller state into an actual overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;
use tracing::trace;

use crate::context::SheetContext;
use crate::controller::SheetController;
use crate::view::{BoxedView, SheetView};

/// Default share of the host area covered by the sheet, in percent.
const DEFAULT_HEIGHT_PERCENT: u16 = 60;

/// Materialized sheet body, tagged with the generation that produced it.
struct Presented {
    view: BoxedView,
    generation: u64,
}

/// Wraps a content view and presents its controller's sheet over it.
///
/// The host renders the wrapped content as usual; while the controller is
/// presented it additionally draws a bottom-docked overlay (cleared, framed,
/// filled with the materialized sheet body) and routes input to the sheet
/// instead of the content. Esc is the dismiss gesture: it flows through
/// [`SheetController::dismiss`] so the pending factory is cleared together
/// with the visibility flag, and the next presentation starts from a clean
/// state.
///
/// Hosts are views themselves, so they nest and compose like anything else
/// implementing [`SheetView`].
pub struct SheetControllerHost<C: SheetView> {
    controller: SheetController,
    content: C,
    height: u16,
    presented: Option<Presented>,
}

impl<C: SheetView> SheetControllerHost<C> {
    pub fn new(controller: SheetController, content: C) -> Self {
        Self {
            controller,
            content,
            height: DEFAULT_HEIGHT_PERCENT,
            presented: None,
        }
    }

    /// Share of the host area covered by the sheet, in percent. Clamped to
    /// 10..=100.
    pub fn height_percent(mut self, percent: u16) -> Self {
        self.height = percent.clamp(10, 100);
        self
    }

    pub fn controller(&self) -> &SheetController {
        &self.controller
    }

    /// Reconcile the materialized cache with the controller: drop it while
    /// hidden, rebuild it when the presentation generation moved.
    fn sync(&mut self) {
        if !self.controller.is_presented() {
            self.presented = None;
            return;
        }
        let generation = self.controller.generation();
        if self.presented.as_ref().map(|p| p.generation) != Some(generation) {
            trace!(generation, "materializing sheet body");
            self.presented = Some(Presented {
                view: self.controller.resolve_presented_view(),
                generation,
            });
        }
    }
}

impl<C: SheetView> SheetView for SheetControllerHost<C> {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.content.render(frame, area);
        self.sync();
        if let Some(presented) = self.presented.as_mut() {
            let sheet = sheet_rect(area, self.height);
            frame.render_widget(Clear, sheet);
            let block = Block::default().borders(Borders::ALL);
            let body = block.inner(sheet);
            frame.render_widget(block, sheet);
            presented.view.render(frame, body);
        }
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &SheetContext) -> bool {
        self.sync();
        let Some(presented) = self.presented.as_mut() else {
            return self.content.on_key(key, ctx);
        };

        if presented.view.on_key(key, ctx) {
            // The sheet may have dismissed or replaced itself.
            self.sync();
            return true;
        }
        if key.code == KeyCode::Esc {
            self.controller.dismiss();
            self.presented = None;
            return true;
        }
        // The sheet is modal; unhandled input stops here.
        true
    }
}

/// Bottom-docked sheet area covering `percent` of `area`'s height.
fn sheet_rect(area: Rect, percent: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Percentage(percent)])
        .split(area);
    chunks[1]
}

/// Composition helper: wrap any view in a host bound to `controller`.
pub trait UsingSheetController: SheetView + Sized {
    fn using_sheet_controller(self, controller: &SheetController) -> SheetControllerHost<Self> {
        SheetControllerHost::new(controller.clone(), self)
    }
}

impl<V: SheetView> UsingSheetController for V {}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::testsupport::{buffer_lines, key, Label};
    use crate::view::EmptyView;

    fn draw(host: &mut SheetControllerHost<impl SheetView>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(24, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                host.render(frame, area);
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn joined(lines: &[String]) -> String {
        lines.join("\n")
    }

    #[test]
    fn hidden_renders_content_only() {
        let controller = SheetController::new();
        let mut host = Label("content").using_sheet_controller(&controller);

        let lines = draw(&mut host);
        assert!(lines[0].contains("content"));
        assert!(!joined(&lines).contains('┌'));
    }

    #[test]
    fn presented_draws_overlay_over_content() {
        let controller = SheetController::new();
        let mut host = Label("content").using_sheet_controller(&controller);
        controller.show(|| Label("sheet body"));

        let lines = draw(&mut host);
        assert!(lines[0].contains("content"));
        assert!(joined(&lines).contains("sheet body"));
        assert!(joined(&lines).contains('┌'));
    }

    #[test]
    fn esc_dismisses_through_the_controller() {
        let controller = SheetController::new();
        let mut host = Label("content").using_sheet_controller(&controller);
        controller.show(|| Label("sheet body"));

        assert!(host.on_key(key(KeyCode::Esc), &SheetContext::new()));
        assert!(!controller.is_presented());
        assert!(!joined(&draw(&mut host)).contains("sheet body"));
    }

    #[test]
    fn input_is_modal_while_presented() {
        struct Counting {
            hits: Arc<AtomicUsize>,
        }
        impl SheetView for Counting {
            fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect) {}
            fn on_key(&mut self, _key: KeyEvent, _ctx: &SheetContext) -> bool {
                self.hits.fetch_add(1, Ordering::SeqCst);
                true
            }
        }

        let hits = Arc::new(AtomicUsize::new(0));
        let controller = SheetController::new();
        let mut host = Counting {
            hits: Arc::clone(&hits),
        }
        .using_sheet_controller(&controller);

        assert!(host.on_key(key(KeyCode::Char('x')), &SheetContext::new()));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        controller.show(|| EmptyView);
        assert!(host.on_key(key(KeyCode::Char('x')), &SheetContext::new()));
        assert_eq!(hits.load(Ordering::SeqCst), 1, "content must not see modal input");
    }

    #[test]
    fn materializes_once_per_presentation() {
        let controller = SheetController::new();
        let mut host = Label("content").using_sheet_controller(&controller);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        controller.show(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Label("sheet body")
        });

        draw(&mut host);
        draw(&mut host);
        draw(&mut host);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn replacement_rematerializes() {
        let controller = SheetController::new();
        let mut host = Label("content").using_sheet_controller(&controller);

        controller.show(|| Label("first"));
        assert!(joined(&draw(&mut host)).contains("first"));

        controller.show(|| Label("second"));
        let lines = joined(&draw(&mut host));
        assert!(lines.contains("second"));
        assert!(!lines.contains("first"));
    }

    #[test]
    fn no_stale_content_after_dismiss() {
        let controller = SheetController::new();
        let mut host = Label("content").using_sheet_controller(&controller);

        controller.show(|| Label("first"));
        draw(&mut host);
        controller.dismiss();
        draw(&mut host);

        controller.show(|| Label("second"));
        let lines = joined(&draw(&mut host));
        assert!(lines.contains("second"));
        assert!(!lines.contains("first"));
    }

    #[test]
    fn height_percent_is_clamped() {
        let controller = SheetController::new();
        let host = Label("content")
            .using_sheet_controller(&controller)
            .height_percent(0);
        assert_eq!(host.height, 10);

        let host = Label("content")
            .using_sheet_controller(&controller)
            .height_percent(250);
        assert_eq!(host.height, 100);
    }

    #[test]
    fn using_sheet_controller_binds_the_given_controller() {
        let controller = SheetController::new();
        let host = EmptyView.using_sheet_controller(&controller);
        assert!(host.controller().ptr_eq(&controller));
    }
}
