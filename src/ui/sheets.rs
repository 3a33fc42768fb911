//! The sheets the demo presents.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sheet_controller::{SheetContext, SheetController, SheetDismissButton, SheetView};

use crate::ui::theme::{ACCENT, HEADER_TEXT};

/// Split a sheet body into text rows and a one-row button strip.
fn body_and_button(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn dim(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    ))
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

/// The sheet presented by `s`.
///
/// Dismisses through its embedded [`SheetDismissButton`] and can replace
/// itself with a [`ReplacementSheet`], in both cases via the controller it
/// finds in its ambient context, never via a direct reference.
pub struct GreetingSheet {
    done: SheetDismissButton,
}

impl GreetingSheet {
    pub fn new() -> Self {
        Self {
            done: SheetDismissButton::new(),
        }
    }
}

impl Default for GreetingSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetView for GreetingSheet {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let (body, button) = body_and_button(area);
        let lines = vec![
            Line::from(""),
            heading("  Sheet content here"),
            Line::from(""),
            dim("  Enter activates Done, Esc dismisses, r swaps in the other sheet."),
        ];
        frame.render_widget(Paragraph::new(lines), body);
        self.done.render(frame, button);
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &SheetContext) -> bool {
        if self.done.on_key(key, ctx) {
            return true;
        }
        if key.code == KeyCode::Char('r') {
            if let Some(controller) = SheetController::from_context(ctx) {
                controller.show(ReplacementSheet::new);
                return true;
            }
        }
        false
    }
}

/// The sheet `r` swaps in while another is already up; whatever was pending
/// is replaced, nothing queues.
pub struct ReplacementSheet {
    done: SheetDismissButton,
}

impl ReplacementSheet {
    pub fn new() -> Self {
        Self {
            done: SheetDismissButton::with_label("Close"),
        }
    }
}

impl Default for ReplacementSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetView for ReplacementSheet {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let (body, button) = body_and_button(area);
        let lines = vec![
            Line::from(""),
            heading("  The replacement sheet"),
            Line::from(""),
            dim("  The previous sheet is gone for good; last show wins."),
        ];
        frame.render_widget(Paragraph::new(lines), body);
        self.done.render(frame, button);
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &SheetContext) -> bool {
        self.done.on_key(key, ctx)
    }
}
