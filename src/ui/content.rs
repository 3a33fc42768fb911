//! Main body of the demo.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sheet_controller::{SheetContext, SheetController, SheetView};
use tracing::warn;

use crate::ui::sheets::{GreetingSheet, ReplacementSheet};
use crate::ui::theme::HEADER_TEXT;

/// Static text plus the keys that request sheets.
///
/// Sheets are requested through the controller found in the ambient
/// context, so this view works unchanged anywhere a controller is
/// provided.
pub struct ContentView {
    sheets_requested: u64,
}

impl ContentView {
    pub fn new() -> Self {
        Self { sheets_requested: 0 }
    }
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetView for ContentView {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let plain = Style::default().fg(HEADER_TEXT);
        let key_style = plain.add_modifier(Modifier::BOLD);
        let hint = plain.add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  Some content here...", plain)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  s", key_style),
                Span::styled("  show the greeting sheet", hint),
            ]),
            Line::from(vec![
                Span::styled("  r", key_style),
                Span::styled("  show the replacement sheet", hint),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("  sheets requested so far: {}", self.sheets_requested),
                hint,
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &SheetContext) -> bool {
        let request: fn(&SheetController) = match key.code {
            KeyCode::Char('s') => |controller| controller.show(GreetingSheet::new),
            KeyCode::Char('r') => |controller| controller.show(ReplacementSheet::new),
            _ => return false,
        };

        let Some(controller) = SheetController::from_context(ctx) else {
            warn!("content view used without a sheet controller in context");
            return false;
        };

        request(&controller);
        self.sheets_requested += 1;
        true
    }
}
