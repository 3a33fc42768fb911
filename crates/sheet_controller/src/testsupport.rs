//! Shared helpers for the unit tests in this crate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::context::SheetContext;
use crate::view::SheetView;

/// View rendering a fixed label at its top-left corner.
pub struct Label(pub &'static str);

impl SheetView for Label {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Paragraph::new(self.0), area);
    }
}

/// Marker value for context-propagation tests.
pub struct CtxMarker;

/// View that records whether its ambient context carried a [`CtxMarker`]
/// when a key arrived. Consumes every key.
#[derive(Clone, Default)]
pub struct KeyProbe {
    saw_marker: Arc<AtomicBool>,
}

impl KeyProbe {
    pub fn saw_marker(&self) -> bool {
        self.saw_marker.load(Ordering::SeqCst)
    }
}

impl SheetView for KeyProbe {
    fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect) {}

    fn on_key(&mut self, _key: KeyEvent, ctx: &SheetContext) -> bool {
        if ctx.get::<CtxMarker>().is_some() {
            self.saw_marker.store(true, Ordering::SeqCst);
        }
        true
    }
}

/// Draw `view` into a test terminal and return the visible rows,
/// right-trimmed.
pub fn render_lines(view: &mut dyn SheetView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area);
        })
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    line.push_str(cell.symbol());
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
