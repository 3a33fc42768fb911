//! Convenience dismiss control for sheet bodies.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::warn;

use crate::context::SheetContext;
use crate::controller::SheetController;
use crate::view::SheetView;

/// Activation control that dismisses the presenting sheet on Enter.
///
/// Relies on the ambient context carrying the presenting
/// [`SheetController`]; the controller's default environment injection
/// provides that for every sheet body. Activating it with no controller in
/// context is a programmer error and is logged, not handled.
pub struct SheetDismissButton {
    label: String,
}

impl SheetDismissButton {
    pub fn new() -> Self {
        Self {
            label: "Done".to_string(),
        }
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for SheetDismissButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetView for SheetDismissButton {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let button = Span::styled(
            format!(" {} ", self.label),
            Style::default().add_modifier(Modifier::REVERSED),
        );
        frame.render_widget(
            Paragraph::new(Line::from(button)).alignment(Alignment::Center),
            area,
        );
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &SheetContext) -> bool {
        if key.code != KeyCode::Enter {
            return false;
        }
        match SheetController::from_context(ctx) {
            Some(controller) => {
                controller.dismiss();
                true
            }
            None => {
                warn!("dismiss button activated with no sheet controller in context");
                false
            }
        }
    }
}
