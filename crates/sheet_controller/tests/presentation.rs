//! Black-box scenarios exercising the presentation cycle end to end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use sheet_controller::{
    SheetContext, SheetController, SheetDismissButton, SheetView, UsingSheetController,
    WithEnvironment,
};

struct Label(&'static str);

impl SheetView for Label {
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Paragraph::new(self.0), area);
    }
}

fn rendered(view: &mut dyn SheetView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn show_resolve_dismiss_cycle() {
    let controller = SheetController::new();
    assert!(!controller.is_presented());

    controller.show(|| Label("view a"));
    assert!(controller.is_presented());
    let mut view = controller.resolve_presented_view();
    assert!(rendered(view.as_mut()).contains("view a"));

    controller.dismiss();
    assert!(!controller.is_presented());
    let mut view = controller.resolve_presented_view();
    assert!(rendered(view.as_mut()).trim().is_empty());
}

#[test]
fn last_show_wins() {
    let controller = SheetController::new();
    controller.show(|| Label("view a"));
    controller.show(|| Label("view b"));

    let mut view = controller.resolve_presented_view();
    let output = rendered(view.as_mut());
    assert!(output.contains("view b"));
    assert!(!output.contains("view a"));
}

#[test]
fn dismiss_button_round_trip_through_default_environment() {
    let controller = SheetController::new();
    controller.show(|| {
        // A sheet whose only interactive descendant is the dismiss button.
        SheetDismissButton::new()
    });

    let mut view = controller.resolve_presented_view();
    // The outer context is empty; the controller must come from the
    // environment the controller itself injected.
    assert!(view.as_mut().on_key(press(KeyCode::Enter), &SheetContext::new()));
    assert!(!controller.is_presented());
}

#[test]
fn custom_environment_setter_replaces_injection() {
    let controller = SheetController::new();
    // Present the sheet through an environment with no controller in it;
    // the dismiss button inside must then find nothing.
    controller.set_environment(|view| Box::new(WithEnvironment::new(view, SheetContext::new())));
    controller.show(SheetDismissButton::new);

    let mut view = controller.resolve_presented_view();
    assert!(!view.as_mut().on_key(press(KeyCode::Enter), &SheetContext::new()));
    assert!(controller.is_presented());
}

#[test]
fn host_presents_and_esc_dismisses() {
    let controller = SheetController::new();
    let mut host = Label("the content").using_sheet_controller(&controller);

    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
    let ctx = SheetContext::new().with(controller.clone());

    terminal
        .draw(|frame| {
            let area = frame.area();
            host.render(frame, area);
        })
        .unwrap();

    controller.show(|| Label("the sheet"));
    terminal
        .draw(|frame| {
            let area = frame.area();
            host.render(frame, area);
        })
        .unwrap();

    assert!(host.on_key(press(KeyCode::Esc), &ctx));
    assert!(!controller.is_presented());

    // The next presentation starts from a clean slate.
    controller.show(|| Label("another sheet"));
    let mut view = controller.resolve_presented_view();
    let output = rendered(view.as_mut());
    assert!(output.contains("another sheet"));
    assert!(!output.contains("the sheet"));
}
