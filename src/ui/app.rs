use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use sheet_controller::{
    SheetContext, SheetController, SheetControllerHost, SheetView, UsingSheetController,
};
use tracing::debug;

use crate::config::Config;
use crate::ui::content::ContentView;

pub struct App {
    controller: SheetController,
    ctx: SheetContext,
    host: SheetControllerHost<ContentView>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let controller = SheetController::new();
        controller.subscribe(|presented| debug!(presented, "sheet visibility changed"));

        let ctx = SheetContext::new().with(controller.clone());
        let host = ContentView::new()
            .using_sheet_controller(&controller)
            .height_percent(config.sheet.height_percent);

        Self {
            controller,
            ctx,
            host,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &SheetController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Route a key into the view tree; returns whether it was consumed.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        let ctx = self.ctx.clone();
        self.host.on_key(key, &ctx)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "terminal resized");
    }

    pub fn render_body(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.host.render(frame, area);
    }
}
