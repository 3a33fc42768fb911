use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;

/// Draw one frame: header, body (content plus sheet overlay), footer.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let header_height = 3.min(area.height);
    let footer_height = 3.min(area.height.saturating_sub(header_height));

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    frame.render_widget(
        Header::new().widget(header, app.controller().is_presented()),
        header,
    );
    frame.render_widget(Footer::new().widget(footer), footer);
    app.render_body(frame, body);
}
