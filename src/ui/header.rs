use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title on the left, current presentation state on the right.
    pub fn widget(&self, area: Rect, presented: bool) -> Paragraph<'static> {
        let title = " Sheet Controller Demo";
        let state = if presented {
            "sheet: presented "
        } else {
            "sheet: hidden "
        };
        let state_style = if presented {
            Style::default().fg(STATUS_OK)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
        };

        let title_width = title.chars().count();
        let state_width = state.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(title_width)
            .saturating_sub(state_width);

        let line = Line::from(vec![
            Span::styled(title, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::styled(state, state_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
