use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str =
    " r: Refresh │ f/1-3: Filter │ p: Ping │ n: New │ x: Delete │ ↑↓: Select │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, status: Option<&str>) -> Paragraph<'static> {
        let left = match status {
            Some(status) => format!(" {} │{}", status, HINTS),
            None => HINTS.to_string(),
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes; the separators are multi-byte.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(left, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
