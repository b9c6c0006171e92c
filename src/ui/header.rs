use crate::ui::dashboard::DashboardState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::view_state::ViewState;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    base_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }

    pub fn widget(&self, state: &DashboardState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, indicator_color) = match &state.view {
            ViewState::Loading => ("●", STATUS_PENDING),
            ViewState::Loaded(_) => ("●", STATUS_OK),
            ViewState::Error(_) => ("●", STATUS_ERROR),
        };

        let counts = match state.status_counts() {
            Some((up, down)) => format!("{} up / {} down", up, down),
            None => "no data".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(indicator, Style::default().fg(indicator_color)),
            Span::styled("  ", text_style),
            Span::styled(self.base_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(counts, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Filter: {}", state.filter.label()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
