use crate::ui::form::state::{AddServerFormState, FormField};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 56;
const LABEL_WIDTH: usize = 12;

pub fn render_form_dialog(frame: &mut Frame, area: Rect, state: &AddServerFormState) {
    let AddServerFormState::Visible {
        draft,
        focused,
        error,
    } = state
    else {
        return;
    };

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| {
            let is_focused = field == focused;
            let value = match field {
                FormField::Status => format!("< {} >", draft.value(*field)),
                _ if is_focused => format!("{}_", draft.value(*field)),
                _ => draft.value(*field).to_string(),
            };
            let line = Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
                    Style::default().fg(POPUP_BORDER),
                ),
                Span::styled(value, Style::default().fg(HEADER_TEXT)),
            ]);
            if is_focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    lines.push(Line::from(""));
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(" Tab: Next  Space: Status  Enter: Save  Esc: Cancel"));

    let height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(" Add Server ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
