use crate::model::Server;
use crate::ui::app::App;
use crate::ui::dashboard::DashboardState;
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use crate::view_state::ViewState;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn spinner(state: &DashboardState) -> &'static str {
    SPINNER_FRAMES[state.animation_tick as usize % SPINNER_FRAMES.len()]
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.dashboard();

    frame.render_widget(Header::new(app.base_url()).widget(state), header);
    frame.render_widget(Clear, body);

    match &state.view {
        ViewState::Loading => draw_loading(frame, body, spinner(state)),
        ViewState::Error(message) => draw_error(frame, body, message),
        ViewState::Loaded(_) => draw_servers(frame, body, state),
    }

    let busy = state
        .busy
        .as_deref()
        .map(|label| format!("{} {}", spinner(state), label));
    let status = busy
        .as_deref()
        .or(app.last_command_error())
        .or(state.notice.as_deref());
    frame.render_widget(Footer::new().widget(footer, status), footer);

    if app.form().is_visible() {
        render_form_dialog(frame, body, app.form());
    }
}

fn body_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, spinner: &str) {
    frame.render_widget(body_block(" Servers "), area);
    let line = Line::from(Span::styled(
        format!("{} Loading servers...", spinner),
        Style::default().fg(STATUS_PENDING),
    ));
    let rect = centered_rect_by_size(area, line.width() as u16, 1);
    frame.render_widget(Paragraph::new(line), rect);
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press r to retry"),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    frame.render_widget(body_block(" Servers "), area);
    let rect = centered_rect_by_size(area, width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn draw_servers(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let servers = state.visible_servers();
    let title = format!(" Servers ({}) ", servers.len());

    if servers.is_empty() {
        let message = state
            .view
            .payload()
            .map(|env| env.message.clone())
            .unwrap_or_default();
        let block = body_block(&title);
        frame.render_widget(
            Paragraph::new(Line::from(format!(" {}", message))).block(block),
            area,
        );
        return;
    }

    let header = Row::new(["ID", "IP Address", "Name", "Memory", "Type", "Storage", "Status"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = servers.iter().map(server_row).collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(16),
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(body_block(&title))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn server_row(server: &Server) -> Row<'static> {
    let status_color = if server.is_up() {
        STATUS_OK
    } else {
        STATUS_ERROR
    };
    Row::new(vec![
        Cell::from(server.id.map(|id| id.to_string()).unwrap_or_default()),
        Cell::from(server.ip_address.clone()),
        Cell::from(server.name.clone()),
        Cell::from(server.memory.clone()),
        Cell::from(server.kind.clone()),
        Cell::from(server.storage.clone()),
        Cell::from(Span::styled(
            server.status.label(),
            Style::default().fg(status_color),
        )),
    ])
}
