use crate::model::StatusFilter;
use crate::ui::app::App;
use crate::ui::dashboard::DashboardIntent;
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form().is_visible() {
        handle_form_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') => {
            app.request_refresh();
        }
        KeyCode::Char('f') => app.dispatch_dashboard(DashboardIntent::CycleFilter),
        KeyCode::Char('1') => set_filter(app, StatusFilter::All),
        KeyCode::Char('2') => set_filter(app, StatusFilter::ServerUp),
        KeyCode::Char('3') => set_filter(app, StatusFilter::ServerDown),
        KeyCode::Up | KeyCode::Char('k') => {
            app.dispatch_dashboard(DashboardIntent::MoveSelection(-1))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dispatch_dashboard(DashboardIntent::MoveSelection(1))
        }
        KeyCode::Char('p') => {
            app.ping_selected();
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('n') => app.open_form(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let on_status = app.form().focused() == Some(FormField::Status);
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Left | KeyCode::Right if on_status => {
            app.dispatch_form(FormIntent::ToggleStatus)
        }
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) => app.dispatch_form(FormIntent::Input(ch)),
        _ => {}
    }
}

fn set_filter(app: &mut App, filter: StatusFilter) {
    app.dispatch_dashboard(DashboardIntent::SetFilter(filter));
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
