use crate::model::Server;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::form::{AddServerFormState, FormIntent, FormReducer};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

/// Gateway request issued by the UI. Executed by [`crate::ui::worker`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Refresh,
    Ping { ip_address: String },
    Delete { server_id: u64 },
    Save { server: Server },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    base_url: String,
    /// Server list state (MVI pattern).
    dashboard: DashboardState,
    /// Add-server dialog state (MVI pattern).
    form: AddServerFormState,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            base_url: base_url.into(),
            dashboard: DashboardState::default(),
            form: AddServerFormState::default(),
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn form(&self) -> &AddServerFormState {
        &self.form
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Advance the spinner while a request is pending.
    pub fn on_tick(&mut self) {
        self.dispatch_dashboard(DashboardIntent::Tick);
    }

    // ========================================================================
    // Dashboard (MVI pattern)
    // ========================================================================

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    /// Re-fetch the server list. The worker posts `Loading` first.
    pub fn request_refresh(&mut self) -> bool {
        self.send_command(UiCommand::Refresh)
    }

    pub fn ping_selected(&mut self) -> bool {
        let Some(server) = self.dashboard.selected_server() else {
            return false;
        };
        let ip_address = server.ip_address.clone();
        let label = format!("Pinging {}", ip_address);
        if !self.send_command(UiCommand::Ping { ip_address }) {
            return false;
        }
        self.dispatch_dashboard(DashboardIntent::ActionStarted(label));
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(server) = self.dashboard.selected_server() else {
            return false;
        };
        let Some(server_id) = server.id else {
            let notice = format!("{} has no id yet; refresh first", server.name);
            self.dispatch_dashboard(DashboardIntent::Notice(notice));
            return false;
        };
        let label = format!("Deleting {}", server.name);
        if !self.send_command(UiCommand::Delete { server_id }) {
            return false;
        }
        self.dispatch_dashboard(DashboardIntent::ActionStarted(label));
        true
    }

    // ========================================================================
    // Add-server form (MVI pattern)
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_form(&mut self) {
        self.dispatch_form(FormIntent::Open);
    }

    pub fn close_form(&mut self) {
        self.dispatch_form(FormIntent::Close);
    }

    /// Validate the draft and send it. The dialog stays open on failure.
    pub fn submit_form(&mut self) -> bool {
        let Some(draft) = self.form.draft() else {
            return false;
        };
        let server = match draft.to_server() {
            Ok(server) => server,
            Err(message) => {
                self.dispatch_form(FormIntent::Invalid(message));
                return false;
            }
        };
        let label = format!("Saving {}", server.name);
        if !self.send_command(UiCommand::Save { server }) {
            let message = self
                .last_command_error
                .clone()
                .unwrap_or_else(|| "Not connected to backend worker".to_string());
            self.dispatch_form(FormIntent::Invalid(message));
            return false;
        }
        self.close_form();
        self.dispatch_dashboard(DashboardIntent::ActionStarted(label));
        true
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to queue gateway command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
