use crate::model::{Server, ServerStatus};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    IpAddress,
    Name,
    Memory,
    Kind,
    Storage,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::IpAddress,
        FormField::Name,
        FormField::Memory,
        FormField::Kind,
        FormField::Storage,
        FormField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::IpAddress => "IP address",
            FormField::Name => "Name",
            FormField::Memory => "Memory",
            FormField::Kind => "Type",
            FormField::Storage => "Storage",
            FormField::Status => "Status",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Server being typed into the dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerDraft {
    pub ip_address: String,
    pub name: String,
    pub memory: String,
    pub kind: String,
    pub storage: String,
    pub status: ServerStatus,
}

impl Default for ServerDraft {
    fn default() -> Self {
        Self {
            ip_address: String::new(),
            name: String::new(),
            memory: String::new(),
            kind: String::new(),
            storage: String::new(),
            status: ServerStatus::Down,
        }
    }
}

impl ServerDraft {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::IpAddress => &self.ip_address,
            FormField::Name => &self.name,
            FormField::Memory => &self.memory,
            FormField::Kind => &self.kind,
            FormField::Storage => &self.storage,
            FormField::Status => self.status.label(),
        }
    }

    /// Text buffer behind `field`; `None` for the status toggle.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::IpAddress => Some(&mut self.ip_address),
            FormField::Name => Some(&mut self.name),
            FormField::Memory => Some(&mut self.memory),
            FormField::Kind => Some(&mut self.kind),
            FormField::Storage => Some(&mut self.storage),
            FormField::Status => None,
        }
    }

    /// Build the server to submit. IP address and name are required.
    pub fn to_server(&self) -> Result<Server, String> {
        let ip_address = self.ip_address.trim();
        let name = self.name.trim();
        if ip_address.is_empty() {
            return Err("IP address is required".to_string());
        }
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(Server {
            id: None,
            ip_address: ip_address.to_string(),
            name: name.to_string(),
            memory: self.memory.trim().to_string(),
            kind: self.kind.trim().to_string(),
            storage: self.storage.trim().to_string(),
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AddServerFormState {
    #[default]
    Hidden,
    Visible {
        draft: ServerDraft,
        focused: FormField,
        error: Option<String>,
    },
}

impl UiState for AddServerFormState {}

impl AddServerFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn focused(&self) -> Option<FormField> {
        match self {
            Self::Visible { focused, .. } => Some(*focused),
            Self::Hidden => None,
        }
    }

    pub fn draft(&self) -> Option<&ServerDraft> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }
}
