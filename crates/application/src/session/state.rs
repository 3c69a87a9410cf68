use dnslook_domain::{History, QueryResult, RecordKind};
use std::fmt;
use std::time::Instant;

/// Which input currently receives edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Domain,
    Server,
    RecordType,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Domain => Focus::Server,
            Focus::Server => Focus::RecordType,
            Focus::RecordType => Focus::Domain,
        }
    }
}

/// Identity of a dispatched query, used to drop stale completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryTicket(pub u64);

impl fmt::Display for QueryTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    #[default]
    Idle,
    AwaitingResponse(QueryTicket),
}

impl Pending {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Pending::AwaitingResponse(_))
    }
}

/// Terminal geometry, kept for the renderer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub focus: Focus,
    pub domain_input: String,
    pub server_input: String,
    pub selected_kind_index: usize,
    pub pending: Pending,
    pub last_result: Option<QueryResult>,
    pub history: History,
    pub last_issued_at: Option<Instant>,
    pub show_help: bool,
    pub viewport: Viewport,
    pub quit: bool,
}

impl SessionState {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server_input: server.into(),
            ..Self::default()
        }
    }

    pub fn selected_kind(&self) -> RecordKind {
        RecordKind::from_index(self.selected_kind_index)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_awaiting()
    }
}
