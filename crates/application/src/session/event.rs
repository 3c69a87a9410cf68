use super::state::QueryTicket;
use dnslook_domain::{QueryRequest, QueryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// An edit applied to the focused text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Clear,
    Replace(String),
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    Edit(InputEdit),
    SwitchFocus,
    CycleRecordType(Direction),
    Submit,
    NavigateHistory(Direction),
    ToggleHelp,
    QueryCompleted {
        ticket: QueryTicket,
        result: QueryResult,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
}

/// A request the session wants executed off the event path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub ticket: QueryTicket,
    pub request: QueryRequest,
}

/// What the event loop has to do after an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The event was suppressed; state is unchanged.
    Ignored,
    /// State changed; re-render.
    Updated,
    /// State changed and a lookup must be started.
    Dispatch(PendingQuery),
    /// The session is over.
    Quit,
}

impl Transition {
    pub fn needs_render(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}
