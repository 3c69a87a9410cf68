use super::event::{Direction, InputEdit, PendingQuery, SessionEvent, Transition};
use super::state::{Focus, Pending, QueryTicket, SessionState, Viewport};
use dnslook_domain::{Config, QueryRequest, QueryResult, RecordKind};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Submissions closer together than this are dropped
    pub debounce: Duration,
    pub query_timeout: Duration,
    /// Substituted when the server field is left empty
    pub default_server: String,
}

impl SessionSettings {
    pub fn from_config(config: &Config, default_server: impl Into<String>) -> Self {
        Self {
            debounce: config.session.debounce(),
            query_timeout: config.resolver.query_timeout(),
            default_server: default_server.into(),
        }
    }
}

pub struct Session {
    state: SessionState,
    settings: SessionSettings,
    next_ticket: u64,
}

impl Session {
    /// Starts a session with the server field pre-filled with the default server.
    pub fn new(settings: SessionSettings) -> Self {
        let state = SessionState::new(settings.default_server.clone());
        Self {
            state,
            settings,
            next_ticket: 1,
        }
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn is_finished(&self) -> bool {
        self.state.quit
    }

    /// Initial record type selection, before any event is handled.
    pub fn select_kind(&mut self, kind: RecordKind) {
        self.state.selected_kind_index = kind.index();
    }

    /// Applies one event. `now` is the arrival time, used for debouncing.
    pub fn handle(&mut self, event: SessionEvent, now: Instant) -> Transition {
        if self.state.quit {
            return Transition::Ignored;
        }

        match event {
            SessionEvent::Quit => {
                self.state.quit = true;
                Transition::Quit
            }
            SessionEvent::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
                Transition::Updated
            }
            SessionEvent::Resize { width, height } => {
                self.state.viewport = Viewport { width, height };
                Transition::Updated
            }
            SessionEvent::QueryCompleted { ticket, result } => self.complete(ticket, result),
            _ if self.state.show_help => Transition::Ignored,
            SessionEvent::Edit(edit) => self.edit(edit),
            SessionEvent::SwitchFocus => {
                self.state.focus = self.state.focus.next();
                Transition::Updated
            }
            SessionEvent::CycleRecordType(direction) => self.cycle_record_type(direction),
            SessionEvent::NavigateHistory(Direction::Backward) => self.history_back(),
            SessionEvent::NavigateHistory(Direction::Forward) => self.history_forward(),
            SessionEvent::Submit => self.submit(now),
        }
    }

    fn edit(&mut self, edit: InputEdit) -> Transition {
        let field = match self.state.focus {
            Focus::Domain => &mut self.state.domain_input,
            Focus::Server => &mut self.state.server_input,
            Focus::RecordType => return Transition::Ignored,
        };

        match edit {
            InputEdit::Insert(c) => field.push(c),
            InputEdit::Backspace => {
                field.pop();
            }
            InputEdit::Clear => field.clear(),
            InputEdit::Replace(value) => *field = value,
        }
        Transition::Updated
    }

    fn cycle_record_type(&mut self, direction: Direction) -> Transition {
        if self.state.focus != Focus::RecordType {
            return Transition::Ignored;
        }

        let current = self.state.selected_kind();
        let kind = match direction {
            Direction::Forward => current.next(),
            Direction::Backward => current.previous(),
        };
        self.state.selected_kind_index = kind.index();
        Transition::Updated
    }

    fn history_back(&mut self) -> Transition {
        if self.state.focus != Focus::RecordType || self.state.history.is_empty() {
            return Transition::Ignored;
        }

        let loaded = self
            .state
            .history
            .back()
            .map(|entry| (entry.domain.to_string(), entry.kind));

        match loaded {
            Some((domain, kind)) => {
                self.load_entry(domain, kind);
                Transition::Updated
            }
            None => Transition::Ignored,
        }
    }

    fn history_forward(&mut self) -> Transition {
        if self.state.focus != Focus::RecordType || !self.state.history.is_browsing() {
            return Transition::Ignored;
        }

        let loaded = self
            .state
            .history
            .forward()
            .map(|entry| (entry.domain.to_string(), entry.kind));

        match loaded {
            Some((domain, kind)) => self.load_entry(domain, kind),
            None => self.state.domain_input.clear(),
        }
        Transition::Updated
    }

    fn load_entry(&mut self, domain: String, kind: RecordKind) {
        self.state.domain_input = domain;
        self.state.selected_kind_index = kind.index();
    }

    fn submit(&mut self, now: Instant) -> Transition {
        if self.state.focus != Focus::Domain {
            return Transition::Ignored;
        }

        if self.state.pending.is_awaiting() {
            debug!("Submit ignored: a query is already in flight");
            return Transition::Ignored;
        }

        let domain = self.state.domain_input.trim();
        if domain.is_empty() {
            return Transition::Ignored;
        }

        if let Some(last) = self.state.last_issued_at {
            if now.saturating_duration_since(last) < self.settings.debounce {
                debug!("Submit ignored: within debounce window");
                return Transition::Ignored;
            }
        }

        let server = match self.state.server_input.trim() {
            "" => self.settings.default_server.as_str(),
            server => server,
        };

        let request = match QueryRequest::new(
            domain,
            self.state.selected_kind(),
            server,
            self.settings.query_timeout,
        ) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Submit rejected");
                return Transition::Ignored;
            }
        };

        let ticket = QueryTicket(self.next_ticket);
        self.next_ticket += 1;

        self.state.pending = Pending::AwaitingResponse(ticket);
        self.state.last_issued_at = Some(now);

        debug!(
            ticket = %ticket,
            domain = %request.domain,
            kind = %request.kind,
            server = %request.server,
            "Query dispatched"
        );

        Transition::Dispatch(PendingQuery { ticket, request })
    }

    fn complete(&mut self, ticket: QueryTicket, result: QueryResult) -> Transition {
        match self.state.pending {
            Pending::AwaitingResponse(expected) if expected == ticket => {}
            _ => {
                debug!(ticket = %ticket, "Dropping stale query completion");
                return Transition::Ignored;
            }
        }

        self.state.pending = Pending::Idle;

        if result.is_success() && !self.state.history.insert(result.clone()) {
            debug!(domain = %result.domain, kind = %result.kind, "Already in history");
        }
        self.state.history.reset_cursor();
        self.state.last_result = Some(result);

        Transition::Updated
    }
}
