//! Interactive session state machine.
//!
//! `Session` is the single writer of `SessionState`. Every user action and
//! every query completion arrives as a `SessionEvent` and is applied by
//! `Session::handle`, one at a time, in arrival order. Network work happens
//! elsewhere: a `Transition::Dispatch` hands a request to the caller, and the
//! result comes back later as `SessionEvent::QueryCompleted`.

mod event;
mod machine;
mod state;

pub use event::{Direction, InputEdit, PendingQuery, SessionEvent, Transition};
pub use machine::{Session, SessionSettings};
pub use state::{Focus, Pending, QueryTicket, SessionState, Viewport};
