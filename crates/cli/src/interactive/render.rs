use dnslook_application::session::{Focus, Session, SessionState};
use dnslook_domain::{Outcome, QueryResult, RecordKind};
use std::fmt::Write;

const FALLBACK_WIDTH: usize = 76;

/// Plain-text screen for the current session snapshot.
pub fn render(session: &Session) -> String {
    let state = session.snapshot();
    let width = screen_width(state);

    if state.show_help {
        return render_help(width);
    }

    let mut s = String::new();
    title(&mut s, "DNS Lookup Tool", width);

    field(&mut s, state, Focus::Domain, "Domain", &state.domain_input);
    field(&mut s, state, Focus::Server, "Server", &state.server_input);
    if state.server_input.trim().is_empty() {
        let _ = writeln!(
            s,
            "               (using system DNS server {})",
            session.settings().default_server
        );
    }
    record_types(&mut s, state);

    s.push('\n');
    s.push_str(":tab switch focus, enter to look up, :up/:down history, q to quit\n");
    s.push_str(":left/:right cycle record types, ? for help\n\n");

    if state.is_loading() {
        s.push_str("Querying DNS server...\n");
    } else if let Some(result) = &state.last_result {
        render_result(&mut s, result);
    }

    if !state.history.is_empty() {
        let _ = writeln!(
            s,
            "\n{} queries in history. Use :up/:down on the record type selector to browse.",
            state.history.len()
        );
    }
    if let (Some(index), Some(entry)) = (state.history.cursor(), state.history.current()) {
        let _ = writeln!(
            s,
            "Browsing history {}/{}: {} ({})",
            index + 1,
            state.history.len(),
            entry.domain,
            entry.kind
        );
    }

    s
}

fn screen_width(state: &SessionState) -> usize {
    match state.viewport.width as usize {
        w if w >= 20 => w - 4,
        _ => FALLBACK_WIDTH,
    }
}

fn title(s: &mut String, text: &str, width: usize) {
    s.push_str(text);
    s.push('\n');
    s.push_str(&"=".repeat(text.len().min(width)));
    s.push('\n');
}

fn marker(state: &SessionState, focus: Focus) -> &'static str {
    if state.focus == focus {
        "> "
    } else {
        "  "
    }
}

fn field(s: &mut String, state: &SessionState, focus: Focus, label: &str, value: &str) {
    let _ = writeln!(s, "{}{:<13}{}", marker(state, focus), format!("{}:", label), value);
}

fn record_types(s: &mut String, state: &SessionState) {
    let selected = state.selected_kind();
    let kinds: Vec<String> = RecordKind::ALL
        .iter()
        .map(|kind| {
            if *kind == selected {
                format!("[{}]", kind)
            } else {
                kind.to_string()
            }
        })
        .collect();

    let _ = writeln!(
        s,
        "{}{:<13}{}",
        marker(state, Focus::RecordType),
        "Record Type:",
        kinds.join(" ")
    );
}

fn render_result(s: &mut String, result: &QueryResult) {
    let _ = writeln!(s, "Results for {} ({} record)", result.domain, result.kind);
    let _ = writeln!(s, "Query time: {:.2?}\n", result.latency);

    match result.outcome() {
        Outcome::Failed(error) => {
            let _ = writeln!(s, "Error [{}]: {}", error.label(), error);
            if error.is_transport() {
                s.push_str("Check the server address and your network connection.\n");
            }
        }
        Outcome::NoRecords => match result.response_code {
            Some(rcode) if rcode != "NOERROR" => {
                let _ = writeln!(s, "No records found! ({})", rcode);
            }
            _ => s.push_str("No records found!\n"),
        },
        Outcome::Records(records) => {
            for (i, record) in records.iter().enumerate() {
                let _ = writeln!(s, "{}. {}", i + 1, record);
            }
        }
    }
}

fn render_help(width: usize) -> String {
    let mut s = String::new();
    title(&mut s, "Help - DNS Lookup Tool", width);
    s.push('\n');

    s.push_str("Navigation:\n");
    s.push_str("- :tab          Cycle between input fields\n");
    s.push_str("- enter         Perform DNS lookup (typing a domain submits it)\n");
    s.push_str("- :left/:right  Change record type\n");
    s.push_str("- :up/:down     Browse history\n");
    s.push_str("- :clear/:back  Clear the focused field / delete one character\n");
    s.push_str("- ?             Toggle this help screen\n");
    s.push_str("- q             Quit the application\n\n");

    s.push_str("Record Types:\n");
    for kind in RecordKind::ALL {
        let _ = writeln!(s, "- {}: {}", kind, kind.description());
    }
    s.push('\n');

    s.push_str("Server:\n");
    s.push_str("- Enter a DNS server address with port (e.g., 8.8.8.8:53)\n");
    s.push_str("- Leave empty to use your system's default DNS server\n\n");

    s.push_str("History:\n");
    s.push_str("- Use :up and :down on the record type selector to browse past queries\n");
    s.push_str("- History is kept for the current session only\n\n");

    s.push_str("Press ? to return to the main screen\n");
    s
}
