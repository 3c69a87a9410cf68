use dnslook_application::session::{Direction, Focus, InputEdit, SessionEvent};

/// Maps one input line to session events.
///
/// Lines starting with `:` are commands. Anything else replaces the focused
/// field; on the domain field it is also submitted, like typing a name and
/// pressing enter. An empty line is a bare enter.
pub fn parse_line(line: &str, focus: Focus) -> Vec<SessionEvent> {
    let text = line.trim();

    match text {
        "" | ":enter" => vec![SessionEvent::Submit],
        ":tab" => vec![SessionEvent::SwitchFocus],
        ":up" => vec![SessionEvent::NavigateHistory(Direction::Backward)],
        ":down" => vec![SessionEvent::NavigateHistory(Direction::Forward)],
        ":left" | ":h" => vec![SessionEvent::CycleRecordType(Direction::Backward)],
        ":right" | ":l" => vec![SessionEvent::CycleRecordType(Direction::Forward)],
        ":help" | "?" => vec![SessionEvent::ToggleHelp],
        ":quit" | ":q" | "q" => vec![SessionEvent::Quit],
        ":clear" => vec![SessionEvent::Edit(InputEdit::Clear)],
        ":back" => vec![SessionEvent::Edit(InputEdit::Backspace)],
        _ if text.starts_with(":resize") => parse_resize(text).into_iter().collect(),
        _ if text.starts_with(':') => Vec::new(),
        _ => {
            let mut events = vec![SessionEvent::Edit(InputEdit::Replace(text.to_string()))];
            if focus == Focus::Domain {
                events.push(SessionEvent::Submit);
            }
            events
        }
    }
}

fn parse_resize(text: &str) -> Option<SessionEvent> {
    let mut parts = text.split_whitespace().skip(1);
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    Some(SessionEvent::Resize { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str, focus: Focus) -> SessionEvent {
        let mut events = parse_line(line, focus);
        assert_eq!(events.len(), 1, "expected one event for {:?}", line);
        events.remove(0)
    }

    #[test]
    fn test_commands() {
        assert!(matches!(single(":tab", Focus::Domain), SessionEvent::SwitchFocus));
        assert!(matches!(single(":enter", Focus::Domain), SessionEvent::Submit));
        assert!(matches!(single("", Focus::Server), SessionEvent::Submit));
        assert!(matches!(
            single(":up", Focus::RecordType),
            SessionEvent::NavigateHistory(Direction::Backward)
        ));
        assert!(matches!(
            single(":down", Focus::RecordType),
            SessionEvent::NavigateHistory(Direction::Forward)
        ));
        assert!(matches!(
            single(":left", Focus::RecordType),
            SessionEvent::CycleRecordType(Direction::Backward)
        ));
        assert!(matches!(
            single(":right", Focus::RecordType),
            SessionEvent::CycleRecordType(Direction::Forward)
        ));
        assert!(matches!(single("?", Focus::Domain), SessionEvent::ToggleHelp));
        assert!(matches!(single(":help", Focus::Domain), SessionEvent::ToggleHelp));
        assert!(matches!(single("q", Focus::Domain), SessionEvent::Quit));
        assert!(matches!(single(":quit", Focus::Domain), SessionEvent::Quit));
        assert!(matches!(
            single(":clear", Focus::Server),
            SessionEvent::Edit(InputEdit::Clear)
        ));
        assert!(matches!(
            single(":back", Focus::Server),
            SessionEvent::Edit(InputEdit::Backspace)
        ));
    }

    #[test]
    fn test_domain_text_is_replaced_then_submitted() {
        let events = parse_line("  example.com \n", Focus::Domain);

        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            SessionEvent::Edit(InputEdit::Replace(text)) if text == "example.com"
        ));
        assert!(matches!(events[1], SessionEvent::Submit));
    }

    #[test]
    fn test_server_text_is_only_replaced() {
        let events = parse_line("1.1.1.1:53", Focus::Server);

        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            SessionEvent::Edit(InputEdit::Replace(text)) if text == "1.1.1.1:53"
        ));
    }

    #[test]
    fn test_resize() {
        assert!(matches!(
            single(":resize 120 40", Focus::Domain),
            SessionEvent::Resize {
                width: 120,
                height: 40
            }
        ));
        assert!(parse_line(":resize wide", Focus::Domain).is_empty());
    }

    #[test]
    fn test_unknown_command_is_dropped() {
        assert!(parse_line(":frobnicate", Focus::Domain).is_empty());
    }
}
