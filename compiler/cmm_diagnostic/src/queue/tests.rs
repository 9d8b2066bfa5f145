use super::*;
use pretty_assertions::assert_eq;

fn error(code: ErrorCode, start: u32, message: &str) -> Diagnostic {
    Diagnostic::new(code, Span::new(start, start + 1), message)
}

fn messages(queue: DiagnosticQueue) -> Vec<String> {
    queue.into_sorted().into_iter().map(|d| d.message).collect()
}

#[test]
fn test_into_sorted_orders_by_position() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(error(ErrorCode::E2002, 20, "second"), 3, 1);
    queue.add(error(ErrorCode::E2001, 4, "first"), 1, 5);
    queue.add(error(ErrorCode::E2003, 8, "middle"), 1, 9);

    assert_eq!(messages(queue), vec!["first", "middle", "second"]);
}

#[test]
fn test_same_position_keeps_insertion_order() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error(ErrorCode::E2008, 0, "outer"), 1, 1);
    queue.add(error(ErrorCode::E2001, 0, "inner"), 1, 1);

    assert_eq!(messages(queue), vec!["outer", "inner"]);
}

#[test]
fn test_exact_repeat_is_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error(ErrorCode::E2001, 1, "bad `not`"), 1, 2).is_some());
    assert!(queue.add(error(ErrorCode::E2001, 1, "bad `not`"), 1, 2).is_none());
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_same_line_distinct_spans_are_kept() {
    // `(not 5) == (not 6)`: two errors, one line, one code, one message
    let mut queue = DiagnosticQueue::new();
    let first = queue.add(error(ErrorCode::E2001, 1, "bad `not`"), 1, 2);
    let second = queue.add(error(ErrorCode::E2001, 12, "bad `not`"), 1, 13);

    assert!(first.is_some());
    assert!(second.is_some());
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_dedup_disabled_keeps_repeats() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(error(ErrorCode::E2001, 1, "bad `not`"), 1, 2);
    queue.add(error(ErrorCode::E2001, 1, "bad `not`"), 1, 2);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_error_limit_drops_and_counts() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    for start in 0..5 {
        queue.add(error(ErrorCode::E2002, start, "index"), 1, start + 1);
    }
    // a repeat of a kept diagnostic is not counted as dropped
    assert!(queue.add(error(ErrorCode::E2002, 0, "index"), 1, 1).is_none());

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dropped(), 3);
}

#[test]
fn test_add_past_limit_gives_no_guarantee() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    assert!(queue.add(error(ErrorCode::E2011, 0, "size"), 1, 1).is_some());
    assert!(queue.add(error(ErrorCode::E2011, 5, "size"), 2, 1).is_none());
}

#[test]
fn test_limit_notice() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: true,
    });
    assert_eq!(queue.limit_notice(Span::DUMMY), None);

    queue.add(error(ErrorCode::E2004, 0, "a"), 1, 1);
    queue.add(error(ErrorCode::E2004, 3, "b"), 1, 4);
    let notice = queue.limit_notice(Span::new(3, 4));

    let notice = notice.unwrap_or_else(|| panic!("one diagnostic was dropped"));
    assert_eq!(notice.code, ErrorCode::E9001);
    assert_eq!(notice.message, "1 more error not shown");
    assert_eq!(notice.notes, vec!["error limit is 1"]);
}

#[test]
fn test_has_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.is_empty());
    assert!(queue.has_errors().is_none());
    queue.add(error(ErrorCode::E2009, 0, "call"), 1, 1);
    assert!(queue.has_errors().is_some());
}
