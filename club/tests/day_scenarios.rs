//! Whole-day scenarios: input text in, output log text out.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use computer_club::{parse_input, run_day, write_log, OutgoingEvent, OutputFormat, ParseError};

// ============================================================================
// Helpers
// ============================================================================

fn simulate_as(input: &str, format: OutputFormat) -> String {
    let input = parse_input(input).expect("input should parse");
    let log = run_day(input.config, input.events).expect("day should run");

    let mut out = Vec::new();
    write_log(&mut out, &log, format).unwrap();
    String::from_utf8(out).unwrap()
}

fn simulate(input: &str) -> String {
    simulate_as(input, OutputFormat::Text)
}

/// Joins lines with a trailing newline, the way the log is written
fn lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_reference_day() {
    let input = lines(&[
        "3",
        "09:00 19:00",
        "10",
        "08:48 1 client1",
        "09:41 1 client1",
        "09:48 1 client2",
        "09:52 3 client1",
        "09:54 2 client1 1",
        "10:25 2 client2 2",
        "10:58 1 client3",
        "10:59 2 client3 3",
        "11:30 1 client4",
        "11:35 2 client4 2",
        "11:45 3 client4",
        "12:33 4 client1",
        "12:43 4 client2",
        "15:52 4 client4",
    ]);

    let expected = lines(&[
        "09:00",
        "08:48 1 client1",
        "08:48 13 NotOpenYet",
        "09:41 1 client1",
        "09:48 1 client2",
        "09:52 3 client1",
        "09:52 13 ICanWaitNoLonger!",
        "09:54 2 client1 1",
        "10:25 2 client2 2",
        "10:58 1 client3",
        "10:59 2 client3 3",
        "11:30 1 client4",
        "11:35 2 client4 2",
        "11:35 13 PlaceIsBusy",
        "11:45 3 client4",
        "12:33 4 client1",
        "12:33 12 client4 1",
        "12:43 4 client2",
        "15:52 4 client4",
        "19:00 11 client3",
        "19:00",
        "1 70 05:58",
        "2 30 02:18",
        "3 90 08:01",
    ]);

    assert_eq!(simulate(&input), expected);
}

#[test]
fn test_promotion_and_eviction_on_single_table() {
    let input = lines(&[
        "1",
        "09:00 19:00",
        "10",
        "09:00 1 a",
        "09:00 2 a 1",
        "09:05 1 b",
        "09:05 3 b",
        "09:30 4 a",
    ]);

    let expected = lines(&[
        "09:00",
        "09:00 1 a",
        "09:00 2 a 1",
        "09:05 1 b",
        "09:05 3 b",
        "09:30 4 a",
        "09:30 12 b 1",
        "19:00 11 b",
        "19:00",
        "1 110 10:00",
    ]);

    assert_eq!(simulate(&input), expected);
}

#[test]
fn test_full_queue_turns_client_away() {
    let input = lines(&[
        "1",
        "09:00 19:00",
        "10",
        "09:00 1 a",
        "09:00 2 a 1",
        "09:10 1 b",
        "09:10 3 b",
        "09:20 1 c",
        "09:20 3 c",
        "09:25 4 c",
    ]);

    let expected = lines(&[
        "09:00",
        "09:00 1 a",
        "09:00 2 a 1",
        "09:10 1 b",
        "09:10 3 b",
        "09:20 1 c",
        "09:20 3 c",
        "09:20 11 c",
        "09:25 4 c",
        "09:25 13 ClientUnknown",
        "19:00 11 a",
        "19:00 11 b",
        "19:00",
        "1 100 10:00",
    ]);

    assert_eq!(simulate(&input), expected);
}

#[test]
fn test_rejections_leave_state_untouched() {
    let input = lines(&[
        "2",
        "09:00 19:00",
        "15",
        "09:00 1 a",
        "09:05 1 a",
        "09:05 2 a 1",
        "10:00 1 a",
        "10:30 2 c 2",
        "11:05 2 a 2",
        "11:10 2 a 2",
        "11:30 3 a",
        "12:00 4 a",
        "19:30 1 b",
    ]);

    let expected = lines(&[
        "09:00",
        "09:00 1 a",
        "09:05 1 a",
        "09:05 13 YouShallNotPass",
        "09:05 2 a 1",
        "10:00 1 a",
        "10:00 13 YouShallNotPass",
        "10:30 2 c 2",
        "10:30 13 ClientUnknown",
        "11:05 2 a 2",
        "11:10 2 a 2",
        "11:10 13 PlaceIsBusy",
        "11:30 3 a",
        "11:30 13 ICanWaitNoLonger!",
        "12:00 4 a",
        "19:30 1 b",
        "19:30 13 NotOpenYet",
        "19:00",
        "1 30 02:00",
        "2 15 00:55",
    ]);

    assert_eq!(simulate(&input), expected);
}

#[test]
fn test_evictions_are_sorted_by_name() {
    let input = lines(&[
        "2",
        "10:00 22:00",
        "7",
        "10:00 1 zz",
        "10:00 2 zz 2",
        "10:01 1 aa",
        "10:02 1 m-1",
        "10:02 2 m-1 1",
        "10:03 3 aa",
    ]);

    let output = simulate(&input);
    let evictions: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("22:00 11 "))
        .collect();

    assert_eq!(evictions, vec!["22:00 11 aa", "22:00 11 m-1", "22:00 11 zz"]);
    assert!(output.ends_with("22:00\n1 84 11:58\n2 84 12:00\n"));
}

#[test]
fn test_empty_day() {
    let output = simulate("4\n08:00 20:00\n100\n");
    assert_eq!(
        output,
        lines(&["08:00", "20:00", "1 0 00:00", "2 0 00:00", "3 0 00:00", "4 0 00:00"])
    );
}

#[test]
fn test_json_output() {
    let input = lines(&["1", "09:00 19:00", "10", "08:00 1 early"]);
    let output = simulate_as(&input, OutputFormat::Json);

    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 5);
    assert_eq!(events[2]["kind"], "error");
    assert_eq!(events[2]["error"], "NotOpenYet");
    assert_eq!(events[2]["client"], "early");
    assert_eq!(events[4]["report"]["revenue"], 0);
}

#[test]
fn test_parse_error_reports_offending_line() {
    let input = lines(&["3", "09:00 19:00", "10", "08:48 1 client1", "09:41 1 Client2"]);

    let error = parse_input(&input).unwrap_err();
    assert_eq!(
        error,
        ParseError::InvalidLine {
            number: 5,
            line: "09:41 1 Client2".to_string(),
        }
    );
    assert_eq!(error.to_string(), "09:41 1 Client2");
}

#[test]
fn test_log_brackets_events_with_markers() {
    let input = parse_input(&lines(&["2", "09:00 19:00", "10", "09:10 1 a", "09:20 4 a"])).unwrap();
    let log = run_day(input.config, input.events).unwrap();

    assert!(matches!(log.first(), Some(OutgoingEvent::Opened { .. })));
    let reports = log
        .iter()
        .rev()
        .take_while(|event| matches!(event, OutgoingEvent::TableReport { .. }))
        .count();
    assert_eq!(reports, 2);
    assert!(matches!(log[log.len() - 3], OutgoingEvent::Closed { .. }));
}
