use crate::protocol::{Command, Ignored, ProtocolError, parse_command};
use crate::query::{Direction, Query, TimeBound};
use crate::store::LogRecord;
use pretty_assertions::assert_eq;

fn query(line: &str) -> Query {
    match parse_command(line) {
        Ok(Command::Query(q)) => q,
        other => panic!("expected query for {line:?}, got {other:?}"),
    }
}

fn ignored(line: &str) -> Ignored {
    match parse_command(line) {
        Ok(Command::Ignored(i)) => i,
        other => panic!("expected ignored line for {line:?}, got {other:?}"),
    }
}

//-----------------------------------------------------------------------------
// Insert
//-----------------------------------------------------------------------------
#[test]
fn parses_insert() {
    assert_eq!(
        parse_command("1 100;ERROR;1.5").unwrap(),
        Command::Insert(LogRecord::new(100, "ERROR", 1.5))
    );
}

#[test]
fn insert_accepts_negative_and_large_values() {
    assert_eq!(
        parse_command("1 -9223372036854775808;disk full;-3.25e2").unwrap(),
        Command::Insert(LogRecord::new(i64::MIN, "disk full", -325.0))
    );
}

#[test]
fn insert_trims_numeric_fields_but_not_type() {
    assert_eq!(
        parse_command("1  42 ; WARN ; 0.5 ").unwrap(),
        Command::Insert(LogRecord::new(42, " WARN ", 0.5))
    );
}

#[test]
fn insert_ignores_fields_past_severity() {
    assert_eq!(
        parse_command("1 7;INFO;2;extra;fields").unwrap(),
        Command::Insert(LogRecord::new(7, "INFO", 2.0))
    );
}

#[test]
fn insert_with_bad_timestamp_is_error() {
    let err = parse_command("1 abc;ERROR;1.5").unwrap_err();

    match err {
        ProtocolError::InvalidTimestamp { value, .. } => assert_eq!(value, "abc"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn insert_with_bad_severity_is_error() {
    let err = parse_command("1 100;ERROR;high").unwrap_err();

    match err {
        ProtocolError::InvalidSeverity { value, .. } => assert_eq!(value, "high"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn insert_with_trailing_garbage_is_error() {
    assert!(matches!(
        parse_command("1 100x;ERROR;1.5"),
        Err(ProtocolError::InvalidTimestamp { .. })
    ));
    assert!(matches!(
        parse_command("1 100;ERROR;1.5kg"),
        Err(ProtocolError::InvalidSeverity { .. })
    ));
}

#[test]
fn insert_with_missing_fields_is_error() {
    assert_eq!(
        parse_command("1 100;ERROR").unwrap_err(),
        ProtocolError::missing("severity")
    );
    assert_eq!(
        parse_command("1 100").unwrap_err(),
        ProtocolError::missing("log type")
    );
    assert_eq!(
        parse_command("1").unwrap_err(),
        ProtocolError::missing("timestamp")
    );
    assert_eq!(
        parse_command("1 100;ERROR;").unwrap_err(),
        ProtocolError::missing("severity")
    );
}

#[test]
fn insert_with_empty_type_is_error() {
    assert_eq!(
        parse_command("1 100;;1.5").unwrap_err(),
        ProtocolError::EmptyType
    );
}

#[test]
fn insert_accepts_non_finite_severity() {
    let Command::Insert(record) = parse_command("1 1;X;inf").unwrap() else {
        panic!("expected insert");
    };
    assert_eq!(record.severity, f32::INFINITY);

    let Command::Insert(record) = parse_command("1 1;X;NaN").unwrap() else {
        panic!("expected insert");
    };
    assert!(record.severity.is_nan());
}

//-----------------------------------------------------------------------------
// Queries
//-----------------------------------------------------------------------------
#[test]
fn parses_by_type() {
    assert_eq!(
        query("2 ERROR"),
        Query::ByType {
            log_type: "ERROR".into()
        }
    );
}

#[test]
fn by_type_keeps_rest_of_line_verbatim() {
    assert_eq!(
        query("2 disk full"),
        Query::ByType {
            log_type: "disk full".into()
        }
    );
}

#[test]
fn parses_global_window() {
    assert_eq!(
        query("3 BEFORE 150"),
        Query::Window {
            bound: TimeBound::new(Direction::Before, 150)
        }
    );
    assert_eq!(
        query("3 AFTER -5"),
        Query::Window {
            bound: TimeBound::new(Direction::After, -5)
        }
    );
}

#[test]
fn parses_typed_window() {
    assert_eq!(
        query("4 AFTER ERROR 100"),
        Query::TypedWindow {
            log_type: "ERROR".into(),
            bound: TimeBound::new(Direction::After, 100)
        }
    );
}

#[test]
fn window_with_bad_timestamp_is_error() {
    assert!(matches!(
        parse_command("3 BEFORE soon"),
        Err(ProtocolError::InvalidTimestamp { .. })
    ));
    assert_eq!(
        parse_command("4 AFTER ERROR").unwrap_err(),
        ProtocolError::missing("timestamp")
    );
    assert_eq!(
        parse_command("4 AFTER").unwrap_err(),
        ProtocolError::missing("log type")
    );
}

#[test]
fn strips_carriage_return() {
    assert_eq!(
        query("2 ERROR\r"),
        Query::ByType {
            log_type: "ERROR".into()
        }
    );
    assert_eq!(
        parse_command("1 1;A;2\r").unwrap(),
        Command::Insert(LogRecord::new(1, "A", 2.0))
    );
}

//-----------------------------------------------------------------------------
// Ignored lines
//-----------------------------------------------------------------------------
#[test]
fn unknown_direction_is_ignored_regardless_of_arguments() {
    assert_eq!(
        ignored("3 DURING 100"),
        Ignored::UnknownDirection {
            token: "DURING".into()
        }
    );
    assert_eq!(
        ignored("4 before ERROR not-a-number"),
        Ignored::UnknownDirection {
            token: "before".into()
        }
    );
    assert_eq!(
        ignored("3"),
        Ignored::UnknownDirection { token: "".into() }
    );
}

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(ignored(""), Ignored::Blank);
    assert_eq!(ignored("   "), Ignored::Blank);
    assert_eq!(ignored("\r"), Ignored::Blank);
}

#[test]
fn non_numeric_command_is_ignored() {
    assert_eq!(
        ignored("INSERT 1;A;2"),
        Ignored::NotACommand {
            token: "INSERT".into()
        }
    );
}

#[test]
fn unknown_command_code_is_ignored() {
    assert_eq!(ignored("9 ERROR"), Ignored::UnknownCommand { code: 9 });
    assert_eq!(ignored("0"), Ignored::UnknownCommand { code: 0 });
}

#[test]
fn window_without_timestamp_is_error_not_zero() {
    assert_eq!(
        parse_command("3 AFTER").unwrap_err(),
        ProtocolError::missing("timestamp")
    );
    assert!(matches!(
        parse_command("4 BEFORE ERROR 1.5"),
        Err(ProtocolError::InvalidTimestamp { .. })
    ));
}
