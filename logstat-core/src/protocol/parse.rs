use crate::protocol::{Command, Ignored, ProtocolError};
use crate::query::{Direction, Query, TimeBound};
use crate::store::LogRecord;

const CMD_INSERT: i64 = 1;
const CMD_BY_TYPE: i64 = 2;
const CMD_WINDOW: i64 = 3;
const CMD_TYPED_WINDOW: i64 = 4;

/// Parse one protocol line into a [`Command`].
///
/// Errors are only returned for lines that are recognisably commands but
/// carry malformed arguments. Anything else comes back as
/// [`Command::Ignored`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let line = line.trim_start();

    if line.trim_end().is_empty() {
        return Ok(Command::Ignored(Ignored::Blank));
    }

    // The command code is separated from its arguments by exactly one space.
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let Ok(code) = head.parse::<i64>() else {
        return Ok(Command::Ignored(Ignored::NotACommand {
            token: head.to_string(),
        }));
    };

    match code {
        CMD_INSERT => parse_insert(rest).map(Command::Insert),
        CMD_BY_TYPE => Ok(Command::Query(Query::ByType {
            log_type: rest.to_string(),
        })),
        CMD_WINDOW => parse_window(rest),
        CMD_TYPED_WINDOW => parse_typed_window(rest),
        other => Ok(Command::Ignored(Ignored::UnknownCommand { code: other })),
    }
}

/// `<timestamp>;<type>;<severity>`. Fields past the third are ignored.
fn parse_insert(payload: &str) -> Result<LogRecord, ProtocolError> {
    let mut fields = payload.splitn(4, ';');

    let timestamp = parse_timestamp(fields.next().unwrap_or_default())?;
    let log_type = fields.next().ok_or(ProtocolError::missing("log type"))?;
    if log_type.is_empty() {
        return Err(ProtocolError::EmptyType);
    }
    let severity = parse_severity(fields.next().unwrap_or_default())?;

    Ok(LogRecord::new(timestamp, log_type, severity))
}

/// `BEFORE|AFTER <timestamp>`
///
/// A missing or malformed timestamp is a [`ProtocolError`]; it is never read as 0.
fn parse_window(args: &str) -> Result<Command, ProtocolError> {
    let mut tokens = args.split_whitespace();

    let direction = match direction_token(tokens.next()) {
        Ok(direction) => direction,
        Err(ignored) => return Ok(Command::Ignored(ignored)),
    };
    let timestamp = parse_timestamp(tokens.next().unwrap_or_default())?;

    Ok(Command::Query(Query::Window {
        bound: TimeBound::new(direction, timestamp),
    }))
}

/// `BEFORE|AFTER <type> <timestamp>`, with the same timestamp rules as
/// [`parse_window`].
fn parse_typed_window(args: &str) -> Result<Command, ProtocolError> {
    let mut tokens = args.split_whitespace();

    let direction = match direction_token(tokens.next()) {
        Ok(direction) => direction,
        Err(ignored) => return Ok(Command::Ignored(ignored)),
    };
    let log_type = tokens.next().ok_or(ProtocolError::missing("log type"))?;
    let timestamp = parse_timestamp(tokens.next().unwrap_or_default())?;

    Ok(Command::Query(Query::TypedWindow {
        log_type: log_type.to_string(),
        bound: TimeBound::new(direction, timestamp),
    }))
}

/// An unrecognised (or absent) direction makes the whole command a no-op,
/// whatever follows it.
fn direction_token(token: Option<&str>) -> Result<Direction, Ignored> {
    let token = token.unwrap_or_default();

    Direction::from_token(token).ok_or_else(|| Ignored::UnknownDirection {
        token: token.to_string(),
    })
}

fn parse_timestamp(raw: &str) -> Result<i64, ProtocolError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ProtocolError::missing("timestamp"));
    }
    value
        .parse::<i64>()
        .map_err(|e| ProtocolError::invalid_timestamp(value, e))
}

fn parse_severity(raw: &str) -> Result<f32, ProtocolError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ProtocolError::missing("severity"));
    }
    value
        .parse::<f32>()
        .map_err(|e| ProtocolError::invalid_severity(value, e))
}
