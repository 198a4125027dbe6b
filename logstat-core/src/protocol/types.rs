use crate::query::Query;
use crate::store::LogRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert(LogRecord),
    Query(Query),
    Ignored(Ignored),
}

/// Why a line produced neither an insert nor a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    /// Empty or whitespace-only line.
    Blank,
    /// First token is not an integer.
    NotACommand { token: String },
    /// Integer command outside 1..=4.
    UnknownCommand { code: i64 },
    /// Direction token other than `BEFORE` / `AFTER`.
    UnknownDirection { token: String },
}
