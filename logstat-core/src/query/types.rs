use crate::store::LogRecord;
use std::fmt::{Display, Formatter};

/// Which side of a timestamp bound a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Before,
    After,
}

impl Direction {
    /// Exact, case-sensitive match on `BEFORE` / `AFTER`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "BEFORE" => Some(Direction::Before),
            "AFTER" => Some(Direction::After),
            _ => None,
        }
    }

    /// Strict comparison: a timestamp equal to the bound is never admitted.
    pub fn admits(self, timestamp: i64, bound: i64) -> bool {
        match self {
            Direction::Before => timestamp < bound,
            Direction::After => timestamp > bound,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Before => write!(f, "BEFORE"),
            Direction::After => write!(f, "AFTER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBound {
    pub direction: Direction,
    pub timestamp: i64,
}

impl TimeBound {
    pub fn new(direction: Direction, timestamp: i64) -> Self {
        Self {
            direction,
            timestamp,
        }
    }

    pub fn admits(&self, record: &LogRecord) -> bool {
        self.direction.admits(record.timestamp, self.timestamp)
    }
}

/// The four supported query shapes (BEFORE and AFTER share a variant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every record of one type.
    ByType { log_type: String },
    /// Every record on one side of a timestamp.
    Window { bound: TimeBound },
    /// Records of one type on one side of a timestamp.
    TypedWindow { log_type: String, bound: TimeBound },
}
