/// Line counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub lines: usize,
    pub inserted: usize,
    pub queries: usize,
    /// Blank lines, non-commands, unknown codes and unknown directions.
    pub ignored: usize,
    /// Lines dropped because their arguments failed to parse.
    pub rejected: usize,
}
