use crate::store::LogRecord;

/// Min/max/mean severity of a subset of records.
///
/// An empty subset produces [`Stats::ZERO`], which is indistinguishable in
/// output from a subset whose severities are all zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    /// Number of records reduced. Not part of the rendered line.
    pub count: usize,
}

impl Stats {
    pub const ZERO: Stats = Stats {
        min: 0.0,
        max: 0.0,
        mean: 0.0,
        count: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Single-pass fold over severities.
///
/// The sum is kept in `f32` and divided once at the end; averaging
/// incrementally rounds differently.
#[derive(Debug, Clone)]
pub struct StatsAccumulator {
    min: f32,
    max: f32,
    sum: f32,
    count: usize,
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self {
            min: f32::MAX,
            max: f32::MIN,
            sum: 0.0,
            count: 0,
        }
    }

    pub fn push(&mut self, severity: f32) {
        // A NaN severity never replaces the running min or max, but it does
        // poison the sum.
        if severity < self.min {
            self.min = severity;
        }
        if self.max < severity {
            self.max = severity;
        }
        self.sum += severity;
        self.count += 1;
    }

    pub fn finish(self) -> Stats {
        if self.count == 0 {
            return Stats::ZERO;
        }

        Stats {
            min: self.min,
            max: self.max,
            mean: self.sum / self.count as f32,
            count: self.count,
        }
    }
}

/// Reduce `records` to their severity statistics. Holds no state between calls.
pub fn aggregate<'a, I>(records: I) -> Stats
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut acc = StatsAccumulator::new();
    for record in records {
        acc.push(record.severity);
    }
    acc.finish()
}
