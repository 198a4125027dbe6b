use crate::store::LogRecord;

/// Read-only view of the records sharing one type, in insertion order.
///
/// A bucket borrows positions into the primary sequence instead of holding
/// copies, so it can never disagree with it.
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    records: &'a [LogRecord],
    positions: &'a [usize],
}

impl<'a> Bucket<'a> {
    pub(crate) fn new(records: &'a [LogRecord], positions: &'a [usize]) -> Self {
        Self { records, positions }
    }

    pub(crate) fn empty(records: &'a [LogRecord]) -> Self {
        Self {
            records,
            positions: &[],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> BucketIter<'a> {
        BucketIter {
            records: self.records,
            positions: self.positions.iter(),
        }
    }
}

impl<'a> IntoIterator for Bucket<'a> {
    type Item = &'a LogRecord;
    type IntoIter = BucketIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct BucketIter<'a> {
    records: &'a [LogRecord],
    positions: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for BucketIter<'a> {
    type Item = &'a LogRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|&i| &self.records[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for BucketIter<'_> {}
