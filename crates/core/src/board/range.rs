//! Column range

use std::fmt;

use crate::error::Error;
use crate::Result;

/// Half-open window `[start, stop)` over a board's lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub start: usize,
    pub stop: usize,
}

impl ColumnRange {
    /// Create a range, rejecting one that starts after it stops
    pub fn new(start: usize, stop: usize) -> Result<Self> {
        if start > stop {
            return Err(Error::ReversedRange { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Take the selected items out of `items`, keeping their order
    pub fn select<T>(&self, mut items: Vec<T>) -> Result<Vec<T>> {
        if self.start > self.stop {
            return Err(Error::ReversedRange {
                start: self.start,
                stop: self.stop,
            });
        }
        if self.stop > items.len() {
            return Err(Error::RangeOutOfBounds {
                start: self.start,
                stop: self.stop,
                len: items.len(),
            });
        }

        Ok(items.drain(self.start..self.stop).collect())
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}
