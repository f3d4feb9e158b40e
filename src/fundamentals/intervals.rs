use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval start {start} must be lower than end {end}")]
    InvalidBounds { start: i32, end: i32 },
}

/// Closed integer interval with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    start: i32,
    end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Result<Self, IntervalError> {
        if start >= end {
            return Err(IntervalError::InvalidBounds { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalsAdjacencyDetector;

impl IntervalsAdjacencyDetector {
    /// Two intervals are adjacent when one ends exactly where the other
    /// starts. Overlapping or containing intervals are not adjacent.
    pub fn is_adjacent(&self, a: &Interval, b: &Interval) -> bool {
        a.end == b.start || a.start == b.end
    }
}
