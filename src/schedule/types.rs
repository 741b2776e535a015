use serde::{Deserialize, Serialize};
use crate::error::InputError;

/// A single activity, `start` to `end`, as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn as_pair(&self) -> (i64, i64) {
        (self.start, self.end)
    }

    /// Display label for the interval at `index` in the input ("A1", "A2", ...)
    pub fn label(index: usize) -> String {
        format!("A{}", index + 1)
    }
}

/// Intervals in the order the user supplied them (display order)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub intervals: Vec<Interval>,
}

impl Schedule {
    /// Pairs `starts[i]` with `ends[i]`. Callers are expected to have checked
    /// that both lists have the same length; extra values are ignored.
    pub fn zip(starts: &[i64], ends: &[i64]) -> Self {
        debug_assert_eq!(starts.len(), ends.len());
        let intervals = starts
            .iter()
            .zip(ends)
            .map(|(&s, &e)| Interval::new(s, e))
            .collect();
        Self { intervals }
    }

    /// Same as [`Schedule::zip`] but rejects lists of different lengths
    pub fn from_parallel(starts: &[i64], ends: &[i64]) -> Result<Self, InputError> {
        if starts.len() != ends.len() {
            return Err(InputError::LengthMismatch {
                starts: starts.len(),
                ends: ends.len(),
            });
        }
        Ok(Self::zip(starts, ends))
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn starts(&self) -> Vec<i64> {
        self.intervals.iter().map(|i| i.start).collect()
    }

    pub fn ends(&self) -> Vec<i64> {
        self.intervals.iter().map(|i| i.end).collect()
    }

    /// Largest end time, `None` for an empty schedule
    pub fn max_end(&self) -> Option<i64> {
        self.intervals.iter().map(|i| i.end).max()
    }
}

/// An accepted interval together with its position in the input schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedInterval {
    pub index: usize,
    pub interval: Interval,
}

/// Intervals accepted by the selector, in acceptance order (ascending end time)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub picks: Vec<SelectedInterval>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn pairs(&self) -> Vec<(i64, i64)> {
        self.picks.iter().map(|p| p.interval.as_pair()).collect()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.picks.iter().map(|p| p.index).collect()
    }

    /// Per-position flags for a schedule of `total` intervals: `mask[i]` is
    /// true when the interval at input index `i` was accepted.
    pub fn mask(&self, total: usize) -> Vec<bool> {
        let mut mask = vec![false; total];
        for pick in &self.picks {
            if let Some(flag) = mask.get_mut(pick.index) {
                *flag = true;
            }
        }
        mask
    }
}
