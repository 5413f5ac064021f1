//! Run Partitioner: rule X10 (spec §4.4).

use super::oracle::BidiClass;
use super::rc::RichChar;

/// A maximal contiguous slice of the post-X9 buffer sharing one embedding
/// level, with its boundary strong directionalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRun {
    pub start: usize,
    pub end: usize,
    pub sor: BidiClass,
    pub eor: BidiClass,
}

impl LevelRun {
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

const fn direction_of(level: u8) -> BidiClass {
    if level % 2 == 0 {
        BidiClass::L
    } else {
        BidiClass::R
    }
}

/// Split `buffer` into maximal level runs and compute each run's sor/eor.
///
/// `sor` for a run is derived from `max(paragraph_level, this_run_level)`;
/// `eor` from `max(this_run_level, next_run_level_or_paragraph_level)`.
#[must_use]
pub fn partition(buffer: &[RichChar], paragraph_level: u8) -> Vec<LevelRun> {
    if buffer.is_empty() {
        return Vec::new();
    }

    let mut boundaries = Vec::new();
    let mut start = 0;
    for i in 1..buffer.len() {
        if buffer[i].level != buffer[i - 1].level {
            boundaries.push((start, i));
            start = i;
        }
    }
    boundaries.push((start, buffer.len()));

    let mut runs = Vec::with_capacity(boundaries.len());
    for (idx, &(start, end)) in boundaries.iter().enumerate() {
        let this_level = buffer[start].level;
        let prev_level = if idx == 0 {
            paragraph_level
        } else {
            buffer[boundaries[idx - 1].0].level
        };
        let next_level = if idx + 1 < boundaries.len() {
            buffer[boundaries[idx + 1].0].level
        } else {
            paragraph_level
        };

        runs.push(LevelRun {
            start,
            end,
            sor: direction_of(this_level.max(prev_level)),
            eor: direction_of(this_level.max(next_level)),
        });
    }

    runs
}
