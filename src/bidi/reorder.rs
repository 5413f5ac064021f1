//! Reorderer & Mirrorer: rules L1, L2, L4 (spec §4.8).

use std::ops::Range;

use super::oracle::{mirror_of, BidiClass};
use super::rc::RichChar;

/// Apply L1, L2, and L4 to `buffer` in place, scoped per line. A line is a
/// maximal slice ending at a `B` character or at end of input (spec §4.8;
/// the end-of-input case applies L1's trailing-whitespace clause even
/// without an explicit `B`, per spec §9).
pub fn apply(buffer: &mut [RichChar], paragraph_level: u8) {
    let lines = line_ranges(buffer);

    for range in &lines {
        reset_separators_and_trailing_whitespace(&mut buffer[range.clone()], paragraph_level);
    }
    for range in &lines {
        reverse_contiguous_levels(&mut buffer[range.clone()]);
    }
    mirror(buffer);
}

fn line_ranges(buffer: &[RichChar]) -> Vec<Range<usize>> {
    if buffer.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    for (i, rc) in buffer.iter().enumerate() {
        if rc.orig_type == BidiClass::B {
            ranges.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < buffer.len() {
        ranges.push(start..buffer.len());
    }
    ranges
}

/// L1: reset the level of segment/paragraph separators, and any run of
/// boundary-neutral/whitespace characters preceding one or trailing the
/// line, to the paragraph level.
fn reset_separators_and_trailing_whitespace(line: &mut [RichChar], paragraph_level: u8) {
    let mut should_reset = true;
    for rc in line.iter_mut().rev() {
        match rc.orig_type {
            BidiClass::B | BidiClass::S => {
                rc.level = paragraph_level;
                should_reset = true;
            }
            BidiClass::BN | BidiClass::WS if should_reset => {
                rc.level = paragraph_level;
            }
            _ => should_reset = false,
        }
    }
}

/// L2: from the highest level down to the lowest odd level, reverse every
/// maximal contiguous sub-slice whose levels are at or above that level.
fn reverse_contiguous_levels(line: &mut [RichChar]) {
    let Some(highest) = line.iter().map(|rc| rc.level).max() else {
        return;
    };
    let Some(lowest_odd) = line.iter().map(|rc| rc.level).filter(|l| l % 2 == 1).min() else {
        return;
    };

    for level in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < line.len() {
            if line[i].level >= level {
                let mut j = i + 1;
                while j < line.len() && line[j].level >= level {
                    j += 1;
                }
                line[i..j].reverse();
                i = j;
            } else {
                i += 1;
            }
        }
    }
}

/// L4: substitute the mirror partner for any character at an odd (RTL)
/// final level that has the `Bidi_Mirrored` property.
fn mirror(buffer: &mut [RichChar]) {
    for rc in buffer.iter_mut() {
        if rc.level % 2 == 1 {
            if let Some(m) = mirror_of(rc.scalar) {
                rc.scalar = m;
            }
        }
    }
}
