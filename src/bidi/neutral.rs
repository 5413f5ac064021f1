//! Neutral-Type Resolver: rules N1-N2 (spec §4.6).

use super::oracle::BidiClass;
use super::rc::RichChar;
use super::runs::LevelRun;

fn boundary_type(buffer: &[RichChar], run: LevelRun, index: isize) -> BidiClass {
    if index < run.start as isize {
        run.sor
    } else if index >= run.end as isize {
        run.eor
    } else {
        buffer[index as usize].bidi_type
    }
}

/// EN and AN act as R for the purposes of N1's "surrounding strong text"
/// check.
fn as_strong(class: BidiClass) -> BidiClass {
    if matches!(class, BidiClass::EN | BidiClass::AN) {
        BidiClass::R
    } else {
        class
    }
}

/// Resolve N1-N2 over every run.
pub fn resolve(buffer: &mut [RichChar], runs: &[LevelRun]) {
    for &run in runs {
        let mut i = run.start;
        while i < run.end {
            if !buffer[i].bidi_type.is_neutral_or_separator() {
                i += 1;
                continue;
            }

            let span_start = i;
            let mut span_end = i + 1;
            while span_end < run.end && buffer[span_end].bidi_type.is_neutral_or_separator() {
                span_end += 1;
            }

            let prev = as_strong(boundary_type(buffer, run, span_start as isize - 1));
            let next = as_strong(boundary_type(buffer, run, span_end as isize));

            if prev == next {
                // N1
                for rc in &mut buffer[span_start..span_end] {
                    rc.bidi_type = prev;
                }
            } else {
                // N2: embedding direction, per character's own level.
                for rc in &mut buffer[span_start..span_end] {
                    rc.bidi_type = rc.embedding_direction();
                }
            }

            i = span_end;
        }
    }
}
