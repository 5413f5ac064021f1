//! Weak-Type Resolver: rules W1-W7 (spec §4.5).

use super::oracle::BidiClass;
use super::rc::RichChar;
use super::runs::LevelRun;

/// Resolve W1-W7 over every run independently. Each run's `sor`/`eor` act as
/// virtual strong-type carriers at its boundaries.
pub fn resolve(buffer: &mut [RichChar], runs: &[LevelRun]) {
    for &run in runs {
        w1_w2_w3(buffer, run);
        w4(buffer, run);
        w5(buffer, run);
        w6(buffer, run);
        w7(buffer, run);
    }
}

fn w1_w2_w3(buffer: &mut [RichChar], run: LevelRun) {
    let mut prev_type = run.sor;
    let mut prev_strong = run.sor;

    for i in run.start..run.end {
        let mut bt = buffer[i].bidi_type;

        // W1: NSM takes the type of the previous character (sor at run start).
        if bt == BidiClass::NSM {
            bt = prev_type;
        }

        // W2: EN becomes AN if the nearest preceding strong type is AL.
        if bt == BidiClass::EN && prev_strong == BidiClass::AL {
            bt = BidiClass::AN;
        }

        buffer[i].bidi_type = bt;

        if matches!(bt, BidiClass::R | BidiClass::L | BidiClass::AL) {
            prev_strong = bt;
        }
        prev_type = bt;
    }

    // W3: AL becomes R.
    for i in run.start..run.end {
        if buffer[i].bidi_type == BidiClass::AL {
            buffer[i].bidi_type = BidiClass::R;
        }
    }
}

fn neighbor_type(buffer: &[RichChar], run: LevelRun, i: usize, offset: isize) -> BidiClass {
    let j = i as isize + offset;
    if j < run.start as isize {
        run.sor
    } else if j >= run.end as isize {
        run.eor
    } else {
        buffer[j as usize].bidi_type
    }
}

fn w4(buffer: &mut [RichChar], run: LevelRun) {
    for i in run.start..run.end {
        let bt = buffer[i].bidi_type;
        let prev = neighbor_type(buffer, run, i, -1);
        let next = neighbor_type(buffer, run, i, 1);

        if bt == BidiClass::ES && prev == BidiClass::EN && next == BidiClass::EN {
            buffer[i].bidi_type = BidiClass::EN;
        } else if bt == BidiClass::CS
            && prev == next
            && matches!(prev, BidiClass::EN | BidiClass::AN)
        {
            buffer[i].bidi_type = prev;
        }
    }
}

fn w5(buffer: &mut [RichChar], run: LevelRun) {
    for i in run.start..run.end {
        if buffer[i].bidi_type != BidiClass::EN {
            continue;
        }

        let mut j = i;
        while j > run.start && buffer[j - 1].bidi_type == BidiClass::ET {
            j -= 1;
            buffer[j].bidi_type = BidiClass::EN;
        }

        let mut k = i;
        while k + 1 < run.end && buffer[k + 1].bidi_type == BidiClass::ET {
            k += 1;
            buffer[k].bidi_type = BidiClass::EN;
        }
    }
}

fn w6(buffer: &mut [RichChar], run: LevelRun) {
    for i in run.start..run.end {
        if matches!(
            buffer[i].bidi_type,
            BidiClass::ES | BidiClass::ET | BidiClass::CS
        ) {
            buffer[i].bidi_type = BidiClass::ON;
        }
    }
}

fn w7(buffer: &mut [RichChar], run: LevelRun) {
    let mut prev_strong = run.sor;
    for i in run.start..run.end {
        let bt = buffer[i].bidi_type;
        if bt == BidiClass::EN && prev_strong == BidiClass::L {
            buffer[i].bidi_type = BidiClass::L;
        } else if matches!(bt, BidiClass::L | BidiClass::R) {
            prev_strong = bt;
        }
    }
}
