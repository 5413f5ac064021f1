//! Explicit-Levels Engine: rules X1-X9 (spec §4.3).

use super::oracle::BidiClass;
use super::paragraph::resolve_level_from_classes;
use super::rc::RichChar;

/// Maximum explicit embedding depth (UBA >= 6.3). Older revisions use 61;
/// see spec §9.
pub const MAX_DEPTH: u8 = 125;

/// An override forced by an enclosing RLO/LRO, or none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Override {
    Neutral,
    L,
    R,
}

/// Directional status stack entry (spec §3 "DSE").
#[derive(Clone, Copy, Debug)]
struct Dse {
    level: u8,
    override_: Override,
    is_isolate: bool,
}

/// Run X1-X8 over `buffer` in place, then X9 (remove the format/BN
/// characters). `buffer` must already carry each character's `orig_type`
/// (and `bidi_type` initialized equal to it).
pub fn process(buffer: &mut Vec<RichChar>, paragraph_level: u8) {
    run_x1_to_x8(buffer, paragraph_level);
    remove_x9(buffer);
}

fn run_x1_to_x8(buffer: &mut [RichChar], paragraph_level: u8) {
    const STACK_CAP: usize = MAX_DEPTH as usize + 2;

    let mut stack: Vec<Dse> = Vec::with_capacity(STACK_CAP);
    stack.push(Dse {
        level: paragraph_level,
        override_: Override::Neutral,
        is_isolate: false,
    });

    let mut overflow_isolate: u32 = 0;
    let mut overflow_embedding: u32 = 0;
    let mut valid_isolate: u32 = 0;

    let len = buffer.len();
    for i in 0..len {
        let class = buffer[i].orig_type;
        let top = *stack.last().expect("stack always has the initial entry");

        match class {
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO => {
                let new_level = if matches!(class, BidiClass::RLE | BidiClass::RLO) {
                    least_greater_odd(top.level)
                } else {
                    least_greater_even(top.level)
                };

                if new_level <= MAX_DEPTH && overflow_isolate == 0 && overflow_embedding == 0 {
                    let override_ = match class {
                        BidiClass::RLO => Override::R,
                        BidiClass::LRO => Override::L,
                        _ => Override::Neutral,
                    };
                    if stack.len() < STACK_CAP {
                        stack.push(Dse {
                            level: new_level,
                            override_,
                            is_isolate: false,
                        });
                    }
                } else if overflow_isolate == 0 {
                    overflow_embedding += 1;
                }
            }

            BidiClass::RLI | BidiClass::LRI | BidiClass::FSI => {
                let effective_class = if class == BidiClass::FSI {
                    fsi_direction(buffer, i)
                } else {
                    class
                };

                buffer[i].level = top.level;
                if top.override_ != Override::Neutral {
                    buffer[i].bidi_type = match top.override_ {
                        Override::L => BidiClass::L,
                        Override::R => BidiClass::R,
                        Override::Neutral => buffer[i].bidi_type,
                    };
                }

                let new_level = if effective_class == BidiClass::RLI {
                    least_greater_odd(top.level)
                } else {
                    least_greater_even(top.level)
                };

                if new_level <= MAX_DEPTH && overflow_isolate == 0 && overflow_embedding == 0 {
                    valid_isolate += 1;
                    if stack.len() < STACK_CAP {
                        stack.push(Dse {
                            level: new_level,
                            override_: Override::Neutral,
                            is_isolate: true,
                        });
                    }
                } else {
                    overflow_isolate += 1;
                }
            }

            BidiClass::PDI => {
                if overflow_isolate > 0 {
                    overflow_isolate -= 1;
                } else if valid_isolate != 0 {
                    overflow_embedding = 0;
                    while let Some(entry) = stack.last() {
                        if entry.is_isolate {
                            break;
                        }
                        stack.pop();
                    }
                    stack.pop();
                    valid_isolate -= 1;
                }

                let top = *stack.last().expect("stack always has the initial entry");
                buffer[i].level = top.level;
                if top.override_ != Override::Neutral {
                    buffer[i].bidi_type = match top.override_ {
                        Override::L => BidiClass::L,
                        Override::R => BidiClass::R,
                        Override::Neutral => buffer[i].bidi_type,
                    };
                }
            }

            BidiClass::PDF => {
                if overflow_isolate > 0 {
                    // ignore
                } else if overflow_embedding > 0 {
                    overflow_embedding -= 1;
                } else if !top.is_isolate && stack.len() >= 2 {
                    stack.pop();
                }
            }

            BidiClass::B => {
                // X8: a paragraph separator terminates all open explicit
                // state. It always takes the paragraph level (L1 restates
                // this per-line, but runs are partitioned before L1 runs,
                // so this needs to already be correct here), and the stack,
                // overflow counters, and valid isolate count all reset, so
                // an embedding/override/isolate opened before this `B`
                // cannot leak into the content that follows it.
                buffer[i].level = paragraph_level;
                stack.truncate(1);
                stack[0] = Dse {
                    level: paragraph_level,
                    override_: Override::Neutral,
                    is_isolate: false,
                };
                overflow_isolate = 0;
                overflow_embedding = 0;
                valid_isolate = 0;
            }

            BidiClass::BN => {
                // X6 default assignment does not run for BN; it is removed
                // by X9 regardless of what level it ends up with.
            }

            _ => {
                // X6: default assignment for any other class.
                buffer[i].level = top.level;
                if top.override_ != Override::Neutral {
                    buffer[i].bidi_type = match top.override_ {
                        Override::L => BidiClass::L,
                        Override::R => BidiClass::R,
                        Override::Neutral => buffer[i].bidi_type,
                    };
                }
            }
        }
    }
}

/// X5c: resolve an FSI as if it were RLI or LRI, based on a P2/P3 sub-scan
/// over the slice from just after `fsi_index` to its matching PDI (or end of
/// buffer).
fn fsi_direction(buffer: &[RichChar], fsi_index: usize) -> BidiClass {
    let mut depth: u32 = 0;
    let mut end = buffer.len();
    for (offset, rc) in buffer[fsi_index + 1..].iter().enumerate() {
        match rc.orig_type {
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => depth += 1,
            BidiClass::PDI => {
                if depth == 0 {
                    end = fsi_index + 1 + offset;
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    let slice_classes = buffer[fsi_index + 1..end].iter().map(|rc| rc.orig_type);
    if resolve_level_from_classes(slice_classes) == 1 {
        BidiClass::RLI
    } else {
        BidiClass::LRI
    }
}

fn least_greater_odd(level: u8) -> u8 {
    (level + 1) | 1
}

fn least_greater_even(level: u8) -> u8 {
    (level + 2) & !1
}

/// X9: remove every character whose original class is one of the explicit
/// formatting/boundary-neutral classes.
fn remove_x9(buffer: &mut Vec<RichChar>) {
    buffer.retain(|rc| !rc.orig_type.is_removed_by_x9());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::oracle::bidi_class;

    fn build(text: &str) -> Vec<RichChar> {
        text.chars()
            .map(|ch| RichChar::new(ch, bidi_class(ch)))
            .collect()
    }

    #[test]
    fn plain_text_gets_paragraph_level() {
        let mut buf = build("abc");
        process(&mut buf, 0);
        assert!(buf.iter().all(|rc| rc.level == 0));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn rlo_overrides_to_r_and_is_removed() {
        let mut buf = build("a\u{202E}bc\u{202C}d");
        process(&mut buf, 0);
        // RLO and PDF are removed by X9; remaining: a, b, c, d
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[0].scalar, 'a');
        assert_eq!(buf[0].level, 0);
        assert_eq!(buf[1].scalar, 'b');
        assert_eq!(buf[1].level, 1);
        assert_eq!(buf[1].bidi_type, BidiClass::R);
        assert_eq!(buf[3].scalar, 'd');
        assert_eq!(buf[3].level, 0);
    }

    #[test]
    fn rli_isolate_restores_level_after_pdi() {
        let mut buf = build("a\u{2067}b\u{2069}c");
        process(&mut buf, 0);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf[0].level, 0); // a
        assert_eq!(buf[1].level, 0); // RLI itself takes the *prior* level
        assert_eq!(buf[2].level, 1); // b, inside the isolate
        assert_eq!(buf[3].level, 0); // PDI restores outer level
        assert_eq!(buf[4].level, 0); // c
    }

    #[test]
    fn overflow_embedding_is_absorbed_without_panicking() {
        let mut text = String::new();
        for _ in 0..200 {
            text.push('\u{202B}'); // RLE
        }
        text.push('x');
        let mut buf = build(&text);
        process(&mut buf, 0);
        // Should not panic; x survives X9 (RLE does not).
        assert_eq!(buf.len(), 1);
        assert_eq!(buf[0].scalar, 'x');
    }

    #[test]
    fn unmatched_pdi_is_ignored() {
        let mut buf = build("a\u{2069}b");
        process(&mut buf, 0);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[1].level, 0);
    }

    #[test]
    fn fsi_with_rtl_content_behaves_like_rli() {
        let mut buf = build("\u{2068}\u{05D0}\u{2069}");
        process(&mut buf, 0);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[1].level, 1);
    }

    #[test]
    fn x8_paragraph_separator_resets_explicit_state() {
        // An RLE with no matching PDF, followed by a B: the embedding must
        // not leak into the content after the separator.
        let mut buf = build("\u{202B}\n1 2");
        process(&mut buf, 0);
        // RLE is removed by X9; remaining: B, '1', ' ', '2'.
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[0].scalar, '\n');
        assert_eq!(buf[0].level, 0);
        assert_eq!(buf[1].scalar, '1');
        assert_eq!(buf[1].level, 0);
        assert_eq!(buf[2].scalar, ' ');
        assert_eq!(buf[2].level, 0);
        assert_eq!(buf[3].scalar, '2');
        assert_eq!(buf[3].level, 0);
    }
}
