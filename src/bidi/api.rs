//! Core entry point (spec §6): ties all seven/eight passes together.

use super::explicit;
use super::implicit;
use super::neutral;
use super::oracle::{self, BidiClass};
use super::paragraph::{self, ParagraphDirection};
use super::rc::RichChar;
use super::reorder;
use super::runs;
use super::weak;

/// The fully-resolved buffer: every character's final type and level, plus
/// the paragraph embedding level that produced them.
#[derive(Clone, Debug)]
pub struct ResolvedText {
    pub chars: Vec<RichChar>,
    pub paragraph_level: u8,
}

impl ResolvedText {
    /// Collect the final scalar values (already mirrored and reordered) into
    /// a `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.chars.into_iter().map(|rc| rc.scalar).collect()
    }
}

/// Reorder `text` from logical order into visual order.
///
/// `base_dir` overrides P2/P3's computed paragraph level when given. When
/// `debug` is true, intermediate per-character types and levels are written
/// to stderr (spec §6; format unspecified, for human inspection only).
#[must_use]
pub fn reorder_line(text: &str, base_dir: Option<ParagraphDirection>, debug: bool) -> String {
    reorder_with_classifier(text, base_dir, debug, oracle::bidi_class)
}

/// As [`reorder_line`], but classifying ASCII uppercase letters as strong
/// `R` (spec §4.1, §8) — used to exercise the literal conformance scenarios
/// from the specification, which are written against that convention.
#[must_use]
pub fn reorder_line_upper_as_rtl(
    text: &str,
    base_dir: Option<ParagraphDirection>,
    debug: bool,
) -> String {
    reorder_with_classifier(text, base_dir, debug, oracle::bidi_class_debug_upper_as_r)
}

/// Resolve `text`'s bidi types and levels without flattening back to a
/// `String`, for callers that need the intermediate structure (e.g. the CLI
/// `--debug` trace, or tests asserting on levels directly).
#[must_use]
pub fn resolve(text: &str, base_dir: Option<ParagraphDirection>) -> ResolvedText {
    resolve_with_classifier(text, base_dir, oracle::bidi_class)
}

fn reorder_with_classifier(
    text: &str,
    base_dir: Option<ParagraphDirection>,
    debug: bool,
    classify: impl Fn(char) -> BidiClass,
) -> String {
    let resolved = resolve_with_classifier(text, base_dir, classify);
    if debug {
        trace(&resolved);
    }
    resolved.into_string()
}

fn resolve_with_classifier(
    text: &str,
    base_dir: Option<ParagraphDirection>,
    classify: impl Fn(char) -> BidiClass,
) -> ResolvedText {
    let mut buffer: Vec<RichChar> = text
        .chars()
        .map(|ch| RichChar::new(ch, classify(ch)))
        .collect();

    let paragraph_level = match base_dir {
        Some(dir) => dir.level(),
        None => paragraph::resolve_level_from_classes(buffer.iter().map(|rc| rc.orig_type)),
    };

    // X1-X9
    explicit::process(&mut buffer, paragraph_level);
    // X10
    let runs = runs::partition(&buffer, paragraph_level);
    // W1-W7
    weak::resolve(&mut buffer, &runs);
    // N1-N2
    neutral::resolve(&mut buffer, &runs);
    // I1-I2
    implicit::resolve(&mut buffer);
    // L1, L2, L4
    reorder::apply(&mut buffer, paragraph_level);

    ResolvedText {
        chars: buffer,
        paragraph_level,
    }
}

/// Write a human-readable per-character trace to stderr (spec §6, §4.1 debug
/// mode). Format is deliberately unspecified beyond being readable; it never
/// affects the returned result.
fn trace(resolved: &ResolvedText) {
    eprintln!("paragraph_level = {}", resolved.paragraph_level);
    for (i, rc) in resolved.chars.iter().enumerate() {
        eprintln!(
            "  [{i:>3}] {:?}  orig={:?}  type={:?}  level={}",
            rc.scalar, rc.orig_type, rc.bidi_type, rc.level
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ltr_passthrough() {
        assert_eq!(reorder_line("Hello, world!", None, false), "Hello, world!");
    }

    #[test]
    fn strictly_rtl_reverses() {
        assert_eq!(reorder_line("\u{05E9}\u{05DC}\u{05D5}\u{05DD}", None, false), "\u{05DD}\u{05D5}\u{05DC}\u{05E9}");
    }

    #[test]
    fn forced_ltr_base_dir_on_neutrals_is_identity() {
        assert_eq!(
            reorder_line("123 !?", Some(ParagraphDirection::Ltr), false),
            "123 !?"
        );
    }

    #[test]
    fn forced_rtl_base_dir_on_neutrals_reverses() {
        assert_eq!(
            reorder_line("abc", Some(ParagraphDirection::Rtl), false),
            "cba"
        );
    }

    #[test]
    fn determinism() {
        let text = "car is \u{05D0}\u{05D1}\u{05D2} in hebrew";
        assert_eq!(reorder_line(text, None, false), reorder_line(text, None, false));
    }

    #[test]
    fn length_preservation_up_to_x9() {
        let text = "a\u{202E}b\u{202C}c";
        let resolved = resolve(text, None);
        assert_eq!(resolved.chars.len(), text.chars().count() - 2);
    }

    #[test]
    fn scenario_car_is_the_car_in_arabic() {
        assert_eq!(
            reorder_line_upper_as_rtl("car is THE CAR in arabic", None, false),
            "car is RAC EHT in arabic"
        );
    }

    #[test]
    fn scenario_car_is_the_car_in_english() {
        assert_eq!(
            reorder_line_upper_as_rtl("CAR IS the car IN ENGLISH", None, false),
            "HSILGNE NI the car SI RAC"
        );
    }

    #[test]
    fn scenario_he_said_quote() {
        assert_eq!(
            reorder_line_upper_as_rtl(r#"he said "IT IS 123, 456, OK""#, None, false),
            r#"he said "KO ,456 ,123 SI TI""#
        );
    }

    #[test]
    fn scenario_html_like_tag() {
        assert_eq!(
            reorder_line_upper_as_rtl("<H123>shalom</H123>", None, false),
            "<123H/>shalom<123H>"
        );
    }

    #[test]
    fn scenario_celsius() {
        assert_eq!(
            reorder_line_upper_as_rtl("-2 CELSIUS IS COLD", None, false),
            "DLOC SI SUISLEC 2-"
        );
    }

    #[test]
    fn scenario_solve_arithmetic() {
        assert_eq!(
            reorder_line_upper_as_rtl("SOLVE 1*5 1-5 1/5 1+5", None, false),
            "1+5 1/5 1-5 5*1 EVLOS"
        );
    }

    #[test]
    fn scenario_supplementary_plane_digit() {
        let text = "HELLO \u{1D7F6}12";
        let resolved_levels_len = resolve(text, None).chars.len();
        assert_eq!(resolved_levels_len, 9);
        assert_eq!(
            reorder_line_upper_as_rtl(text, None, false),
            "\u{1D7F6}12 OLLEH"
        );
    }

    #[test]
    fn scenario_forced_ltr_colon_stays_at_end() {
        assert_eq!(
            reorder_line_upper_as_rtl("SHALOM:", Some(ParagraphDirection::Ltr), false),
            "MOLAHS:"
        );
    }
}
