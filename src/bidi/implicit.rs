//! Implicit-Level Resolver: rules I1-I2 (spec §4.7).

use super::oracle::BidiClass;
use super::rc::RichChar;

/// Bump each character's level per I1 (even embedding direction) or I2 (odd).
///
/// Precondition: every remaining `bidi_type` is one of `{L, R, EN, AN}`.
pub fn resolve(buffer: &mut [RichChar]) {
    for rc in buffer.iter_mut() {
        debug_assert!(
            matches!(
                rc.bidi_type,
                BidiClass::L | BidiClass::R | BidiClass::EN | BidiClass::AN
            ),
            "implicit resolution requires W/N passes to have already run"
        );

        if rc.level % 2 == 0 {
            // I1
            match rc.bidi_type {
                BidiClass::R => rc.level += 1,
                BidiClass::EN | BidiClass::AN => rc.level += 2,
                _ => {}
            }
        } else {
            // I2
            match rc.bidi_type {
                BidiClass::L | BidiClass::EN | BidiClass::AN => rc.level += 1,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rc(class: BidiClass, level: u8) -> RichChar {
        RichChar {
            scalar: 'x',
            orig_type: class,
            bidi_type: class,
            level,
        }
    }

    #[test]
    fn i1_even_level_r_goes_up_one() {
        let mut buf = vec![rc(BidiClass::R, 0)];
        resolve(&mut buf);
        assert_eq!(buf[0].level, 1);
    }

    #[test]
    fn i1_even_level_en_goes_up_two() {
        let mut buf = vec![rc(BidiClass::EN, 0)];
        resolve(&mut buf);
        assert_eq!(buf[0].level, 2);
    }

    #[test]
    fn i1_even_level_l_unchanged() {
        let mut buf = vec![rc(BidiClass::L, 0)];
        resolve(&mut buf);
        assert_eq!(buf[0].level, 0);
    }

    #[test]
    fn i2_odd_level_l_goes_up_one() {
        let mut buf = vec![rc(BidiClass::L, 1)];
        resolve(&mut buf);
        assert_eq!(buf[0].level, 2);
    }

    #[test]
    fn i2_odd_level_r_unchanged() {
        let mut buf = vec![rc(BidiClass::R, 1)];
        resolve(&mut buf);
        assert_eq!(buf[0].level, 1);
    }

    #[test]
    fn i2_odd_level_an_goes_up_one() {
        let mut buf = vec![rc(BidiClass::AN, 1)];
        resolve(&mut buf);
        assert_eq!(buf[0].level, 2);
    }
}
