//! uax9 - Unicode Bidirectional Algorithm (UAX #9)
//!
//! Resolves the display order of mixed left-to-right and right-to-left
//! text: paragraph direction detection, explicit embedding/override/isolate
//! processing, weak- and neutral-type resolution, implicit level
//! assignment, and the final visual reordering with mirroring.

#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

pub mod bidi;
pub mod encoding;
pub mod error;

pub use bidi::{
    bidi_class, reorder_line, reorder_line_upper_as_rtl, resolve, BidiClass, LevelRun,
    ParagraphDirection, ResolvedText, RichChar,
};
pub use encoding::get_display_bytes;
pub use error::{Error, Result};
