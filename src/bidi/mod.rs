//! Unicode Bidirectional Algorithm (UAX #9) core.
//!
//! Seven-plus-one pass pipeline over a buffer of [`rc::RichChar`]s: the
//! [`oracle`] classifies each scalar value, [`paragraph`] and [`explicit`]
//! resolve the paragraph and embedding levels (P2/P3, X1-X9), [`runs`]
//! partitions the result into level runs (X10), [`weak`]/[`neutral`]/
//! [`implicit`] resolve types and bump levels (W1-W7, N1-N2, I1-I2), and
//! [`reorder`] produces the final visual order and mirrored glyphs
//! (L1, L2, L4). [`api`] wires the pipeline together for callers.

pub mod api;
pub mod explicit;
pub mod implicit;
pub mod neutral;
pub mod oracle;
pub mod paragraph;
pub mod rc;
pub mod reorder;
pub mod runs;
pub mod weak;

pub use api::{reorder_line, reorder_line_upper_as_rtl, resolve, ResolvedText};
pub use oracle::{bidi_class, bidi_class_debug_upper_as_r, is_mirrored, mirror_of, BidiClass};
pub use paragraph::ParagraphDirection;
pub use rc::RichChar;
pub use runs::LevelRun;
