//! Byte-string convenience (spec §6 collaborator): decode bytes under a
//! named encoding, run the core reorderer, re-encode the result.

use crate::bidi::{reorder_line, ParagraphDirection};
use crate::error::{Error, Result};

/// Decode `bytes` as `encoding_name`, reorder into visual order, and
/// re-encode under the same encoding.
///
/// Fails with [`Error::UnknownEncoding`] for an unrecognized encoding label,
/// or [`Error::Decode`] if `bytes` contains sequences that are not valid
/// under that encoding — no partial output is returned in either case
/// (spec §7).
pub fn get_display_bytes(
    bytes: &[u8],
    encoding_name: &str,
    base_dir: Option<ParagraphDirection>,
    debug: bool,
) -> Result<Vec<u8>> {
    let encoding = encoding_rs::Encoding::for_label(encoding_name.as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(encoding_name.to_string()))?;

    let (decoded, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(Error::Decode {
            encoding: encoding_name.to_string(),
        });
    }

    let display = reorder_line(&decoded, base_dir, debug);

    let (encoded, _, _) = encoding.encode(&display);
    Ok(encoded.into_owned())
}
