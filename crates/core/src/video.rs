//! Upload parameter validation and filename derivation for raw video assets.
//!
//! The portal accepts uncompressed planar video only: bare `.yuv` streams
//! and `.y4m` (YUV4MPEG2) containers. Validation failures carry the exact
//! client-facing message, so handlers surface them verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Format name: bare planar YUV stream (no container header).
pub const FORMAT_YUV: &str = "yuv";

/// Format name: YUV4MPEG2 container.
pub const FORMAT_Y4M: &str = "y4m";

/// All accepted upload formats.
pub const ALL_FORMATS: &[&str] = &[FORMAT_YUV, FORMAT_Y4M];

/// All accepted sample bit depths.
pub const VALID_BIT_DEPTHS: &[i64] = &[8, 10];

/// Resolution strings must fully match `<digits>x<digits>` -- ASCII digits,
/// ASCII `x`, nothing else.
static RESOLUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+x[0-9]+$").expect("valid regex"));

/// Validate that the bit depth is one of the accepted values.
pub fn validate_bit_depth(bit_depth: i64) -> Result<(), CoreError> {
    if VALID_BIT_DEPTHS.contains(&bit_depth) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "BitDepth must be either 8 or 10".to_string(),
        ))
    }
}

/// Validate that the format is one of the accepted format names.
pub fn validate_format(format: &str) -> Result<(), CoreError> {
    if ALL_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Accepted formats are: {}",
            ALL_FORMATS.join(", ")
        )))
    }
}

/// Validate that the resolution string is `<width>x<height>`.
pub fn validate_resolution(resolution: &str) -> Result<(), CoreError> {
    if RESOLUTION_RE.is_match(resolution) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Resolution must follow the format widthxheight (Example 1920x1080)".to_string(),
        ))
    }
}

/// Content type served when downloading an asset of the given format.
///
/// Unknown formats fall back to a generic byte stream; rows can only hold
/// validated formats, so the fallback is never expected to serve.
pub fn content_type_for_format(format: &str) -> &'static str {
    match format {
        FORMAT_Y4M => "video/x-yuv4mpeg",
        _ => "application/octet-stream",
    }
}

/// On-disk filename for a stored asset: `{title}_{id}.{format}`.
///
/// The id is embedded so two uploads sharing a title never collide.
pub fn stored_filename(title: &str, id: &str, format: &str) -> String {
    format!("{title}_{id}.{format}")
}

/// Client-facing filename offered on download: `{title}.{format}`.
pub fn download_filename(title: &str, format: &str) -> String {
    format!("{title}.{format}")
}
