//! File reading and permissive attribute conversion helpers.

use crate::error::{Error, Result};
use camino::Utf8Path;

/// Read a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &Utf8Path) -> Result<String> {
    let contents = std::fs::read_to_string(path.as_std_path()).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match contents.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => contents,
    })
}

/// Parse a build number from registry text or a `pre` attribute.
pub fn parse_build_number(value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidBuildNumber {
            value: value.to_string(),
        })
}

/// `true`/`false` in any letter case; anything else, including absence, is `false`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Numbers default to `0` when the attribute is absent or empty.
///
/// Returns the offending text when a present value is not an integer.
pub fn parse_count(value: Option<&str>) -> std::result::Result<u32, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(0),
        Some(v) => v.parse().map_err(|_| v.to_string()),
    }
}
