//! Host id list parsing.

use crate::errors::CoreError;

/// Parse a comma-separated host id list such as `"1, 2,3"`.
///
/// Whitespace around ids and empty segments (`"1,,2,"`) are ignored; order
/// and duplicates are preserved.
///
/// # Errors
///
/// Returns [`CoreError::InvalidHostId`] for a segment that is not a positive
/// integer and [`CoreError::EmptyHostIdList`] when no id remains.
pub fn parse_host_ids(input: &str) -> Result<Vec<u64>, CoreError> {
    let ids = input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.parse::<u64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(CoreError::InvalidHostId {
                value: segment.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.is_empty() {
        return Err(CoreError::EmptyHostIdList);
    }
    Ok(ids)
}
