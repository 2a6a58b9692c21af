use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(result) => Ok(result),
        Err(source) => Err(InternalError::ParseStringId { value, source }.into()),
    }
}

/// Parses a comma separated list of Discord ids, ignoring blank entries.
///
/// # Returns
/// - `Ok(Vec<u64>)` - Every non-blank entry parsed
/// - `Err(String)` - The first entry that is not a valid id
pub fn parse_id_list(value: &str) -> Result<Vec<u64>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse::<u64>().map_err(|_| entry.to_string()))
        .collect()
}
