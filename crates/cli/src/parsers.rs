use lexstat_engine::options::PosTag;
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a non-negative `usize` from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number.
pub fn parse_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, None)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse one part-of-speech tag (case-insensitive).
///
/// # Errors
/// Returns an error naming the accepted tags when `s` is not one of them.
pub fn parse_pos_tag(s: &str) -> Result<PosTag, String> {
    s.parse::<PosTag>().map_err(|_| {
        let known: Vec<_> = PosTag::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown POS tag '{s}' (expected one of: {})", known.join(", "))
    })
}
