//! Numeric validation functions

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

pub const AGE_RANGE_MESSAGE: &str = "Age must be between 1 and 120";

/// Validates value is within range
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
) -> Result<(), String> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {}", min, max))
    }
}

/// Parses the leading integer of `s`, skipping leading whitespace and
/// accepting an optional sign. Trailing garbage is ignored, so `"25y"`
/// parses as 25 while `"y25"` does not parse at all.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    // Absurdly long digit runs saturate instead of failing; they are
    // out of any sane range anyway.
    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Age validator: empty is accepted, anything else must parse to an
/// integer in `[MIN_AGE, MAX_AGE]`.
pub fn validate_age(age: &str) -> Result<(), String> {
    if age.is_empty() {
        return Ok(());
    }

    match parse_leading_int(age) {
        Some(n) if validate_range(n, MIN_AGE, MAX_AGE).is_ok() => Ok(()),
        _ => Err(AGE_RANGE_MESSAGE.to_string()),
    }
}
