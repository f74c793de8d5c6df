//! Field validators shared by the interactive prompt and the batch loader.

use crate::error::{CardError, CardResult};

/// Maximum characters in a card code.
pub const MAX_CODE_LEN: usize = 10;

/// Maximum characters in a city name.
pub const MAX_NAME_LEN: usize = 49;

/// Trim and upper-case a state code, which must be exactly two ASCII letters.
///
/// # Errors
///
/// Returns [`CardError::InvalidStateCode`] for anything else.
pub fn normalize_state_code(input: &str) -> CardResult<String> {
    let trimmed = input.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(CardError::InvalidStateCode(trimmed.to_string()))
    }
}

/// Trim a card code and check it is a single non-empty word.
///
/// # Errors
///
/// Returns an error if the code is empty, contains whitespace, or is too long.
pub fn check_card_code(input: &str) -> CardResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CardError::EmptyCode);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(CardError::CodeHasWhitespace);
    }
    let len = trimmed.chars().count();
    if len > MAX_CODE_LEN {
        return Err(CardError::CodeTooLong(len));
    }
    Ok(trimmed.to_string())
}

/// Trim a city name and check its length.
///
/// # Errors
///
/// Returns an error if the name is empty or too long.
pub fn check_city_name(input: &str) -> CardResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CardError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CardError::NameTooLong(len));
    }
    Ok(trimmed.to_string())
}

/// Parse a non-negative integer count.
///
/// # Errors
///
/// Returns an error if the text is not an integer, is negative, or exceeds `u32`.
pub fn parse_count(field: &'static str, input: &str) -> CardResult<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| CardError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;
    if value < 0 {
        return Err(CardError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_| CardError::CountTooLarge { field, value })
}

/// Parse a finite decimal amount.
///
/// # Errors
///
/// Returns [`CardError::NotANumber`] if the text is not a finite number.
pub fn parse_amount(field: &'static str, input: &str) -> CardResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CardError::NotANumber {
            field,
            input: trimmed.to_string(),
        }),
    }
}

/// Check that an area is finite and positive.
///
/// # Errors
///
/// Returns [`CardError::InvalidArea`] otherwise.
pub fn check_area(area: f64) -> CardResult<f64> {
    if area.is_finite() && area > 0.0 {
        Ok(area)
    } else {
        Err(CardError::InvalidArea(area))
    }
}

/// Check that a GDP is finite and not negative.
///
/// # Errors
///
/// Returns [`CardError::InvalidGdp`] otherwise.
pub fn check_gdp(gdp: f64) -> CardResult<f64> {
    if gdp.is_finite() && gdp >= 0.0 {
        Ok(gdp)
    } else {
        Err(CardError::InvalidGdp(gdp))
    }
}
