//! Error types for card validation.

use std::fmt;

/// Reasons a raw card record is rejected before it can enter a matchup.
#[derive(Debug, Clone, PartialEq)]
pub enum CardError {
    /// State code is not exactly two ASCII letters.
    InvalidStateCode(String),
    /// Card code is empty after trimming.
    EmptyCode,
    /// Card code is longer than the allowed length.
    CodeTooLong(usize),
    /// Card code contains whitespace.
    CodeHasWhitespace,
    /// City name is empty after trimming.
    EmptyName,
    /// City name is longer than the allowed length.
    NameTooLong(usize),
    /// Text could not be parsed as a number.
    NotANumber {
        /// Field being parsed.
        field: &'static str,
        /// The rejected input.
        input: String,
    },
    /// A count field was given a negative value.
    NegativeCount {
        /// Field being parsed.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A count field does not fit in 32 bits.
    CountTooLarge {
        /// Field being parsed.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// Area is zero, negative, or not finite.
    InvalidArea(f64),
    /// GDP is negative or not finite.
    InvalidGdp(f64),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStateCode(code) => {
                write!(f, "state code must be exactly 2 letters, got {code:?}")
            }
            Self::EmptyCode => write!(f, "card code must not be empty"),
            Self::CodeTooLong(len) => {
                write!(f, "card code has {len} characters (maximum 10)")
            }
            Self::CodeHasWhitespace => write!(f, "card code must not contain spaces"),
            Self::EmptyName => write!(f, "city name must not be empty"),
            Self::NameTooLong(len) => {
                write!(f, "city name has {len} characters (maximum 49)")
            }
            Self::NotANumber { field, input } => {
                write!(f, "{field}: {input:?} is not a valid number")
            }
            Self::NegativeCount { field, value } => {
                write!(f, "{field} cannot be negative (got {value})")
            }
            Self::CountTooLarge { field, value } => {
                write!(f, "{field} is too large (got {value})")
            }
            Self::InvalidArea(area) => write!(f, "area must be greater than zero (got {area})"),
            Self::InvalidGdp(gdp) => write!(f, "GDP cannot be negative (got {gdp})"),
        }
    }
}

impl std::error::Error for CardError {}

/// Result type for card validation.
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_error_display() {
        let err = CardError::NegativeCount {
            field: "population",
            value: -5,
        };
        assert!(err.to_string().contains("population"));
        assert!(err.to_string().contains("-5"));

        let err = CardError::InvalidStateCode("S".to_string());
        assert!(err.to_string().contains("2 letters"));

        let err = CardError::InvalidArea(0.0);
        assert!(err.to_string().contains("greater than zero"));
    }
}
