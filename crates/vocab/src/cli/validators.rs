//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use vocab_obo::parser_for;

/// Validate that a parser exists for the given source format.
///
/// Accepts any casing and returns the label trimmed.
pub fn validate_format(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Format cannot be empty".to_string());
    }
    parser_for(trimmed).map_err(|e| e.to_string())?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("obo")]
    #[case("OBO")]
    #[case(" Obo ")]
    fn known_formats_are_accepted(#[case] input: &str) {
        assert_eq!(validate_format(input).unwrap(), input.trim());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("owl")]
    #[case("obo2")]
    fn unknown_formats_are_rejected(#[case] input: &str) {
        assert!(validate_format(input).is_err());
    }
}
