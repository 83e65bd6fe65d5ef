//! Free-text yes/no parsing for console prompts.

use crate::error::{SemcalError, SemcalResult};

/// Parse a yes/no answer. Accepts f/n/false/no/0 and t/y/true/yes/1 in any
/// case; anything else is an error so the caller can re-prompt.
pub fn parse_bool(input: &str) -> SemcalResult<bool> {
    match input.trim().to_lowercase().as_str() {
        "f" | "n" | "false" | "no" | "0" => Ok(false),
        "t" | "y" | "true" | "yes" | "1" => Ok(true),
        _ => Err(SemcalError::InvalidBoolean(input.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_inputs() {
        for input in ["f", "n", "false", "no", "0", "F", "No", "FALSE"] {
            assert_eq!(parse_bool(input).unwrap(), false, "{input}");
        }
    }

    #[test]
    fn truthy_inputs() {
        for input in ["t", "y", "true", "yes", "1", "T", "Yes", "TRUE"] {
            assert_eq!(parse_bool(input).unwrap(), true, "{input}");
        }
    }

    #[test]
    fn junk_is_rejected() {
        for input in ["", "maybe", "oui", "2"] {
            assert!(matches!(
                parse_bool(input),
                Err(SemcalError::InvalidBoolean(_))
            ));
        }
    }
}
