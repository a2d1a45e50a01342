use crate::errors::FormatError;
use std::str::FromStr;

pub mod cube;
pub mod mol2;

/// Parses a whitespace token, wrapping a failure with the file name and the
/// expected type so the message can point at the culprit.
pub fn parse_token<T: FromStr>(
    file: &str,
    token: &str,
    kind: &str,
) -> Result<T, FormatError> {
    token.parse::<T>().map_err(|_| {
        FormatError::BadToken(
            String::from(file),
            String::from(token),
            String::from(kind),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_parse_token() {
        assert_eq!(parse_token::<usize>("a.mol2", "42", "integer").unwrap(), 42);
        assert_eq!(parse_token::<f64>("a.mol2", "-0.5", "float").unwrap(), -0.5);
    }

    #[test]
    fn io_parse_token_bad() {
        let e = match parse_token::<f64>("a.mol2", "x1.0", "float") {
            Ok(_) => panic!("x1.0 should not parse as a float"),
            Err(e) => e,
        };
        let message = format!("{}", e);
        assert!(message.contains("x1.0"));
        assert!(message.contains("a.mol2"));
    }
}
