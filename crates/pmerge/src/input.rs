use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid argument: {0:?} is not a non-negative integer")]
    NotANumber(String),

    #[error("invalid argument: {0} does not fit in an unsigned 64-bit integer")]
    OutOfRange(String),

    #[error("invalid argument (not unique): {0}")]
    Duplicate(u64),
}

/// Parses every token as a decimal `u64` and rejects repeated values.
///
/// Only ASCII digits are accepted; signs, whitespace and empty tokens are rejected.
pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u64>, InputError> {
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value = parse_value(token.as_ref())?;
        if !seen.insert(value) {
            return Err(InputError::Duplicate(value));
        }
        values.push(value);
    }
    Ok(values)
}

fn parse_value(token: &str) -> Result<u64, InputError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_owned()));
    }
    // Only overflow is left once the token is all digits.
    token
        .parse()
        .map_err(|_| InputError::OutOfRange(token.to_owned()))
}
