//! Format of product identifiers: a single-character prefix followed by a decimal payload.
use crate::error::ShelfError;

/// Prefix of every identifier issued by the generator.
pub const ID_PREFIX: char = 'P';

/// Smallest numeric payload of a generated identifier.
pub const ID_MIN: u64 = 10_000_000;

/// Largest numeric payload of a generated identifier.
pub const ID_MAX: u64 = 99_999_999;

/// Number of decimal digits in a generated payload.
pub const ID_DIGITS: usize = 8;

/// Reduce the numeric payload of `id` modulo `modulus`, ignoring its first character whatever it
/// is.
///
/// The payload is folded digit by digit, so it may be arbitrarily long. A single leading `+` is
/// accepted.
///
/// # Errors
///
/// - [`ShelfError::MalformedIdentifier`] if `id` is empty or the rest isn't an unsigned integer.
pub fn suffix_mod(id: &str, modulus: u32) -> Result<u32, ShelfError> {
    debug_assert!(modulus > 0, r#""modulus" must be greater than 0"#);
    let malformed = || ShelfError::MalformedIdentifier(id.to_owned());

    let mut chars = id.chars();
    chars.next().ok_or_else(malformed)?;
    let digits = chars.as_str();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    if digits.is_empty() {
        return Err(malformed());
    }

    // `acc < modulus <= u32::MAX`, so `acc * 10 + 9` fits into `u64`.
    let modulus = modulus as u64;
    let rem = digits.bytes().try_fold(0_u64, |acc, b| match b {
        b'0'..=b'9' => Ok((acc * 10 + (b - b'0') as u64) % modulus),
        _ => Err(malformed()),
    })?;
    Ok(rem as u32)
}

/// Check that `id` has exactly the shape the generator produces: the prefix and 8 digits.
pub fn is_well_formed(id: &str) -> bool {
    match id.strip_prefix(ID_PREFIX) {
        Some(digits) => digits.len() == ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Format a payload into an identifier.
pub fn format_id(payload: u64) -> String {
    format!("{ID_PREFIX}{payload:0width$}", width = ID_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_mod() {
        assert_eq!(suffix_mod("P12345678", 100).unwrap(), 78);
        assert_eq!(suffix_mod("P00000100", 100).unwrap(), 0);
        assert_eq!(suffix_mod("P12345678", u32::MAX).unwrap(), 12_345_678);
        assert_eq!(suffix_mod("P+7", 5).unwrap(), 2);
        // Only the first character is skipped, it doesn't have to be the prefix.
        assert_eq!(suffix_mod("X42", 1000).unwrap(), 42);
        assert_eq!(suffix_mod("é42", 1000).unwrap(), 42);
    }

    #[test]
    fn test_suffix_mod_long_payload() {
        assert_eq!(suffix_mod("P1234567890123456789012323", 100).unwrap(), 23);
        assert_eq!(suffix_mod("P99999999999999999999999", 7).unwrap(), 4);
        // 2^64 overflows `u64` but still has a bucket.
        assert_eq!(suffix_mod("P18446744073709551616", u32::MAX).unwrap(), 1);
    }

    #[test]
    fn test_suffix_mod_malformed() {
        for id in ["", "P", "P+", "P++5", "Pabc", "P12 34", "P-5", "P 12"] {
            let result = suffix_mod(id, 100);
            assert!(
                matches!(result, Err(ShelfError::MalformedIdentifier(ref s)) if s == id),
                "Identifier: {:?}",
                id
            );
        }
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("P12345678"));
        assert!(is_well_formed("P00000100"));
        assert!(!is_well_formed("P1234567"));
        assert!(!is_well_formed("Q12345678"));
        assert!(!is_well_formed("P1234567a"));
        assert!(!is_well_formed("PP12345678"));
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(100), "P00000100");
        assert_eq!(format_id(ID_MAX), "P99999999");
        assert!(is_well_formed(&format_id(ID_MIN)));
    }
}
