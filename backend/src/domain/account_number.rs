//! Account number format policy.
//!
//! Account numbers are three segments separated by `-`:
//!
//! ```text
//! AAA-BBBBBBBBBB-CC
//! ```
//!
//! Two kinds of rejection are distinguished. Input that is not shaped like a
//! delimited account number at all (fewer than two `-` characters, which
//! includes the empty string and inputs using `=` or `+` as separators) is a
//! contract violation and yields [`MalformedAccountNumber`]. Input with both
//! delimiters but a segment of the wrong length is an ordinary validation
//! failure and yields `Ok(false)`.

/// Required length of the leading segment.
pub const FIRST_SEGMENT_LEN: usize = 3;
/// Required length of the middle segment.
pub const MIDDLE_SEGMENT_LEN: usize = 10;
/// Required length of the trailing segment.
pub const LAST_SEGMENT_LEN: usize = 2;

const DELIMITER: char = '-';
const SEGMENT_LENGTHS: [usize; 3] = [FIRST_SEGMENT_LEN, MIDDLE_SEGMENT_LEN, LAST_SEGMENT_LEN];

/// The input does not carry the two `-` delimiters an account number needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("account number must contain two '-' delimiters, found {delimiters}")]
pub struct MalformedAccountNumber {
    delimiters: usize,
}

impl MalformedAccountNumber {
    /// Number of `-` characters present in the rejected input.
    pub fn delimiters(&self) -> usize {
        self.delimiters
    }
}

/// Policy deciding whether an account number is acceptable.
///
/// The request handler receives an implementation at construction so tests
/// can substitute their own.
#[cfg_attr(test, mockall::automock)]
pub trait AccountNumberPolicy: Send + Sync {
    /// Check `input` against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedAccountNumber`] when the input is structurally
    /// garbled rather than merely wrong.
    fn is_valid(&self, input: &str) -> Result<bool, MalformedAccountNumber>;
}

/// Segment-length validator for `AAA-BBBBBBBBBB-CC` account numbers.
///
/// # Examples
/// ```
/// use roster::domain::{AccountNumberFormatValidator, AccountNumberPolicy};
///
/// let validator = AccountNumberFormatValidator;
/// assert_eq!(validator.is_valid("123-4543234576-23"), Ok(true));
/// assert_eq!(validator.is_valid("1234-3454565676-23"), Ok(false));
/// assert!(validator.is_valid("123+345456567633=23").is_err());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountNumberFormatValidator;

impl AccountNumberPolicy for AccountNumberFormatValidator {
    fn is_valid(&self, input: &str) -> Result<bool, MalformedAccountNumber> {
        let delimiters = input.matches(DELIMITER).count();
        if delimiters < 2 {
            return Err(MalformedAccountNumber { delimiters });
        }

        // Extra delimiters stay in the last segment and fail its length check.
        let mut segments = input.splitn(SEGMENT_LENGTHS.len(), DELIMITER);
        Ok(SEGMENT_LENGTHS.iter().all(|expected| {
            segments
                .next()
                .is_some_and(|segment| segment.chars().count() == *expected)
        }))
    }
}
