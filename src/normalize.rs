//! Sequence cleanup and the single validation gate.
//!
//! Everything downstream of [`validate`] assumes an uppercase, whitespace-free string in
//! which at most a small fraction of characters fall outside `A/T/G/C/N`.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use crate::error::{AnalysisError, Result};

/// Fraction of characters allowed outside `A/T/G/C/N` before a sequence is rejected.
pub const DEFAULT_MAX_INVALID_FRACTION: f64 = 0.02;

// Number of offending characters quoted in `TooManyInvalidCharacters`.
const INVALID_SAMPLE_LEN: usize = 10;

/// Remove all whitespace and uppercase the rest.
///
/// Whitespace is Unicode `White_Space` plus the ASCII separators `U+001C..=U+001F`.
/// Uppercasing is full Unicode case mapping, so a character may expand (`ß` becomes `SS`).
/// Idempotent: normalizing an already normalized string returns it unchanged.
///
/// # Examples
///
/// ```
/// use orfscan::normalize;
///
/// assert_eq!(normalize("  atg cgt \n"), "ATGCGT");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !is_separator(c))
        .flat_map(char::to_uppercase)
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Check a normalized sequence with the default 2% noise tolerance.
///
/// # Errors
///
/// * [`AnalysisError::EmptySequence`] if `cleaned` is empty.
/// * [`AnalysisError::TooManyInvalidCharacters`] if more than 2% of the characters are not
///   one of `A`, `T`, `G`, `C` or `N`.
///
/// # Examples
///
/// ```
/// use orfscan::{AnalysisError, validate};
///
/// assert!(validate("ATGC").is_ok());
/// assert_eq!(validate(""), Err(AnalysisError::EmptySequence));
/// assert!(validate("XYZ").is_err());
/// ```
pub fn validate(cleaned: &str) -> Result<()> {
    validate_with_tolerance(cleaned, DEFAULT_MAX_INVALID_FRACTION)
}

/// Check a normalized sequence, tolerating up to `max_invalid_fraction` foreign characters.
///
/// The comparison is strict: a sequence with *exactly* the tolerated share of invalid
/// characters still passes.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_with_tolerance(cleaned: &str, max_invalid_fraction: f64) -> Result<()> {
    if cleaned.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }

    let mut total = 0usize;
    let mut invalid = 0usize;
    let mut sample = String::new();
    for c in cleaned.chars() {
        total += 1;
        if !is_allowed(c) {
            invalid += 1;
            if invalid <= INVALID_SAMPLE_LEN {
                sample.push(c);
            }
        }
    }

    #[allow(clippy::cast_precision_loss, reason = "sequence lengths are far below 2^52")]
    let too_noisy = invalid as f64 > total as f64 * max_invalid_fraction;
    if too_noisy {
        return Err(AnalysisError::TooManyInvalidCharacters { sample });
    }
    Ok(())
}

fn is_allowed(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'G' | 'C' | 'N')
}

// Placeholder for non-ASCII characters in `symbols`; never a valid base.
const NON_ASCII: u8 = b'?';

/// One byte per character of `cleaned`, so byte offsets double as character positions.
///
/// Validated sequences are almost always ASCII, in which case this borrows.
pub(crate) fn symbols(cleaned: &str) -> Cow<'_, [u8]> {
    if cleaned.is_ascii() {
        Cow::Borrowed(cleaned.as_bytes())
    } else {
        Cow::Owned(
            cleaned
                .chars()
                .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(NON_ASCII))
                .collect(),
        )
    }
}

/// Characters `start..end` (0-based, exclusive) of `cleaned`.
pub(crate) fn char_slice(cleaned: &str, start: usize, end: usize) -> String {
    if cleaned.is_ascii() {
        cleaned[start..end].to_owned()
    } else {
        cleaned.chars().skip(start).take(end - start).collect()
    }
}

/// A normalized sequence that passed [`validate`].
///
/// Immutable once built; dereferences to `str`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), orfscan::AnalysisError> {
/// use orfscan::Sequence;
///
/// let seq = Sequence::parse("gat\ntaca")?;
/// assert_eq!(&*seq, "GATTACA");
/// assert_eq!(seq.len(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// Normalize and validate `raw` with the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with_tolerance(raw, DEFAULT_MAX_INVALID_FRACTION)
    }

    /// Normalize and validate `raw`, tolerating up to `max_invalid_fraction` foreign
    /// characters.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn parse_with_tolerance(raw: &str, max_invalid_fraction: f64) -> Result<Self> {
        let cleaned = normalize(raw);
        validate_with_tolerance(&cleaned, max_invalid_fraction)?;
        Ok(Self(cleaned))
    }

    /// Borrow the cleaned sequence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the cleaned sequence.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Unwrap into the cleaned `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Sequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_whitespace_and_uppercases() {
        assert_eq!(normalize("  atg cgt \n"), "ATGCGT");
        assert_eq!(normalize("\tg\r\nc"), "GC");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn information_separators_are_whitespace() {
        assert_eq!(normalize("A\u{1c}C\u{1d}G\u{1e}T\u{1f}"), "ACGT");
        assert_eq!(normalize("a\u{a0}c\u{2028}g"), "ACG");
    }

    #[test]
    fn uppercasing_uses_full_case_mapping() {
        assert_eq!(normalize("aß"), "ASS");
        assert_eq!(normalize("atgé"), "ATGÉ");
        let Err(AnalysisError::TooManyInvalidCharacters { sample }) =
            validate(&normalize("ß"))
        else {
            panic!("expected rejection");
        };
        assert_eq!(sample, "SS");
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(validate(""), Err(AnalysisError::EmptySequence));
    }

    #[test]
    fn plain_dna_is_accepted() {
        assert_eq!(validate("ATGC"), Ok(()));
        assert_eq!(validate("NNNN"), Ok(()));
    }

    #[test]
    fn all_invalid_is_rejected_with_sample() {
        assert_eq!(
            validate("XYZ"),
            Err(AnalysisError::TooManyInvalidCharacters {
                sample: "XYZ".into()
            })
        );
    }

    #[test]
    fn sample_is_truncated_to_ten_characters() {
        let Err(AnalysisError::TooManyInvalidCharacters { sample }) =
            validate("QWERUIOPLKJHFDS")
        else {
            panic!("expected rejection");
        };
        assert_eq!(sample, "QWERUIOPLK");
    }

    #[test]
    fn tolerance_boundary_is_strict() {
        // 1 invalid in 50 is exactly 2%: allowed.
        let at_limit = format!("{}X", "A".repeat(49));
        assert_eq!(validate(&at_limit), Ok(()));
        // 2 invalid in 50 is 4%: rejected.
        let over_limit = format!("{}XX", "A".repeat(48));
        assert!(validate(&over_limit).is_err());
    }

    #[test]
    fn custom_tolerance() {
        assert!(validate_with_tolerance("AAAX", 0.25).is_ok());
        assert!(validate_with_tolerance("AAXX", 0.25).is_err());
        assert!(validate_with_tolerance("AAAX", 0.0).is_err());
    }

    #[test]
    fn lowercase_is_invalid_until_normalized() {
        assert!(validate("atgc").is_err());
        assert!(validate(&normalize("atgc")).is_ok());
    }

    #[test]
    fn sequence_parse_normalizes() {
        let seq = Sequence::parse(" acgt\nn ").unwrap();
        assert_eq!(seq.as_str(), "ACGTN");
        assert_eq!(seq.char_len(), 5);
        assert_eq!(seq.to_string(), "ACGTN");
        assert_eq!(Sequence::parse(" \n\t"), Err(AnalysisError::EmptySequence));
    }

    #[test]
    fn symbols_are_one_byte_per_character() {
        assert_eq!(&*symbols("ACGT"), b"ACGT");
        assert_eq!(&*symbols("AÉT"), b"A?T");
        assert_eq!(char_slice("AÉTG", 1, 3), "ÉT");
        assert_eq!(char_slice("AATG", 1, 3), "AT");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[ACGTNacgtn \t\n]{0,200}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!once.chars().any(char::is_whitespace));
        }

        #[test]
        fn clean_dna_always_validates(dna in "[ACGTN]{1,300}") {
            prop_assert_eq!(validate(&dna), Ok(()));
        }
    }
}
