//! Error types

use thiserror::Error;

/// Everything that can go wrong while analysing a sequence.
///
/// None of these are fatal: the [`analyze`](crate::analyze) facade turns validation
/// failures into an [`AnalysisResult::Invalid`](crate::AnalysisResult::Invalid) value, and
/// the protein stage reports [`MissingSequenceInput`](Self::MissingSequenceInput) per ORF.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Nothing left after whitespace was removed.
    #[error("Empty sequence")]
    EmptySequence,

    /// More than the tolerated fraction of characters lie outside `A/T/G/C/N`.
    ///
    /// `sample` holds (at most) the first ten offending characters.
    #[error("Too many invalid characters: {sample}...")]
    TooManyInvalidCharacters {
        /// Leading offending characters, in sequence order.
        sample: String,
    },

    /// A protein prediction was requested for an ORF without nucleotides.
    #[error("No sequence provided")]
    MissingSequenceInput,

    /// Strict translation was asked to read a sequence that doesn't split into codons.
    #[error("sequence length {length} is not a multiple of 3")]
    InvalidCodonAlignment {
        /// Length of the rejected sequence.
        length: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_tool_layer_wording() {
        assert_eq!(AnalysisError::EmptySequence.to_string(), "Empty sequence");
        assert_eq!(
            AnalysisError::TooManyInvalidCharacters {
                sample: "XYZ".into()
            }
            .to_string(),
            "Too many invalid characters: XYZ..."
        );
        assert_eq!(
            AnalysisError::MissingSequenceInput.to_string(),
            "No sequence provided"
        );
        assert_eq!(
            AnalysisError::InvalidCodonAlignment { length: 4 }.to_string(),
            "sequence length 4 is not a multiple of 3"
        );
    }
}
