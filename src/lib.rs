//! [`orfscan`](crate) finds open reading frames and regulatory motifs in raw DNA, and
//! estimates basic properties of the proteins those ORFs encode.
//!
//! Everything is a pure function of its input. The usual entry point is [`analyze`], which
//! normalizes a raw sequence, validates it and bundles every result into one report:
//!
//! ```
//! # fn main() -> Result<(), orfscan::AnalysisError> {
//! use orfscan::{AnalysisConfig, Analyzer, analyze};
//!
//! // Whitespace is dropped and case is ignored.
//! let raw = "ccatg aaa aaa taa\nTATAAA";
//! let report = analyze(raw).into_report()?;
//! assert_eq!(report.cleaned_sequence, "CCATGAAAAAATAATATAAA");
//! assert_eq!(report.gc_percent, 15.0);
//!
//! // ORFs shorter than 30 amino acids are hidden by default...
//! assert!(report.orfs.is_empty());
//!
//! // ...but the threshold is configurable.
//! let analyzer = Analyzer::new(AnalysisConfig::default().with_min_orf_amino_acids(4));
//! let report = analyzer.analyze(raw).into_report()?;
//! assert_eq!(report.orfs[0].id(), "ORF_3_14");
//! assert_eq!(report.orfs[0].frame, 3);
//!
//! // Each ORF can be translated into a protein estimate.
//! let protein = &report.proteins()?[0];
//! assert_eq!(protein.aa_sequence, "MKK");
//! assert_eq!(protein.properties.molecular_weight, 330.0);
//!
//! // Motifs are scanned independently of ORFs.
//! let tata = report.motifs.iter().find(|hit| hit.motif == "TATA_box").unwrap();
//! assert_eq!(tata.position, 15);
//!
//! // Sequences that are mostly not DNA are rejected, not analyzed.
//! let rejected = analyze("hello world");
//! assert_eq!(
//!     rejected.error().map(ToString::to_string).as_deref(),
//!     Some("Too many invalid characters: HELLOWORLD..."),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The building blocks ([`normalize`], [`validate`], [`find_orfs`], [`scan`], [`translate`],
//! [`compute_properties`], [`detect_signal_peptide`]) are public too.
//!
//! # Features
//!
//! * **`serde`** (default): `Serialize`/`Deserialize` for results and configuration, plus the
//!   [`json`] module.
//! * **`rayon`:** [`Analyzer::analyze_batch`] runs on rayon's thread pool.
//! * **`proptest`:** `Arbitrary` implementations and string strategies in `proptest`.
//! * **`rand`:** random [`Nuc`]/[`Amino`] generation and `random_dna`.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod amino;
mod nuc;
#[cfg(feature = "rand")]
mod rand;

pub mod analysis;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod motif;
pub mod normalize;
pub mod orf;
pub mod protein;
#[cfg(feature = "proptest")]
pub mod proptest;
pub mod translation;

pub use amino::Amino;
pub use analysis::{
    AnalysisConfig, AnalysisResult, Analyzer, SequenceReport, SequenceType, analyze, gc_percent,
};
pub use error::{AnalysisError, Result};
pub use motif::{MOTIFS, Motif, MotifMatch, scan};
pub use normalize::{Sequence, normalize, validate, validate_with_tolerance};
pub use nuc::{AmbiNuc, Nuc};
pub use orf::{Orf, find_orfs, find_orfs_default};
pub use protein::{
    Protein, ProteinProperties, compute_properties, detect_signal_peptide, predict,
    predict_sequence,
};
#[cfg(feature = "rand")]
pub use crate::rand::random_dna;
pub use translation::{GeneticCode, STANDARD, checked_translate, translate};
