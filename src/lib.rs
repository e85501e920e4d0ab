//! A library for recognizing, normalizing, and evaluating genomic variant
//! mentions in biomedical text.
//!
//! `varlit` provides the deterministic core of a literature-mining pipeline:
//! it scans publication text (title + abstract) for variant-like substrings,
//! canonicalizes heterogeneous variant notations so that sets from different
//! sources can be compared by equality, and computes precision/recall/F1
//! between predicted and reference variant sets.
//!
//! # Key Features
//!
//! - **Pattern-based recognition**: HGVS DNA and protein notation, dbSNP
//!   identifiers, chromosomal positions, and bare amino-acid changes, each
//!   with a base confidence adjusted by the surrounding lexical context.
//! - **False-positive filtering**: histone marks, lab codes, buffer and
//!   reagent vocabulary, and cell-line names are suppressed.
//! - **Notation normalization**: HGVS case folding, 3-letter → 1-letter
//!   amino-acid codes, and prefix stripping, so `p.Val600Glu`, `p.val600glu`
//!   and `p.V600E` all compare equal.
//! - **Set-based evaluation**: per-gene and overall precision/recall/F1
//!   against reference databases such as PubTator or LitVar.
//!
//! # Basic Usage
//!
//! ```rust
//! use varlit::VariantRecognizer;
//!
//! let recognizer = VariantRecognizer::new();
//! let variants = recognizer.recognize("The BRCA1 mutation c.185delAG causes a frameshift.");
//! assert_eq!(variants, vec!["c.185delAG"]);
//! ```
//!
//! # Comparing Against a Reference
//!
//! ```rust
//! # #[cfg(feature = "evaluate")] {
//! use std::collections::HashMap;
//! use varlit::evaluate::{Evaluator, VariantMention};
//!
//! let predicted: HashMap<String, Vec<VariantMention>> = HashMap::from([(
//!     "BRAF".to_string(),
//!     vec![VariantMention { variant: "p.Val600Glu".to_string() }],
//! )]);
//! let reference: HashMap<String, Vec<VariantMention>> = HashMap::from([(
//!     "BRAF".to_string(),
//!     vec![VariantMention { variant: "p.V600E".to_string() }],
//! )]);
//!
//! let report = Evaluator::new().evaluate(&predicted, &reference);
//! assert_eq!(report.overall.f1_score, 1.0);
//! # }
//! ```
//!
//! # Error Handling
//!
//! The recognition, normalization, and metrics paths are pure functions of
//! their inputs and cannot fail; empty or unrecognizable input yields an
//! empty result. [`VariantError`] exists for the fallible edges: the
//! [`VariantExtractor`] seam (implementations backed by external services
//! may fail) and report export.
//!
//! # Thread Safety
//!
//! All types are immutable after construction and safe to share between
//! threads. The evaluator supports parallel per-gene processing through the
//! `run_in_parallel` option.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "evaluate")]
pub mod evaluate;
pub mod normalize;
pub mod recognizer;
mod regex;
#[cfg(feature = "csv")]
pub mod report;

// Reexports
#[cfg(feature = "evaluate")]
pub use evaluate::{EvaluationReport, Evaluator, EvaluatorConfig, SetMetrics};
pub use recognizer::{PatternKind, RecognizerConfig, VariantMatch, VariantRecognizer};

/// A specialized Result type for variant extraction operations.
pub type Result<T> = std::result::Result<T, VariantError>;

/// Represents errors that can occur at the fallible edges of the pipeline.
#[derive(Error, Debug)]
pub enum VariantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Error: {0}")]
    Other(String),
}

#[cfg(feature = "csv")]
impl From<csv::Error> for VariantError {
    fn from(err: csv::Error) -> Self {
        VariantError::Report(err.to_string())
    }
}

/// Identifies which extraction pass produced a gene-variant association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantSource {
    /// Extracted by prompting a language model.
    LlmPrediction,
    /// Curated annotation from PubTator.
    PubtatorAnnotation,
    /// Literature-derived record from LitVar.
    Litvar,
}

/// A single gene-variant association extracted from one publication.
///
/// Records are created during an extraction pass and never mutated;
/// evaluation aggregates them into per-gene sets without modifying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Gene symbol the variant was extracted for.
    pub gene: String,
    /// Raw variant text as it appeared in the source. Reference exports
    /// sometimes label this field `name`.
    #[serde(alias = "name")]
    pub variant: String,
    /// PubMed identifier of the publication.
    pub pmid: String,
    /// Extraction pass that produced this record.
    pub source: VariantSource,
}

/// Trait for implementing variant extraction strategies.
///
/// The pattern-based [`VariantRecognizer`] is the in-crate implementation;
/// strategies backed by language models or NER services share the same seam.
pub trait VariantExtractor {
    /// Extract variant strings from a block of free text.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to scan, typically a title + abstract concatenation
    ///
    /// # Returns
    ///
    /// A Result containing the extracted variant strings, deduplicated, in
    /// the order they were first found
    ///
    /// # Errors
    ///
    /// Returns `VariantError` if the underlying strategy fails; the built-in
    /// recognizer is infallible
    fn extract(&self, text: &str) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_error_display() {
        let error = VariantError::Extraction("model unavailable".to_string());
        assert_eq!(error.to_string(), "Extraction error: model unavailable");
    }

    #[test]
    fn test_record_deserializes_name_alias() {
        let json = r#"{"gene": "BRAF", "name": "p.V600E", "pmid": "12345678", "source": "pubtator_annotation"}"#;
        let record: VariantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.variant, "p.V600E");
        assert_eq!(record.source, VariantSource::PubtatorAnnotation);
    }

    #[test]
    fn test_source_tag_spelling() {
        let json = serde_json::to_string(&VariantSource::LlmPrediction).unwrap();
        assert_eq!(json, r#""llm_prediction""#);
    }
}
