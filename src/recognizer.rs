//! Pattern-based variant recognition.
//!
//! Scans free text for variant-like substrings using an ordered table of
//! typed patterns, attaches a confidence score derived from the surrounding
//! lexical context, and suppresses known false positives such as histone
//! marks, lab codes, and reagent vocabulary.
//!
//! # Example
//!
//! ```
//! use varlit::VariantRecognizer;
//!
//! let recognizer = VariantRecognizer::new();
//!
//! let variants = recognizer.recognize("rs13447455 was associated with disease risk.");
//! assert_eq!(variants, vec!["rs13447455"]);
//!
//! // Protocol prose yields nothing.
//! let variants = recognizer.recognize("Buffer contains Tris-HCl and EDTA with pH 8.0.");
//! assert!(variants.is_empty());
//! ```

mod blacklist;
mod context;
mod patterns;

use crate::{Result, VariantExtractor};
use serde::Serialize;
use std::collections::HashSet;

use blacklist::{is_blacklisted, FALSE_POSITIVE_TERMS};
use context::{context_windows, score_confidence};
use patterns::{compile_patterns, VariantPattern};

pub use patterns::PatternKind;

/// Minimum confidence a match must reach to be reported.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.7;

/// One recognized variant occurrence with its scoring metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantMatch {
    /// The exact matched substring.
    pub variant: String,
    /// Extraction certainty in [0.0, 1.0].
    pub confidence: f64,
    /// The pattern family that matched.
    #[serde(rename = "pattern_type")]
    pub pattern: PatternKind,
    /// Lowercased text window preceding the match.
    pub context_before: String,
    /// Lowercased text window following the match.
    pub context_after: String,
    /// Byte offset of the match start in the source text.
    pub start: usize,
    /// Byte offset of the match end in the source text.
    pub end: usize,
}

/// Configuration options for the recognizer.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Minimum confidence a match must reach to be reported.
    pub min_confidence: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

/// Recognizes genomic variant mentions in free text.
///
/// The pattern table, keyword lists, and false-positive terms are immutable
/// data owned by the instance, so recognizers can be shared freely between
/// threads and tests.
///
/// # Examples
///
/// ```
/// use varlit::{RecognizerConfig, VariantRecognizer};
///
/// let strict = VariantRecognizer::new()
///     .with_config(RecognizerConfig { min_confidence: 0.9 });
/// ```
#[derive(Debug, Clone)]
pub struct VariantRecognizer {
    config: RecognizerConfig,
    patterns: Vec<VariantPattern>,
    blacklist: HashSet<&'static str>,
}

impl Default for VariantRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantRecognizer {
    /// Creates a recognizer with the default confidence threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RecognizerConfig::default(),
            patterns: compile_patterns(),
            blacklist: FALSE_POSITIVE_TERMS.iter().copied().collect(),
        }
    }

    /// Creates a recognizer with custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: RecognizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Recognizes variants in text, returning the matched strings.
    ///
    /// Results are deduplicated by exact matched string and returned in the
    /// order they were first accepted. Empty or whitespace-only input yields
    /// an empty vector.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to scan
    pub fn recognize(&self, text: &str) -> Vec<String> {
        self.recognize_detailed(text)
            .into_iter()
            .map(|found| found.variant)
            .collect()
    }

    /// Recognizes variants in text, returning full match records.
    ///
    /// Same filtering and ordering as [`recognize`](Self::recognize), with
    /// the pattern family, confidence, context windows, and byte offsets of
    /// each accepted match.
    pub fn recognize_detailed(&self, text: &str) -> Vec<VariantMatch> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut accepted: HashSet<String> = HashSet::new();
        let mut matches = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(text) {
                let variant = found.as_str();
                if accepted.contains(variant) {
                    continue;
                }

                let (context_before, context_after) =
                    context_windows(text, found.start(), found.end());
                let combined_context = format!("{context_before} {context_after}");

                if is_blacklisted(&self.blacklist, variant, &combined_context) {
                    continue;
                }

                let confidence =
                    score_confidence(pattern.kind, pattern.base_confidence, &combined_context);
                if confidence < self.config.min_confidence {
                    continue;
                }

                accepted.insert(variant.to_string());
                matches.push(VariantMatch {
                    variant: variant.to_string(),
                    confidence,
                    pattern: pattern.kind,
                    context_before,
                    context_after,
                    start: found.start(),
                    end: found.end(),
                });
            }
        }

        matches
    }
}

impl VariantExtractor for VariantRecognizer {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.recognize(text))
    }
}
