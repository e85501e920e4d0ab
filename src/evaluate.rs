//! Set-based comparison of predicted and reference variants.
//!
//! A module for scoring variant extraction against reference databases such
//! as PubTator or LitVar. Both sides are canonicalized through
//! [`crate::normalize`], compared as sets, and summarized as
//! precision/recall/F1, per gene and overall.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use varlit::evaluate::{Evaluator, VariantMention};
//!
//! let predicted = HashMap::from([(
//!     "BRAF".to_string(),
//!     vec![
//!         VariantMention { variant: "p.Val600Glu".to_string() },
//!         VariantMention { variant: "rs113488022".to_string() },
//!     ],
//! )]);
//! let reference = HashMap::from([(
//!     "BRAF".to_string(),
//!     vec![VariantMention { variant: "p.V600E".to_string() }],
//! )]);
//!
//! let report = Evaluator::new().evaluate(&predicted, &reference);
//!
//! assert_eq!(report.overall.true_positives, 1);
//! assert_eq!(report.overall.false_positives, 1);
//! assert_eq!(report.genes["BRAF"].recall, 1.0);
//! ```
//!
//! ## Set Semantics
//!
//! Per-gene metrics compare the two sets for that gene; overall metrics
//! compare the unions of all per-gene sets, so a variant predicted for two
//! genes counts once globally and per-gene scores do not double-count.

use crate::normalize::normalize;
use crate::VariantRecord;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One variant mention inside a per-gene listing.
///
/// This is the interface boundary with the surrounding experiment scripts:
/// prediction and reference exports are JSON mappings of gene symbol to a
/// list of records carrying the variant text under either a `variant` or a
/// `name` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantMention {
    /// Raw variant text.
    #[serde(alias = "name")]
    pub variant: String,
}

/// Counts and scores from comparing a predicted set against a reference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl SetMetrics {
    /// Computes precision, recall, and F1 between two variant sets.
    ///
    /// Zero denominators yield 0.0 scores. Two empty sets agree vacuously
    /// and score 1.0 across the board.
    #[must_use]
    pub fn from_sets(predicted: &HashSet<String>, reference: &HashSet<String>) -> Self {
        if predicted.is_empty() && reference.is_empty() {
            return Self {
                precision: 1.0,
                recall: 1.0,
                f1_score: 1.0,
                true_positives: 0,
                false_positives: 0,
                false_negatives: 0,
            };
        }

        let true_positives = predicted.intersection(reference).count();
        let false_positives = predicted.difference(reference).count();
        let false_negatives = reference.difference(predicted).count();

        let precision = if true_positives + false_positives > 0 {
            true_positives as f64 / (true_positives + false_positives) as f64
        } else {
            0.0
        };
        let recall = if true_positives + false_negatives > 0 {
            true_positives as f64 / (true_positives + false_negatives) as f64
        } else {
            0.0
        };
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            precision,
            recall,
            f1_score,
            true_positives,
            false_positives,
            false_negatives,
        }
    }
}

/// Which variants the two sides agreed and disagreed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantOverlap {
    /// Variants present on both sides, sorted.
    pub true_positives: Vec<String>,
    /// Predicted variants absent from the reference, sorted.
    pub false_positives: Vec<String>,
    /// Reference variants the prediction missed, sorted.
    pub false_negatives: Vec<String>,
    /// Intersection over union of the two sets; 0.0 when both are empty.
    pub overlap_ratio: f64,
}

impl VariantOverlap {
    /// Lists the agreement and disagreement between two variant sets.
    #[must_use]
    pub fn from_sets(predicted: &HashSet<String>, reference: &HashSet<String>) -> Self {
        let union = predicted.union(reference).count();
        let intersection = predicted.intersection(reference).count();

        Self {
            true_positives: predicted.intersection(reference).cloned().sorted().collect(),
            false_positives: predicted.difference(reference).cloned().sorted().collect(),
            false_negatives: reference.difference(predicted).cloned().sorted().collect(),
            overlap_ratio: if union > 0 {
                intersection as f64 / union as f64
            } else {
                0.0
            },
        }
    }
}

/// Metrics for one full comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Metrics over the unions of all per-gene sets.
    pub overall: SetMetrics,
    /// Metrics per gene, over the key-set union of both inputs.
    pub genes: HashMap<String, SetMetrics>,
}

/// Configuration options for the evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Whether to canonicalize variant notation before comparing.
    /// When disabled, trimmed lowercased raw strings are compared instead,
    /// which is useful for measuring the impact of normalization.
    pub use_normalization: bool,
    /// Whether to compute per-gene metrics in parallel.
    pub run_in_parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            use_normalization: true,
            run_in_parallel: false,
        }
    }
}

/// Compares per-gene variant listings and produces an [`EvaluationReport`].
///
/// Each evaluation run is a pure function of its two inputs; the evaluator
/// holds only configuration and can be shared between threads.
#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Creates an evaluator with normalization enabled and parallel
    /// processing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluates predicted variants against a reference, per gene and
    /// overall.
    ///
    /// The gene universe is the union of both inputs' keys; a gene missing
    /// from one side is compared against an empty set. Mentions that
    /// canonicalize to an empty string are treated as noise and dropped.
    #[must_use]
    pub fn evaluate(
        &self,
        predicted: &HashMap<String, Vec<VariantMention>>,
        reference: &HashMap<String, Vec<VariantMention>>,
    ) -> EvaluationReport {
        let predicted_sets = self.variant_sets(predicted);
        let reference_sets = self.variant_sets(reference);

        let empty = HashSet::new();
        let all_genes: Vec<&String> = predicted_sets
            .keys()
            .chain(reference_sets.keys())
            .unique()
            .collect();

        let gene_metrics = |gene: &&String| -> (String, SetMetrics) {
            let predicted_set = predicted_sets.get(*gene).unwrap_or(&empty);
            let reference_set = reference_sets.get(*gene).unwrap_or(&empty);
            (
                (*gene).clone(),
                SetMetrics::from_sets(predicted_set, reference_set),
            )
        };

        let genes: HashMap<String, SetMetrics> = if self.config.run_in_parallel {
            use rayon::prelude::*;

            all_genes.par_iter().map(gene_metrics).collect()
        } else {
            all_genes.iter().map(gene_metrics).collect()
        };

        let overall_predicted: HashSet<String> =
            predicted_sets.into_values().flatten().collect();
        let overall_reference: HashSet<String> =
            reference_sets.into_values().flatten().collect();

        EvaluationReport {
            overall: SetMetrics::from_sets(&overall_predicted, &overall_reference),
            genes,
        }
    }

    /// Lists the agreement between the union sets of two inputs.
    #[must_use]
    pub fn overlap(
        &self,
        predicted: &HashMap<String, Vec<VariantMention>>,
        reference: &HashMap<String, Vec<VariantMention>>,
    ) -> VariantOverlap {
        let predicted_set: HashSet<String> =
            self.variant_sets(predicted).into_values().flatten().collect();
        let reference_set: HashSet<String> =
            self.variant_sets(reference).into_values().flatten().collect();
        VariantOverlap::from_sets(&predicted_set, &reference_set)
    }

    /// Builds the comparable per-gene sets, dropping mentions that
    /// canonicalize to nothing.
    fn variant_sets(
        &self,
        gene_data: &HashMap<String, Vec<VariantMention>>,
    ) -> HashMap<String, HashSet<String>> {
        gene_data
            .iter()
            .map(|(gene, mentions)| {
                let set = mentions
                    .iter()
                    .map(|mention| {
                        if self.config.use_normalization {
                            normalize(&mention.variant)
                        } else {
                            mention.variant.trim().to_lowercase()
                        }
                    })
                    .filter(|variant| !variant.is_empty())
                    .collect();
                (gene.clone(), set)
            })
            .collect()
    }
}

/// Groups extraction records into the per-gene listing the evaluator
/// consumes.
#[must_use]
pub fn group_by_gene(records: &[VariantRecord]) -> HashMap<String, Vec<VariantMention>> {
    records
        .iter()
        .map(|record| {
            (
                record.gene.clone(),
                VariantMention {
                    variant: record.variant.clone(),
                },
            )
        })
        .into_group_map()
}
