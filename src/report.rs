//! CSV export for evaluation reports.
//!
//! Writes the summary rows the experiment drivers archive next to their JSON
//! reports: one row per labelled comparison, or one row per gene.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use varlit::evaluate::Evaluator;
//! use varlit::report::write_summary;
//!
//! let report = Evaluator::new().evaluate(&HashMap::new(), &HashMap::new());
//!
//! let mut out = Vec::new();
//! write_summary(&mut out, &[("llm_vs_pubtator", &report)]).unwrap();
//! let csv = String::from_utf8(out).unwrap();
//! assert!(csv.starts_with("comparison,precision,recall,f1_score"));
//! ```

use crate::evaluate::{EvaluationReport, SetMetrics};
use crate::Result;
use itertools::Itertools;
use std::io;

const SUMMARY_HEADER: &[&str] = &[
    "comparison",
    "precision",
    "recall",
    "f1_score",
    "true_positives",
    "false_positives",
    "false_negatives",
    "total_genes",
];

const GENE_HEADER: &[&str] = &[
    "gene",
    "precision",
    "recall",
    "f1_score",
    "true_positives",
    "false_positives",
    "false_negatives",
];

/// Writes one row of overall metrics per labelled comparison.
///
/// # Arguments
///
/// * `out` - Destination for the CSV bytes
/// * `comparisons` - Labelled reports, written in the given order
///
/// # Errors
///
/// Returns `VariantError` if writing to `out` fails
pub fn write_summary<W: io::Write>(
    out: W,
    comparisons: &[(&str, &EvaluationReport)],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(SUMMARY_HEADER)?;

    for (label, report) in comparisons {
        let mut row = vec![(*label).to_string()];
        row.extend(metric_fields(&report.overall));
        row.push(report.genes.len().to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes one row of metrics per gene, sorted by gene name.
///
/// # Errors
///
/// Returns `VariantError` if writing to `out` fails
pub fn write_gene_metrics<W: io::Write>(out: W, report: &EvaluationReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(GENE_HEADER)?;

    for (gene, metrics) in report.genes.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
        let mut row = vec![gene.clone()];
        row.extend(metric_fields(metrics));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

fn metric_fields(metrics: &SetMetrics) -> Vec<String> {
    vec![
        format!("{:.3}", metrics.precision),
        format!("{:.3}", metrics.recall),
        format!("{:.3}", metrics.f1_score),
        metrics.true_positives.to_string(),
        metrics.false_positives.to_string(),
        metrics.false_negatives.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::{Evaluator, VariantMention};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn sample_report() -> EvaluationReport {
        let predicted = HashMap::from([
            (
                "FOXP2".to_string(),
                vec![
                    VariantMention {
                        variant: "rs1".to_string(),
                    },
                    VariantMention {
                        variant: "c.123a>g".to_string(),
                    },
                ],
            ),
            (
                "FOXC1".to_string(),
                vec![VariantMention {
                    variant: "rs2".to_string(),
                }],
            ),
        ]);
        let reference = HashMap::from([(
            "FOXP2".to_string(),
            vec![VariantMention {
                variant: "c.123A>G".to_string(),
            }],
        )]);
        Evaluator::new().evaluate(&predicted, &reference)
    }

    #[test]
    fn test_write_summary() {
        let report = sample_report();

        let mut out = Vec::new();
        write_summary(&mut out, &[("llm_vs_pubtator", &report)]).unwrap();

        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "comparison,precision,recall,f1_score,true_positives,false_positives,false_negatives,total_genes",
                "llm_vs_pubtator,0.333,1.000,0.500,1,2,0,2",
            ]
        );
    }

    #[test]
    fn test_write_gene_metrics_sorted_by_gene() {
        let report = sample_report();

        let mut out = Vec::new();
        write_gene_metrics(&mut out, &report).unwrap();

        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "gene,precision,recall,f1_score,true_positives,false_positives,false_negatives",
                "FOXC1,0.000,0.000,0.000,0,1,0",
                "FOXP2,0.500,1.000,0.667,1,1,0",
            ]
        );
    }

    #[test]
    fn test_empty_report_writes_header_only_gene_rows() {
        let report = Evaluator::new().evaluate(&HashMap::new(), &HashMap::new());

        let mut out = Vec::new();
        write_gene_metrics(&mut out, &report).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv.lines().collect::<Vec<_>>(),
            vec!["gene,precision,recall,f1_score,true_positives,false_positives,false_negatives"]
        );
    }
}
