//! Context windows and keyword-based confidence scoring.

use super::patterns::PatternKind;

/// Characters of text inspected on each side of a match.
pub(crate) const CONTEXT_WINDOW: usize = 50;

/// Words that suggest a match sits in genuinely genetic/clinical prose.
pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "mutation",
    "variant",
    "polymorphism",
    "substitution",
    "deletion",
    "insertion",
    "frameshift",
    "nonsense",
    "missense",
    "splice",
    "genetic",
    "genomic",
    "allele",
    "genotype",
    "phenotype",
    "pathogenic",
    "benign",
    "oncogenic",
    "tumor",
    "cancer",
    "disease",
    "syndrome",
    "disorder",
    "defect",
    "deficiency",
];

/// Words that suggest a match is part of a methods/protocol description.
pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "buffer",
    "protocol",
    "experiment",
    "antibody",
    "reagent",
    "solution",
    "medium",
    "culture",
    "plate",
    "dish",
    "tube",
    "incubation",
    "washing",
    "staining",
    "fixation",
    "lysis",
    "centrifugation",
    "precipitation",
    "chromatography",
];

/// Extracts the lowercased context windows around a match span.
///
/// `start` and `end` are byte offsets on valid character boundaries (they
/// come from a regex match); the windows are counted in characters so
/// non-ASCII abstracts cannot split a code point.
pub(crate) fn context_windows(text: &str, start: usize, end: usize) -> (String, String) {
    let before: String = text[..start]
        .chars()
        .rev()
        .take(CONTEXT_WINDOW)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let after: String = text[end..].chars().take(CONTEXT_WINDOW).collect();
    (before.to_lowercase(), after.to_lowercase())
}

/// Adjusts a pattern's base confidence by the keywords present in the
/// combined context, clamping the result to [0.0, 1.0].
///
/// Each distinct positive keyword adds 0.1 and each distinct negative
/// keyword subtracts 0.15. Bare amino-acid changes are unreliable without
/// strong genetic context, so their confidence is halved when fewer than two
/// positive keywords are present.
pub(crate) fn score_confidence(kind: PatternKind, base_confidence: f64, context: &str) -> f64 {
    let positive_hits = POSITIVE_KEYWORDS
        .iter()
        .filter(|keyword| context.contains(*keyword))
        .count();
    let negative_hits = NEGATIVE_KEYWORDS
        .iter()
        .filter(|keyword| context.contains(*keyword))
        .count();

    let mut confidence =
        base_confidence + 0.1 * positive_hits as f64 - 0.15 * negative_hits as f64;

    if kind == PatternKind::SimpleAaChange && positive_hits < 2 {
        confidence *= 0.5;
    }

    confidence.clamp(0.0, 1.0)
}
