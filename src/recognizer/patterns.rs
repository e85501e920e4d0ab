//! The ordered pattern table the recognizer scans with.
//!
//! Each entry pairs a [`PatternKind`] with its regular expression and a base
//! confidence. DNA, dbSNP, and chromosomal patterns match case-insensitively;
//! protein and bare amino-acid patterns are case-sensitive because their
//! letter case carries meaning.

use crate::regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern families the recognizer scans for.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// HGVS coding/genomic substitution, e.g. `c.123A>G`
    HgvsDna,
    /// HGVS deletion, e.g. `c.123_125delATC`
    HgvsDnaDel,
    /// HGVS insertion, e.g. `c.123_124insATC`
    HgvsDnaIns,
    /// HGVS UTR substitution, e.g. `c.*734A>T`
    HgvsDnaUtr,
    /// Protein substitution in 3-letter codes, e.g. `p.Val600Glu`
    #[serde(rename = "hgvs_protein_3letter")]
    HgvsProtein3Letter,
    /// Protein substitution in 1-letter codes, e.g. `p.V600E`
    #[serde(rename = "hgvs_protein_1letter")]
    HgvsProtein1Letter,
    /// Mixed 3-letter/1-letter protein substitution, e.g. `p.Val600E`
    HgvsProteinPrefix,
    /// Nonsense substitution, e.g. `p.Gln120Ter` or `p.Gln120*`
    HgvsProteinTer,
    /// Frameshift, e.g. `p.Lys100fs`
    HgvsProteinFs,
    /// dbSNP identifier, e.g. `rs13447455`
    Dbsnp,
    /// Chromosomal position, e.g. `chr7:140453136A>T`
    ChrPosition,
    /// Bare amino-acid change, e.g. `V600E`; unreliable without context
    SimpleAaChange,
}

impl PatternKind {
    /// The tag string used in serialized match records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HgvsDna => "hgvs_dna",
            Self::HgvsDnaDel => "hgvs_dna_del",
            Self::HgvsDnaIns => "hgvs_dna_ins",
            Self::HgvsDnaUtr => "hgvs_dna_utr",
            Self::HgvsProtein3Letter => "hgvs_protein_3letter",
            Self::HgvsProtein1Letter => "hgvs_protein_1letter",
            Self::HgvsProteinPrefix => "hgvs_protein_prefix",
            Self::HgvsProteinTer => "hgvs_protein_ter",
            Self::HgvsProteinFs => "hgvs_protein_fs",
            Self::Dbsnp => "dbsnp",
            Self::ChrPosition => "chr_position",
            Self::SimpleAaChange => "simple_aa_change",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled entry of the pattern table.
#[derive(Debug, Clone)]
pub(crate) struct VariantPattern {
    pub(crate) kind: PatternKind,
    pub(crate) regex: Regex,
    pub(crate) base_confidence: f64,
}

/// Ordered `(kind, pattern, base confidence)` table. Earlier entries claim a
/// matched string first when several families match the same text.
const PATTERN_TABLE: &[(PatternKind, &str, f64)] = &[
    (
        PatternKind::HgvsDna,
        r"(?i)\b[cgmn]\.[*\-]?\d+[+\-]?\d*[ATCG]>[ATCG]\b",
        0.95,
    ),
    (
        PatternKind::HgvsDnaDel,
        r"(?i)\b[cgmn]\.\d+(_\d+)?del[ATCG]*\b",
        0.95,
    ),
    (
        PatternKind::HgvsDnaIns,
        r"(?i)\b[cgmn]\.\d+(_\d+)?ins[ATCG]+\b",
        0.95,
    ),
    (
        PatternKind::HgvsDnaUtr,
        r"(?i)\b[cgmn]\.\*-?\d+[ATCG]>[ATCG]\b",
        0.90,
    ),
    (
        PatternKind::HgvsProtein3Letter,
        r"\bp\.[A-Z][a-z]{2}\d+[A-Z][a-z]{2}\b",
        0.92,
    ),
    (PatternKind::HgvsProtein1Letter, r"\bp\.[A-Z]\d+[A-Z]\b", 0.90),
    (
        PatternKind::HgvsProteinPrefix,
        r"\bp\.[A-Z][a-z]{2}\d+[A-Z]\b",
        0.88,
    ),
    (
        PatternKind::HgvsProteinTer,
        r"\bp\.[A-Z][a-z]{2}\d+(?:Ter\b|\*)",
        0.92,
    ),
    (PatternKind::HgvsProteinFs, r"\bp\.[A-Z][a-z]{2}\d+fs\b", 0.92),
    (PatternKind::Dbsnp, r"(?i)\brs\d+\b", 0.95),
    (
        PatternKind::ChrPosition,
        r"(?i)\bchr[0-9XY]+:\d+[ATCG]>[ATCG]\b",
        0.90,
    ),
    (PatternKind::SimpleAaChange, r"\b[A-Z]\d+[A-Z]\b", 0.70),
];

/// Compiles the pattern table. The expressions are fixed, so compilation
/// cannot fail once the table itself is correct (covered by tests).
pub(crate) fn compile_patterns() -> Vec<VariantPattern> {
    PATTERN_TABLE
        .iter()
        .map(|(kind, pattern, base_confidence)| VariantPattern {
            kind: *kind,
            regex: Regex::new(pattern).unwrap(),
            base_confidence: *base_confidence,
        })
        .collect()
}
