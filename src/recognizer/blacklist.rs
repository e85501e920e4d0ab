//! Known false positives: strings that look like variants but are not.

use crate::regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Exact-match terms (lowercase) that are never variants.
pub(crate) const FALSE_POSITIVE_TERMS: &[&str] = &[
    // Histone modifications
    "h3k4", "h3k4me3", "h3k27", "h3k27me3", "h3k9", "h3k9me3", "h2a", "h2b", "h4k", "h4k20",
    "h3k36", "h3k79",
    // Common lab codes
    "u5f", "r5b", "e3k", "c5a", "f4a", "h1b", "n9d", "b1a", "s22l", "f1a", "f2d", "h2f", "o1a",
    "o3a", "d4l", "g1b", "a1l", "a3c", "l1c", "p1b", "e2f", "k1n", "f2c", "g2m", "p3r", "q11d",
    "c4a", "n2b", "l10a", "r494g",
    // Buffer components and reagents
    "tris", "edta", "dmso", "pbs", "bsa", "sds",
    // Cell line codes
    "hela", "hek293", "cos7", "cho", "nih3t3",
];

static RS_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^rs\d+$").unwrap());

static HISTONE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^h\d+[a-z]").unwrap());

static LAB_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]\d+[a-z]?$").unwrap());

/// Keywords that mark a lab-code-shaped string as protocol vocabulary.
const LAB_CODE_CONTEXT: &[&str] = &["buffer", "protocol", "reagent", "antibody"];

/// Checks a matched string against the false-positive rules.
///
/// `context` is the lowercased text surrounding the match. Beyond the exact
/// term list, very short strings are rejected unless they are dbSNP ids,
/// histone-shaped codes are rejected in histone/chromatin prose, and
/// lab-code-shaped strings are rejected in protocol prose.
pub(crate) fn is_blacklisted(terms: &HashSet<&str>, variant: &str, context: &str) -> bool {
    let variant = variant.trim().to_lowercase();

    if terms.contains(variant.as_str()) {
        return true;
    }

    if variant.len() <= 3 && !RS_ID_REGEX.is_match(&variant) {
        return true;
    }

    if HISTONE_CODE_REGEX.is_match(&variant)
        && (context.contains("histone") || context.contains("chromatin"))
    {
        return true;
    }

    if LAB_CODE_REGEX.is_match(&variant)
        && variant.len() <= 4
        && LAB_CODE_CONTEXT
            .iter()
            .any(|keyword| context.contains(keyword))
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn terms() -> HashSet<&'static str> {
        FALSE_POSITIVE_TERMS.iter().copied().collect()
    }

    #[rstest]
    // Histone marks and codes
    #[case("H3K4me3", "we used the antibody in this experiment", true)]
    #[case("H3K4", "histone h3k4 methylation", true)]
    #[case("H2A", "histone h2a modification", true)]
    #[case("H9Zq", "histone tail near the chromatin fiber", true)]
    // Lab codes and reagents
    #[case("U5F", "experimental condition", true)]
    #[case("tris", "the gel ran in tris", true)]
    #[case("A1BZ", "buffer containing a1bz and other reagents", false)]
    #[case("a9x", "reagent stock", true)]
    // Short strings fall unless they are dbSNP ids
    #[case("V6E", "the pathogenic mutation", true)]
    #[case("rs1", "associated with disease", false)]
    // Real variants pass
    #[case("rs123456", "genetic variant rs123456", false)]
    #[case("c.123A>G", "mutation c.123a>g in brca1", false)]
    #[case("p.Val600Glu", "oncogenic substitution", false)]
    #[case("H9Zq", "the missense mutation", false)]
    fn test_is_blacklisted(#[case] variant: &str, #[case] context: &str, #[case] expected: bool) {
        assert_eq!(is_blacklisted(&terms(), variant, context), expected);
    }
}
