//! Canonicalization of variant notation.
//!
//! Heterogeneous surface forms of the same variant (`c.123a>g` vs `c.123A>G`,
//! `p.Val600Glu` vs `p.V600E`, with or without a leading `variant:` label)
//! are mapped onto a single comparable string. Two raw strings denote the
//! same variant exactly when their normalized forms are equal, which is what
//! the set-based evaluation in [`crate::evaluate`] relies on.

use crate::regex::Regex;
use std::sync::LazyLock;

static DNA_SUBSTITUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([cgpn])\.(\d+)([atcg])>([atcg])").unwrap());

static PROTEIN_3LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p\.([a-z]{3})(\d+)([a-z]{3})").unwrap());

static PROTEIN_1LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p\.([a-z])(\d+)([a-z])\b").unwrap());

/// Labels that sometimes precede the variant text in free-form exports.
const VARIANT_PREFIXES: [&str; 4] = ["variant:", "var:", "mutation:", "mut:"];

/// Normalizes a raw variant string into its canonical comparable form.
///
/// The input is lowercased and trimmed, known leading labels are stripped,
/// HGVS DNA substitutions are rewritten with uppercase ref/alt bases, and
/// protein substitutions are rewritten with single-letter amino-acid codes.
/// Strings that match no known shape are returned lowercased and trimmed.
///
/// Normalization is idempotent: feeding the output back in returns the same
/// string.
///
/// # Examples
///
/// ```
/// use varlit::normalize::normalize;
///
/// assert_eq!(normalize("c.123a>g"), "c.123A>G");
/// assert_eq!(normalize("p.Val600Glu"), "p.V600E");
/// assert_eq!(normalize("Variant: c.456T>C"), "c.456T>C");
/// ```
pub fn normalize(variant: &str) -> String {
    if variant.trim().is_empty() {
        return String::new();
    }

    let mut normalized = variant.to_lowercase().trim().to_string();

    loop {
        let stripped = VARIANT_PREFIXES
            .iter()
            .find_map(|prefix| normalized.strip_prefix(prefix));
        match stripped {
            Some(rest) => normalized = rest.trim().to_string(),
            None => break,
        }
    }

    if let Some(rewritten) = rewrite_dna_substitution(&normalized) {
        normalized = rewritten;
    }

    if let Some(rewritten) = rewrite_protein_3letter(&normalized) {
        normalized = rewritten;
    } else if let Some(rewritten) = rewrite_protein_1letter(&normalized) {
        normalized = rewritten;
    }

    normalized
}

/// Returns true when two raw variant strings denote the same variant.
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// HGVS DNA substitution, e.g. "c.123a>g" -> "c.123A>G".
fn rewrite_dna_substitution(s: &str) -> Option<String> {
    let caps = DNA_SUBSTITUTION_REGEX.captures(s)?;
    Some(format!(
        "{}.{}{}>{}",
        &caps[1],
        &caps[2],
        caps[3].to_uppercase(),
        caps[4].to_uppercase()
    ))
}

/// Protein substitution in 3-letter codes, e.g. "p.val600glu" -> "p.V600E".
///
/// The rewrite only fires when both codes are standard amino acids; anything
/// else stays as-is so that renormalizing an output is a no-op.
fn rewrite_protein_3letter(s: &str) -> Option<String> {
    let caps = PROTEIN_3LETTER_REGEX.captures(s)?;
    let aa1 = amino_acid_code(&caps[1])?;
    let aa2 = amino_acid_code(&caps[3])?;
    Some(format!("p.{}{}{}", aa1, &caps[2], aa2))
}

/// Protein substitution in 1-letter codes, e.g. "p.v600e" -> "p.V600E".
fn rewrite_protein_1letter(s: &str) -> Option<String> {
    let caps = PROTEIN_1LETTER_REGEX.captures(s)?;
    Some(format!(
        "p.{}{}{}",
        caps[1].to_uppercase(),
        &caps[2],
        caps[3].to_uppercase()
    ))
}

/// Maps a lowercase 3-letter amino acid code to its 1-letter code.
fn amino_acid_code(code: &str) -> Option<char> {
    match code {
        "ala" => Some('A'),
        "arg" => Some('R'),
        "asn" => Some('N'),
        "asp" => Some('D'),
        "cys" => Some('C'),
        "gln" => Some('Q'),
        "glu" => Some('E'),
        "gly" => Some('G'),
        "his" => Some('H'),
        "ile" => Some('I'),
        "leu" => Some('L'),
        "lys" => Some('K'),
        "met" => Some('M'),
        "phe" => Some('F'),
        "pro" => Some('P'),
        "ser" => Some('S'),
        "thr" => Some('T'),
        "trp" => Some('W'),
        "tyr" => Some('Y'),
        "val" => Some('V'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("c.123A>G", "c.123A>G")]
    #[case("c.123a>g", "c.123A>G")]
    #[case("C.123A>G", "c.123A>G")]
    #[case("g.456t>c", "g.456T>C")]
    #[case("p.Val600Glu", "p.V600E")]
    #[case("p.val600glu", "p.V600E")]
    #[case("p.V600E", "p.V600E")]
    #[case("p.Ala85Pro", "p.A85P")]
    #[case("Variant: c.456T>C", "c.456T>C")]
    #[case("var: c.456t>c", "c.456T>C")]
    #[case("Mutation: p.val600glu", "p.V600E")]
    #[case("mut: rs1234567", "rs1234567")]
    #[case("rs13447455", "rs13447455")]
    #[case("  c.185delAG  ", "c.185delag")]
    #[case("chr7:140453136A>T", "chr7:140453136a>t")]
    #[case("", "")]
    #[case("   ", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("c.123A>G")]
    #[case("c.123a>g")]
    #[case("p.Val600Glu")]
    #[case("p.V600E")]
    #[case("p.Ter494Glu")]
    #[case("p.K100fs")]
    #[case("p.Q120*")]
    #[case("Variant: c.456T>C")]
    #[case("mut: mut: p.val600glu")]
    #[case("rs1234567")]
    #[case("chr7:140453136A>T")]
    #[case("H3K4me3")]
    #[case("not a variant")]
    #[case("")]
    fn test_normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_dna_case_convention() {
        assert_eq!(normalize("c.123a>g"), normalize("c.123A>G"));
        assert_eq!(normalize("c.123A>G"), "c.123A>G");
    }

    #[test]
    fn test_protein_three_letter_equivalence() {
        assert_eq!(normalize("p.Val600Glu"), normalize("p.val600glu"));
        assert_eq!(normalize("p.val600glu"), "p.V600E");
    }

    #[test]
    fn test_prefix_stripping() {
        assert_eq!(normalize("Variant: c.456T>C"), normalize("c.456T>C"));
    }

    #[test]
    fn test_stacked_prefixes() {
        assert_eq!(normalize("mut: variant: c.456t>c"), "c.456T>C");
    }

    #[test]
    fn test_unknown_three_letter_codes_are_left_alone() {
        assert_eq!(normalize("p.Xyz100Abc"), "p.xyz100abc");
    }

    #[rstest]
    #[case("c.123A>G", "c.123a>g", true)]
    #[case("p.Val600Glu", "p.V600E", true)]
    #[case("Variant: rs1", "rs1", true)]
    #[case("c.123A>G", "c.123A>T", false)]
    #[case("p.V600E", "p.V600K", false)]
    fn test_equivalent(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(equivalent(a, b), expected);
    }
}
