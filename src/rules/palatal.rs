//! Palatalization triggered by `ě`, `i` and `í`.

use crate::rewrite::{CharClass, Context, Rule};

/// `ě` softens the preceding consonant or, after labials, adds a `j`.
pub const E_CARON: &[Rule] = &[
    Rule::in_context(
        "ě",
        "je",
        Context::ANYWHERE.preceded_by(CharClass::OneOf("bpfv")),
    ),
    Rule::new("dě", "ďe"),
    Rule::new("tě", "ťe"),
    Rule::new("ně", "ňe"),
    Rule::new("mě", "mňe"),
    // anything left over is read as [je]
    Rule::new("ě", "je"),
];

/// `i` and `í` soften a preceding `d`, `t` or `n`.
pub const I_VOWELS: &[Rule] = &[
    Rule::new("di", "ďi"),
    Rule::new("ti", "ťi"),
    Rule::new("ni", "ňi"),
    Rule::new("dí", "ďí"),
    Rule::new("tí", "ťí"),
    Rule::new("ní", "ňí"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RuleSet;

    fn apply(rules: &[Rule], text: &str) -> String {
        RuleSet::compile("test", rules)
            .expect("table should compile")
            .apply(text)
    }

    #[test]
    fn test_labials_take_je() {
        assert_eq!(apply(E_CARON, "běh pěna věc"), "bjeh pjena vjec");
    }

    #[test]
    fn test_dentals_soften() {
        assert_eq!(apply(E_CARON, "děti tělo něco"), "ďeti ťelo ňeco");
    }

    #[test]
    fn test_m_inserts_palatal_nasal() {
        assert_eq!(apply(E_CARON, "město"), "mňesto");
    }

    #[test]
    fn test_remaining_e_caron_falls_back_to_je() {
        assert_eq!(apply(E_CARON, "sě"), "sje");
    }

    #[test]
    fn test_i_softens_dental() {
        assert_eq!(
            apply(I_VOWELS, "divadlo tisk nic dílo tíha níže"),
            "ďivadlo ťisk ňic ďílo ťíha ňíže"
        );
    }

    #[test]
    fn test_y_does_not_soften() {
        assert_eq!(apply(I_VOWELS, "dým ty ny"), "dým ty ny");
    }
}
