//! Lexical exceptions.
//!
//! Loanwords and prefixes whose spelling does not follow the native
//! palatalization and voicing rules. They run first, on normalized text, so
//! they mostly force a hard `y` where `di`, `ti`, `ni` would otherwise
//! palatalize. The table is data: entries may be added or corrected without
//! touching the rewriter.

use crate::rewrite::{CharClass, Context, Rule};

/// Vowels that turn a word-initial `ex` into `egz`.
const EX_VOWELS: &str = "aeiouáéíóúů";

pub const LEXICAL_EXCEPTIONS: &[Rule] = &[
    Rule::new("ccitt", "cécéítété"),
    Rule::new("nism", "nyzm"),
    Rule::new("nist", "nyst"),
    Rule::new("anti", "anty"),
    Rule::new("akti", "akty"),
    Rule::new("atik", "atyk"),
    Rule::new("tick", "tyck"),
    Rule::new("kandi", "kandy"),
    Rule::new("nie", "nye"),
    Rule::new("nii", "nyi"),
    Rule::new("arkti", "arkty"),
    Rule::new("atrakti", "atrakty"),
    Rule::new("audi", "audy"),
    Rule::new("automati", "automaty"),
    Rule::new("causa", "kauza"),
    Rule::new("celsia", "celzia"),
    Rule::new("chil", "čil"),
    Rule::new("danih", "danyh"),
    Rule::new("efektiv", "efektyv"),
    Rule::new("finiti", "finyty"),
    Rule::new("dealer", "dýler"),
    Rule::new("diag", "dyag"),
    Rule::new("diet", "dyet"),
    Rule::new("dif", "dyf"),
    Rule::new("dig", "dyg"),
    Rule::new("dikt", "dykt"),
    Rule::new("dilet", "dylet"),
    Rule::new("dipl", "dypl"),
    Rule::new("dirig", "dyryg"),
    Rule::new("disk", "dysk"),
    Rule::new("display", "dysplej"),
    Rule::new("disp", "dysp"),
    Rule::new("dist", "dyst"),
    Rule::new("divide", "dyvide"),
    Rule::new("dukti", "dukty"),
    Rule::new("edic", "edyc"),
    Rule::new("error", "eror"),
    Rule::in_context(
        "ex",
        "egz",
        Context::word_initial().followed_by(CharClass::OneOf(EX_VOWELS)),
    ),
    Rule::new("elektroni", "elektrony"),
    Rule::new("energetik", "energetyk"),
    Rule::new("etik", "etyk"),
    Rule::new("femini", "feminy"),
    Rule::new("finiš", "finyš"),
    Rule::new("monie", "monye"),
    Rule::new("geneti", "genety"),
    Rule::new("gieni", "gieny"),
    Rule::new("imuni", "imuny"),
    Rule::new("indiv", "indyv"),
    Rule::new("inici", "inyci"),
    Rule::new("investi", "investy"),
    Rule::new("karati", "karaty"),
    Rule::new("kardi", "kardy"),
    Rule::new("klaus", "klauz"),
    Rule::new("komuni", "komuny"),
    Rule::new("kondi", "kondy"),
    Rule::new("kredit", "kredyt"),
    Rule::new("kriti", "krity"),
    Rule::new("komodit", "komodyt"),
    Rule::new("konsor", "konzor"),
    Rule::new("leasing", "lízing"),
    Rule::new("giti", "gity"),
    Rule::new("medi", "medy"),
    Rule::new("motiv", "motyv"),
    Rule::new("manag", "menedž"),
    Rule::new("nsti", "nsty"),
    Rule::new("temati", "tematy"),
    Rule::new("mini", "miny"),
    Rule::new("minus", "mínus"),
    Rule::new("ing", "yng"),
    Rule::new("gativ", "gatyv"),
    Rule::new("mati", "maty"),
    Rule::new("manip", "manyp"),
    Rule::new("moderni", "moderny"),
    Rule::new("organi", "organy"),
    Rule::new("optim", "optym"),
    Rule::new("panick", "panyck"),
    Rule::new("pediatr", "pedyatr"),
    Rule::new("perviti", "pervity"),
    Rule::new("politi", "polity"),
    Rule::new("pozit", "pozyt"),
    Rule::new("privati", "privaty"),
    Rule::new("prostitu", "prostytu"),
    Rule::new("radik", "radyk"),
    Rule::word_initial("radio", "radyo"),
    Rule::new("relativ", "relatyv"),
    Rule::new("restitu", "restytu"),
    Rule::new("rock", "rok"),
    Rule::new("rutin", "rutyn"),
    Rule::in_context(
        "rádi",
        "rády",
        Context::word_initial().followed_by(CharClass::NonSpace),
    ),
    Rule::new("shop", "šop"),
    Rule::word_initial("sho", "scho"),
    Rule::new("softwar", "softvér"),
    Rule::new("sortim", "sortym"),
    Rule::new("spektiv", "spektyv"),
    Rule::new("superlativ", "superlatyv"),
    Rule::new("nj", "ň"),
    Rule::new("statisti", "statysty"),
    Rule::new("stik", "styk"),
    Rule::new("stimul", "stymul"),
    Rule::new("studi", "study"),
    Rule::new("techni", "techny"),
    Rule::new("telecom", "telekom"),
    Rule::new("telefoni", "telefony"),
    Rule::new("tetik", "tetyk"),
    Rule::new("textil", "textyl"),
    Rule::new("tibet", "tybet"),
    Rule::new("tirany", "tyrany"),
    Rule::new("titul", "tytul"),
    Rule::new("tradi", "trady"),
    Rule::new("univer", "unyver"),
    Rule::new("venti", "venty"),
    Rule::new("vertik", "vertyk"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RuleSet;

    fn apply(text: &str) -> String {
        RuleSet::compile("lexical-exceptions", LEXICAL_EXCEPTIONS)
            .expect("exception table should compile")
            .apply(text)
    }

    #[test]
    fn test_loanwords_get_hard_y() {
        assert_eq!(apply("diskuse"), "dyskuse");
        assert_eq!(apply("politika"), "polityka");
        assert_eq!(apply("univerzita"), "unyverzita");
    }

    #[test]
    fn test_word_initial_ex_before_vowel() {
        assert_eq!(apply("existence"), "egzistence");
        assert_eq!(apply("export"), "export");
        assert_eq!(apply("reexamen"), "reexamen");
    }

    #[test]
    fn test_radio_only_at_word_start() {
        assert_eq!(apply("radio"), "radyo");
        assert_eq!(apply("autoradio"), "autoradio");
    }

    #[test]
    fn test_radi_needs_a_following_letter() {
        assert_eq!(apply("rádio"), "rádyo");
        assert_eq!(apply("rádi"), "rádi");
    }

    #[test]
    fn test_earlier_rules_shadow_later_ones() {
        // "display" must win over the shorter "disp" that follows it
        assert_eq!(apply("display"), "dysplej");
    }

    #[test]
    fn test_manager_is_respelled_before_digraph_folding() {
        assert_eq!(apply("manager"), "menedžer");
    }
}
