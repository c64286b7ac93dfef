//! The RSLP reduction rule catalogue.
//!
//! Seven groups, applied by [`RslpStemmer`](super::RslpStemmer) in the order
//! held by [`CATALOGUE`]. Within a group the order of rules is significant:
//! the first rule whose suffix matches in its region, and is not blocked by
//! one of its exceptions, is the only one that fires.
//!
//! The tables are part of the stemmer's behaviour, not configuration. Any
//! edit changes the stems produced for existing indexes.

use ahash::AHashSet;

use super::reduction::{Condition, ExceptionMode, ReductionGroup, ReductionRule};
use super::token::Region::{R0, R1, R2, R3, R4, R5, R6};
use super::token::Region;
use crate::error::{Result, RslpError};

const fn rule(suffix: &'static str, replacement: &'static str, region: Region) -> ReductionRule {
    ReductionRule::new(suffix, replacement, region)
}

/// The full, ordered set of reduction groups.
#[derive(Debug)]
pub struct Catalogue {
    /// Applied in order, each one whether or not the previous one fired.
    pub always: [&'static ReductionGroup; 4],
    /// Tried in order until one of them rewrites the token.
    pub exclusive: [&'static ReductionGroup; 3],
}

/// The Portuguese RSLP catalogue.
pub static CATALOGUE: Catalogue = Catalogue {
    always: [&PLURAL, &ADVERB, &FEMININE, &AUGMENTATIVE],
    exclusive: [&NOUN, &VERB, &VOWEL],
};

impl Catalogue {
    /// All groups in processing order.
    pub fn groups(&self) -> impl Iterator<Item = &'static ReductionGroup> + '_ {
        self.always.iter().chain(self.exclusive.iter()).copied()
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&'static ReductionGroup> {
        self.groups().find(|group| group.name == name)
    }

    /// Total number of rules across all groups.
    pub fn rule_count(&self) -> usize {
        self.groups().map(|group| group.rules.len()).sum()
    }

    /// Check every group and rule for malformed entries.
    ///
    /// A replacement may only be longer than the suffix it replaces when it
    /// begins with that suffix, i.e. when it restores a truncated ending
    /// such as `ã` → `ão`.
    pub fn validate(&self) -> Result<()> {
        let mut names = AHashSet::new();
        for group in self.groups() {
            if !names.insert(group.name) {
                return Err(RslpError::catalogue(format!(
                    "duplicate group name '{}'",
                    group.name
                )));
            }
            validate_group(group)?;
        }
        Ok(())
    }
}

fn validate_group(group: &ReductionGroup) -> Result<()> {
    let fail = |msg: String| Err(RslpError::catalogue(format!("group '{}': {msg}", group.name)));

    if group.rules.is_empty() {
        return fail("no rules".to_string());
    }

    if let Some(condition) = &group.condition {
        if condition.suffixes.is_empty() || condition.suffixes.iter().any(|s| s.is_empty()) {
            return fail("condition needs at least one non-empty suffix".to_string());
        }
    }

    let mut seen = AHashSet::new();
    for rule in group.rules {
        if rule.suffix.is_empty() {
            return fail("rule with an empty suffix".to_string());
        }
        if !seen.insert(rule.suffix) {
            return fail(format!("suffix '{}' listed twice", rule.suffix));
        }
        if !is_lowercase(rule.suffix) || !is_lowercase(rule.replacement) {
            return fail(format!("rule '{}' is not lowercase", rule.suffix));
        }

        let grows = rule.replacement.chars().count() > rule.suffix.chars().count();
        if grows && !rule.replacement.starts_with(rule.suffix) {
            return fail(format!(
                "rule '{}' -> '{}' lengthens the word",
                rule.suffix, rule.replacement
            ));
        }

        if let Some(exceptions) = rule.exceptions {
            if exceptions.is_empty() {
                return fail(format!("rule '{}' has an empty exception list", rule.suffix));
            }
            if let Some(bad) = exceptions.iter().find(|e| e.is_empty() || !is_lowercase(e)) {
                return fail(format!(
                    "rule '{}' has a malformed exception '{bad}'",
                    rule.suffix
                ));
            }
        }
    }

    Ok(())
}

fn is_lowercase(s: &str) -> bool {
    s.chars().all(|c| !c.is_uppercase())
}

/// Plural endings. Only words of three or more characters ending in `s`.
pub static PLURAL: ReductionGroup = ReductionGroup {
    name: "plural",
    condition: Some(Condition {
        suffixes: &["s"],
        min_length: 3,
    }),
    exception_mode: ExceptionMode::Suffix,
    rules: &[
        rule("algumas", "algum", R0),
        rule("ênseis", "ênsil", R0),
        rule("ísseis", "íssel", R0),
        rule("ósseis", "óssil", R0),
        rule("ágeis", "ágil", R0),
        rule("ébeis", "ébil", R0),
        rule("éreis", "éril", R0),
        rule("teis", "til", R0),
        rule("ões", "ão", R3),
        rule("ães", "ão", R1).except(&["mães"]),
        rule("ais", "al", R1).except(&["cais", "mais"]),
        rule("éis", "el", R2),
        rule("eis", "el", R2),
        rule("óis", "ol", R2),
        rule("les", "l", R3),
        rule("res", "r", R3),
        rule("ns", "m", R1),
        rule("is", "il", R2).except(&[
            "lápis", "cais", "mais", "crúcis", "biquínis", "pois", "depois", "dois", "leis",
        ]),
        rule("s", "", R2).except(&[
            "aliás", "pires", "lápis", "cais", "mais", "mas", "menos", "férias", "fezes",
            "pêsames", "crúcis", "gás", "atrás", "moisés", "através", "convés", "ês", "país",
            "após", "ambas", "ambos", "messias",
        ]),
    ],
};

/// The `-mente` adverb ending.
pub static ADVERB: ReductionGroup = ReductionGroup {
    name: "adverb",
    condition: None,
    exception_mode: ExceptionMode::Suffix,
    rules: &[
        rule("mente", "", R4).except(&["experimente"]),
    ],
};

/// Feminine endings, restored to their masculine form.
pub static FEMININE: ReductionGroup = ReductionGroup {
    name: "feminine",
    condition: Some(Condition {
        suffixes: &["a", "ã"],
        min_length: 3,
    }),
    exception_mode: ExceptionMode::Exact,
    rules: &[
        rule("ânea", "âneo", R3).except(&["coletânea", "miscelânea"]),
        rule("inha", "inho", R3).except(&["rainha", "linha", "minha"]),
        rule("íaca", "íaco", R3),
        rule("eira", "eiro", R3).except(&[
            "beira", "cadeira", "frigideira", "bandeira", "feira", "capoeira", "barreira",
            "fronteira", "besteira", "poeira",
        ]),
        rule("ona", "ão", R3).except(&[
            "abandona", "lona", "iona", "cortisona", "monótona", "maratona", "acetona", "detona",
            "carona",
        ]),
        rule("ora", "or", R3),
        rule("esa", "ês", R3).except(&[
            "mesa", "obesa", "princesa", "turquesa", "ilesa", "pesa", "presa",
        ]),
        rule("osa", "oso", R3).except(&["mucosa", "prosa"]),
        rule("ica", "ico", R3).except(&["dica"]),
        rule("ada", "ado", R2).except(&["pitada"]),
        rule("ida", "ido", R3).except(&["vida"]),
        rule("ída", "ido", R3).except(&["recaída", "saída", "dúvida"]),
        rule("imo", "imo", R3).except(&["vítima"]),
        rule("iva", "ivo", R3).except(&["saliva", "oliva"]),
        rule("na", "no", R4).except(&[
            "carona", "abandona", "lona", "iona", "cortisona", "monótona", "maratona", "acetona",
            "detona", "guiana", "campana", "grana", "caravana", "banana", "paisana",
        ]),
        rule("ea", "eo", R3).except(&[
            "área", "áurea", "côdea", "fêmea", "rédea", "alínea", "córnea", "drágea", "náusea",
            "várzea", "orquídea",
        ]),
        rule("ã", "ão", R2).except(&["amanhã", "arapuã", "fã", "divã"]),
    ],
};

/// Augmentative and diminutive endings.
pub static AUGMENTATIVE: ReductionGroup = ReductionGroup {
    name: "augmentative",
    condition: None,
    exception_mode: ExceptionMode::Exact,
    rules: &[
        rule("abilíssimo", "", R5),
        rule("díssimo", "", R5),
        rule("érrimo", "", R4),
        rule("íssimo", "", R3),
        rule("quinho", "c", R4),
        rule("adinho", "", R3),
        rule("zarrão", "", R3),
        rule("arraz", "", R4),
        rule("arrão", "", R4),
        rule("alhão", "", R4),
        rule("ésimo", "", R3),
        rule("zinho", "", R2),
        rule("uinho", "", R4),
        rule("inho", "", R3).except(&["caminho", "cominho"]),
        rule("adão", "", R4),
        rule("idão", "", R4),
        rule("ázio", "", R3).except(&["topázio"]),
        rule("arra", "", R3),
        rule("uça", "", R4),
        rule("aço", "", R4).except(&["antebraço"]),
        rule("aça", "", R4),
        rule("zão", "", R2).except(&["coalizão"]),
        rule("ão", "", R3).except(&[
            "camarão", "chimarrão", "canção", "coração", "embrião", "grotão", "glutão", "ficção",
            "fogão", "feição", "furacão", "gamão", "lampião", "leão", "macacão", "nação", "órfão",
            "orgão", "patrão", "portão", "quinhão", "rincão", "tração", "falcão", "espião",
            "mamão", "folião", "cordão", "aptidão", "campeão", "colchão", "limão", "leilão",
            "melão", "barão", "milhão", "bilhão", "fusão", "cristão", "ilusão", "capitão",
            "estação", "senão",
        ]),
    ],
};

/// Noun and adjective derivational endings.
pub static NOUN: ReductionGroup = ReductionGroup {
    name: "noun",
    condition: None,
    exception_mode: ExceptionMode::Exact,
    rules: &[
        rule("encialista", "", R4),
        rule("abilidade", "", R5),
        rule("icionista", "", R4),
        rule("cionista", "", R5),
        rule("alístico", "", R3),
        rule("ividade", "", R4),
        rule("ionista", "", R5),
        rule("iamento", "", R4),
        rule("alizado", "", R4),
        rule("atizado", "", R4),
        rule("alista", "", R5),
        rule("amento", "", R3).except(&["firmamento", "fundamento", "departamento"]),
        rule("imento", "", R3),
        rule("tizado", "", R4).except(&["alfabetizado"]),
        rule("atoria", "", R5),
        rule("edouro", "", R3),
        rule("queiro", "c", R3),
        rule("gueiro", "g", R2),
        rule("adeiro", "", R4).except(&["desfiladeiro"]),
        rule("alizaç", "", R5),
        rule("atizaç", "", R5),
        rule("atório", "", R3),
        rule("alismo", "", R4),
        rule("ivismo", "", R4),
        rule("ástico", "", R4).except(&["eclesiástico"]),
        rule("áutico", "", R4),
        rule("êutico", "", R4),
        rule("encial", "", R5),
        rule("idade", "", R4).except(&["autoridade", "comunidade"]),
        rule("quice", "c", R4),
        rule("tizaç", "", R5),
        rule("mento", "", R6).except(&[
            "firmamento", "elemento", "complemento", "instrumento", "departamento",
        ]),
        rule("izado", "", R5).except(&["organizado", "pulverizado"]),
        rule("ativo", "", R4).except(&["pejorativo", "relativo"]),
        rule("ionar", "", R5),
        rule("ional", "", R4),
        rule("ência", "", R3),
        rule("ância", "", R4).except(&["ambulância"]),
        rule("agem", "", R3).except(&["coragem", "chantagem", "vantagem", "carruagem"]),
        rule("tivo", "", R4).except(&["relativo"]),
        rule("ador", "", R3),
        rule("edor", "", R3),
        rule("idor", "", R4).except(&["ouvidor"]),
        rule("eiro", "", R3).except(&["desfiladeiro", "pioneiro", "mosteiro"]),
        rule("uoso", "", R3),
        rule("izaç", "", R5).except(&["organizaç"]),
        rule("ário", "", R3).except(&[
            "voluntário", "salário", "aniversário", "diário", "lionário", "armário",
        ]),
        rule("tico", "", R3).except(&[
            "político", "eclesiástico", "diagnostico", "prático", "doméstico", "diagnóstico",
            "idêntico", "alopático", "artístico", "autêntico", "eclético", "crítico", "critico",
        ]),
        rule("ante", "", R2).except(&[
            "gigante", "elefante", "adiante", "possante", "instante", "restaurante",
        ]),
        rule("esco", "", R4),
        rule("ério", "", R6),
        rule("oria", "", R4).except(&["categoria"]),
        rule("ismo", "", R3).except(&["cinismo"]),
        rule("íaco", "", R3),
        rule("ente", "", R4).except(&[
            "frequente", "alimente", "acrescente", "permanente", "oriente", "aparente",
        ]),
        rule("ense", "", R5),
        rule("inal", "", R3),
        rule("ista", "", R4),
        rule("auta", "", R5),
        rule("ável", "", R2).except(&["afável", "razoável", "potável", "vulnerável"]),
        rule("ível", "", R3).except(&["possível"]),
        rule("ural", "", R4),
        rule("âneo", "", R0),
        rule("ice", "", R4).except(&["cúmplice"]),
        rule("ano", "", R4),
        rule("vel", "", R5).except(&["possível", "vulnerável", "solúvel"]),
        rule("bil", "vel", R3),
        rule("ura", "", R4).except(&["imatura", "acupuntura", "costura"]),
        rule("ual", "", R3).except(&["bissexual", "virtual", "visual", "pontual"]),
        rule("ial", "", R3),
        rule("ico", "", R4).except(&["tico", "público", "explico"]),
        rule("eza", "", R3),
        rule("rio", "", R5).except(&[
            "voluntário", "salário", "aniversário", "diário", "compulsório", "lionário", "próprio",
            "stério", "armário",
        ]),
        rule("oso", "", R3).except(&["precioso"]),
        rule("ivo", "", R4).except(&["passivo", "possessivo", "pejorativo", "positivo"]),
        rule("ado", "", R2).except(&["grado"]),
        rule("ido", "", R3).except(&[
            "cândido", "consolido", "rápido", "decido", "tímido", "duvido", "marido",
        ]),
        rule("dor", "", R4).except(&["ouvidor"]),
        rule("sor", "", R4).except(&["assessor"]),
        rule("tor", "", R3).except(&[
            "benfeitor", "leitor", "editor", "pastor", "produtor", "promotor", "consultor",
        ]),
        rule("or", "", R2).except(&[
            "motor", "melhor", "redor", "rigor", "sensor", "tambor", "tumor", "assessor",
            "benfeitor", "pastor", "terior", "favor", "autor",
        ]),
        rule("aç", "", R3).except(&["equaç", "relaç"]),
        rule("iç", "", R3).except(&["eleiç"]),
        rule("ês", "", R4),
        rule("ez", "", R4),
        rule("eo", "", R0),
        rule("al", "", R2).except(&[
            "afinal", "animal", "estatal", "bissexual", "desleal", "fiscal", "formal", "pessoal",
            "liberal", "postal", "virtual", "visual", "pontual", "sideral", "sucursal",
        ]),
    ],
};

/// Verb inflections.
pub static VERB: ReductionGroup = ReductionGroup {
    name: "verb",
    condition: None,
    exception_mode: ExceptionMode::Suffix,
    rules: &[
        rule("aríamo", "", R2),
        rule("ássemo", "", R2),
        rule("eríamo", "", R2),
        rule("êssemo", "", R2),
        rule("iríamo", "", R3),
        rule("íssemo", "", R3),
        rule("aremo", "", R2),
        rule("ariam", "", R2),
        rule("aríei", "", R2),
        rule("ássei", "", R2),
        rule("assem", "", R2),
        rule("ávamo", "", R2),
        rule("êramo", "", R3),
        rule("eremo", "", R3),
        rule("eriam", "", R3),
        rule("eríei", "", R3),
        rule("êssei", "", R3),
        rule("essem", "", R3),
        rule("íramo", "", R3),
        rule("iremo", "", R3),
        rule("iriam", "", R3),
        rule("iríei", "", R3),
        rule("íssei", "", R3),
        rule("issem", "", R3),
        rule("áramo", "", R2),
        rule("tizar", "", R4).except(&["alfabetizar"]),
        rule("izar", "", R5).except(&["organizar"]),
        rule("itar", "", R5).except(&["acreditar", "explicitar", "estreitar"]),
        rule("árei", "", R2),
        rule("ando", "", R2),
        rule("endo", "", R3),
        rule("indo", "", R3),
        rule("ondo", "", R3),
        rule("aram", "", R2),
        rule("arão", "", R2),
        rule("arde", "", R2),
        rule("arei", "", R2),
        rule("arem", "", R2),
        rule("aria", "", R2),
        rule("armo", "", R2),
        rule("asse", "", R2),
        rule("aste", "", R2),
        rule("avam", "", R2).except(&["agravam"]),
        rule("ávei", "", R2),
        rule("eram", "", R3),
        rule("erão", "", R3),
        rule("erde", "", R3),
        rule("erei", "", R3),
        rule("êrei", "", R3),
        rule("erem", "", R3),
        rule("eria", "", R3),
        rule("ermo", "", R3),
        rule("esse", "", R3),
        rule("este", "", R3).except(&["faroeste", "agreste"]),
        rule("íamo", "", R3),
        rule("iram", "", R3),
        rule("íram", "", R3),
        rule("irão", "", R2),
        rule("irde", "", R2),
        rule("irei", "", R3).except(&["admirei"]),
        rule("irem", "", R3).except(&["adquirem"]),
        rule("iria", "", R3),
        rule("irmo", "", R3),
        rule("isse", "", R3),
        rule("iste", "", R4),
        rule("iava", "", R4).except(&["ampliava"]),
        rule("iona", "", R3),
        rule("guem", "g", R3),
        rule("eado", "", R3),
        rule("amo", "", R2),
        rule("ara", "", R2).except(&["arara", "prepara"]),
        rule("ará", "", R2).except(&["alvará"]),
        rule("are", "", R2).except(&["prepare"]),
        rule("ava", "", R2).except(&["agrava"]),
        rule("emo", "", R2),
        rule("era", "", R3).except(&["acelera", "espera"]),
        rule("erá", "", R3),
        rule("ere", "", R3).except(&["espere"]),
        rule("iam", "", R3).except(&["enfiam", "ampliam", "elogiam", "ensaiam"]),
        rule("íei", "", R3),
        rule("imo", "", R3).except(&["reprimo", "intimo", "íntimo", "nimo", "queimo", "ximo"]),
        rule("ira", "", R3).except(&["fronteira", "sátira"]),
        rule("ído", "", R3),
        rule("irá", "", R3),
        rule("ire", "", R3).except(&["adquire"]),
        rule("omo", "", R3),
        rule("ear", "", R3).except(&["nuclear"]),
        rule("uei", "", R3),
        rule("uía", "u", R5),
        rule("eou", "", R5),
        rule("ai", "", R2),
        rule("am", "", R2),
        rule("ar", "", R2).except(&["azar", "bazaar", "patamar"]),
        rule("ei", "", R3),
        rule("em", "", R2).except(&["alem", "virgem"]),
        rule("er", "", R2).except(&["éter", "pier"]),
        rule("eu", "", R3).except(&["chapeu"]),
        rule("ia", "", R3).except(&[
            "estória", "fatia", "acia", "praia", "elogia", "mania", "lábia", "aprecia", "polícia",
            "arredia", "cheia", "ásia", "família",
        ]),
        rule("ir", "", R3).except(&["freir"]),
        rule("iu", "", R3),
        rule("ou", "", R3),
        rule("i", "", R3),
    ],
};

/// Bare thematic vowels left once nothing else applied.
pub static VOWEL: ReductionGroup = ReductionGroup {
    name: "vowel",
    condition: None,
    exception_mode: ExceptionMode::Suffix,
    rules: &[
        rule("bil", "vel", R2),
        rule("gue", "g", R2).except(&["gangue", "jegue"]),
        rule("en", "", R2),
        rule("on", "", R2),
        rule("á", "", R3),
        rule("é", "", R3),
        rule("í", "", R3),
        rule("ó", "", R3),
        rule("ú", "", R3),
        rule("ê", "", R3).except(&["bebê"]),
        rule("a", "", R3).except(&["ásia"]),
        rule("e", "", R3),
        rule("o", "", R3).except(&["ão"]),
    ],
};
