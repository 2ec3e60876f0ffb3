//! # Léxico PT-BR — Classes Fechadas, Stopwords e Lemas
//!
//! Recursos lexicais embutidos que alimentam o anotador: listas de palavras
//! de classe fechada (determinantes, preposições, pronomes, auxiliares),
//! stopwords, lemas irregulares e heurísticas de sufixo para adivinhar a
//! classe gramatical de palavras desconhecidas.
//!
//! Num sistema real esses recursos viriam de um modelo treinado; aqui são
//! codificados manualmente, refletindo as regularidades mais fortes do
//! português. A lematização por sufixo é uma aproximação: cobre as
//! conjugações regulares (-ou → -ar, -eu → -er, -iu → -ir) e uma tabela de
//! irregulares frequentes.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::dep::PosTag;

/// Artigos e demonstrativos
const DETERMINERS: &[&str] = &[
    "o", "a", "os", "as", "um", "uma", "uns", "umas", "este", "esta", "estes",
    "estas", "esse", "essa", "esses", "essas", "aquele", "aquela", "aqueles",
    "aquelas", "seu", "sua", "seus", "suas", "meu", "minha", "nosso", "nossa",
    "cada", "todo", "toda", "todos", "todas",
];

/// Preposições e contrações preposição+artigo
const PREPOSITIONS: &[&str] = &[
    "de", "do", "da", "dos", "das", "em", "no", "na", "nos", "nas", "por",
    "pelo", "pela", "pelos", "pelas", "para", "com", "sem", "sobre", "entre",
    "até", "após", "desde", "contra", "durante", "ao", "aos", "à", "às",
];

/// Pronomes pessoais e relativos
const PRONOUNS: &[&str] = &[
    "eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "você", "vocês",
    "me", "te", "se", "lhe", "lhes", "isso", "isto", "aquilo", "quem", "que",
    "qual", "quais", "algo", "alguém", "ninguém", "tudo", "nada",
];

/// Formas dos verbos auxiliares ser/estar/ter/haver/ir
const AUXILIARIES: &[&str] = &[
    "é", "são", "foi", "foram", "era", "eram", "será", "serão", "seria",
    "seriam", "ser", "sendo", "sido", "fui", "fomos", "seja", "sejam",
    "está", "estão", "estava", "estavam", "estará", "estar", "estando",
    "tem", "têm", "tinha", "tinham", "terá", "terão", "ter", "tendo", "tido",
    "há", "havia", "haverá", "haver", "vai", "vão", "ia", "iam", "irá",
    "irão", "ir", "indo",
];

/// Formas do verbo "ser" — o auxiliar da passiva perifrástica
const SER_FORMS: &[&str] = &[
    "é", "são", "foi", "foram", "era", "eram", "será", "serão", "seria",
    "seriam", "ser", "sendo", "sido", "fui", "fomos", "seja", "sejam",
];

/// Conjunções coordenativas
const CONJUNCTIONS: &[&str] = &["e", "ou", "mas", "porém", "nem", "pois"];

/// Advérbios frequentes que os sufixos não capturam
const ADVERBS: &[&str] = &[
    "não", "sim", "já", "ainda", "sempre", "nunca", "muito", "pouco", "mais",
    "menos", "bem", "mal", "hoje", "ontem", "amanhã", "agora", "depois",
    "antes", "aqui", "ali", "lá", "rápido", "devagar", "também", "só",
    "apenas", "quase", "talvez",
];

/// Stopwords de PT-BR (função gramatical, sem conteúdo lexical)
const STOPWORDS: &[&str] = &[
    "o", "a", "os", "as", "um", "uma", "uns", "umas", "de", "do", "da",
    "dos", "das", "em", "no", "na", "nos", "nas", "por", "pelo", "pela",
    "pelos", "pelas", "para", "com", "sem", "ao", "aos", "à", "às", "e",
    "ou", "mas", "nem", "que", "se", "não", "é", "são", "foi", "foram",
    "era", "eram", "ser", "está", "estão", "tem", "têm", "há", "como",
    "quando", "onde", "isso", "isto", "ele", "ela", "eles", "elas", "eu",
    "nós", "você", "seu", "sua", "seus", "suas", "me", "te", "lhe", "já",
    "mais", "menos", "muito", "também", "só",
];

/// Lemas irregulares: forma flexionada → forma de dicionário
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("é", "ser"), ("são", "ser"), ("foi", "ser"), ("foram", "ser"),
    ("era", "ser"), ("eram", "ser"), ("será", "ser"), ("serão", "ser"),
    ("fui", "ser"), ("sendo", "ser"), ("sido", "ser"),
    ("está", "estar"), ("estão", "estar"), ("estava", "estar"),
    ("estavam", "estar"), ("estando", "estar"),
    ("tem", "ter"), ("têm", "ter"), ("tinha", "ter"), ("tinham", "ter"),
    ("tendo", "ter"), ("tido", "ter"),
    ("há", "haver"), ("havia", "haver"),
    ("vai", "ir"), ("vão", "ir"), ("ia", "ir"), ("iam", "ir"), ("indo", "ir"),
    ("fez", "fazer"), ("feito", "fazer"), ("fizeram", "fazer"),
    ("disse", "dizer"), ("dito", "dizer"), ("disseram", "dizer"),
    ("viu", "ver"), ("visto", "ver"), ("viram", "ver"),
    ("veio", "vir"), ("vieram", "vir"), ("vindo", "vir"),
    ("pôs", "pôr"), ("posto", "pôr"),
    ("escrito", "escrever"), ("aberto", "abrir"), ("coberto", "cobrir"),
    ("pago", "pagar"),
];

/// Particípios irregulares (não terminam em -ado/-ido)
const IRREGULAR_PARTICIPLES: &[&str] = &[
    "feito", "dito", "visto", "posto", "escrito", "aberto", "coberto",
    "pago", "ganho", "gasto", "aceito",
];

/// O léxico compilado, construído uma única vez e compartilhado pelo
/// anotador (nunca estado global: quem precisa recebe por referência).
pub struct Lexicon {
    determiners: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    ser_forms: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    stopwords: HashSet<&'static str>,
    irregular_lemmas: HashMap<&'static str, &'static str>,
    irregular_participles: HashSet<&'static str>,
    number_re: Regex,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            determiners: DETERMINERS.iter().copied().collect(),
            prepositions: PREPOSITIONS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            ser_forms: SER_FORMS.iter().copied().collect(),
            conjunctions: CONJUNCTIONS.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            stopwords: STOPWORDS.iter().copied().collect(),
            irregular_lemmas: IRREGULAR_LEMMAS.iter().copied().collect(),
            irregular_participles: IRREGULAR_PARTICIPLES.iter().copied().collect(),
            // Inteiros, decimais e números com separador de milhar
            number_re: Regex::new(r"^\d+([.,]\d+)*$").expect("regex de número válida"),
        }
    }

    /// A palavra é stopword?
    pub fn is_stop(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }

    /// A palavra é forma do verbo "ser" (candidata a auxiliar de passiva)?
    pub fn is_ser_form(&self, word: &str) -> bool {
        self.ser_forms.contains(word.to_lowercase().as_str())
    }

    /// A palavra é um particípio passado?
    pub fn is_participle(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        if self.irregular_participles.contains(lower.as_str()) {
            return true;
        }
        let stem = lower
            .strip_suffix('s')
            .unwrap_or(&lower);
        ["ado", "ada", "ido", "ida"]
            .iter()
            .any(|suf| stem.ends_with(suf) && stem.len() > suf.len() + 1)
    }

    /// Adivinha a classe gramatical de um token isolado.
    ///
    /// Ordem de decisão: pontuação → número → classes fechadas (por lookup
    /// em minúsculas, para cobrir início de sentença) → sufixos → nome
    /// próprio (maiúscula fora do início da sentença) → substantivo.
    pub fn guess_pos(&self, word: &str, sentence_initial: bool) -> PosTag {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punct;
        }
        if self.number_re.is_match(word) {
            return PosTag::Num;
        }

        let lower = word.to_lowercase();
        let lower = lower.as_str();
        if self.determiners.contains(lower) {
            return PosTag::Det;
        }
        if self.prepositions.contains(lower) {
            return PosTag::Adp;
        }
        if self.auxiliaries.contains(lower) {
            return PosTag::Aux;
        }
        if self.pronouns.contains(lower) {
            return PosTag::Pron;
        }
        if self.conjunctions.contains(lower) {
            return PosTag::Cconj;
        }
        if self.adverbs.contains(lower) || lower.ends_with("mente") {
            return PosTag::Adv;
        }

        if self.is_participle(word) || has_verb_suffix(lower) {
            return PosTag::Verb;
        }
        if has_adjective_suffix(lower) {
            return PosTag::Adj;
        }

        let capitalized = word.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
        if capitalized && !sentence_initial {
            return PosTag::Propn;
        }

        PosTag::Noun
    }

    /// Lematiza uma palavra dada sua classe gramatical.
    pub fn lemma_of(&self, word: &str, pos: PosTag) -> String {
        let lower = word.to_lowercase();
        if let Some(lemma) = self.irregular_lemmas.get(lower.as_str()) {
            return (*lemma).to_string();
        }

        match pos {
            PosTag::Verb | PosTag::Aux => verb_lemma(&lower),
            PosTag::Noun | PosTag::Adj => noun_lemma(&lower),
            _ => lower,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminações exclusivamente verbais do português
fn has_verb_suffix(lower: &str) -> bool {
    const SUFFIXES: &[&str] = &[
        "ou", "aram", "eram", "iram", "eu", "iu", "ava", "avam", "ando",
        "endo", "indo", "ará", "erá", "irá", "arão", "erão", "irão",
    ];
    SUFFIXES
        .iter()
        .any(|suf| lower.ends_with(suf) && lower.len() > suf.len() + 1)
}

/// Terminações tipicamente adjetivais
fn has_adjective_suffix(lower: &str) -> bool {
    const SUFFIXES: &[&str] = &[
        "oso", "osa", "osos", "osas", "ivo", "iva", "ivos", "ivas", "ável",
        "ível", "eiro", "eira",
    ];
    SUFFIXES
        .iter()
        .any(|suf| lower.ends_with(suf) && lower.len() > suf.len() + 1)
}

/// Lema verbal por sufixo: cobre as três conjugações regulares.
fn verb_lemma(lower: &str) -> String {
    const RULES: &[(&str, &str)] = &[
        ("aram", "ar"), ("eram", "er"), ("iram", "ir"),
        ("ando", "ar"), ("endo", "er"), ("indo", "ir"),
        ("ados", "ar"), ("adas", "ar"), ("idos", "ir"), ("idas", "ir"),
        ("ado", "ar"), ("ada", "ar"), ("ido", "ir"), ("ida", "ir"),
        ("avam", "ar"), ("ava", "ar"),
        ("arão", "ar"), ("erão", "er"), ("irão", "ir"),
        ("ará", "ar"), ("erá", "er"), ("irá", "ir"),
        ("ou", "ar"), ("eu", "er"), ("iu", "ir"),
    ];
    for (suffix, replacement) in RULES {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{replacement}");
            }
        }
    }
    lower.to_string()
}

/// Lema nominal: remove marcas de plural mais comuns.
fn noun_lemma(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ões") {
        return format!("{stem}ão");
    }
    if let Some(stem) = lower.strip_suffix("ais") {
        return format!("{stem}al");
    }
    if lower.len() > 3 {
        if let Some(stem) = lower.strip_suffix('s') {
            if !stem.ends_with('s') {
                return stem.to_string();
            }
        }
    }
    lower.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_fechadas() {
        let lex = Lexicon::new();
        assert_eq!(lex.guess_pos("o", false), PosTag::Det);
        assert_eq!(lex.guess_pos("O", true), PosTag::Det);
        assert_eq!(lex.guess_pos("pelo", false), PosTag::Adp);
        assert_eq!(lex.guess_pos("foi", false), PosTag::Aux);
        assert_eq!(lex.guess_pos("ele", false), PosTag::Pron);
        assert_eq!(lex.guess_pos("e", false), PosTag::Cconj);
    }

    #[test]
    fn test_pos_por_sufixo() {
        let lex = Lexicon::new();
        assert_eq!(lex.guess_pos("perseguiu", false), PosTag::Verb);
        assert_eq!(lex.guess_pos("perseguido", false), PosTag::Verb);
        assert_eq!(lex.guess_pos("rapidamente", false), PosTag::Adv);
        assert_eq!(lex.guess_pos("famoso", false), PosTag::Adj);
        assert_eq!(lex.guess_pos("2023", false), PosTag::Num);
        assert_eq!(lex.guess_pos("1.234", false), PosTag::Num);
        assert_eq!(lex.guess_pos(".", false), PosTag::Punct);
    }

    #[test]
    fn test_nome_proprio_fora_do_inicio() {
        let lex = Lexicon::new();
        assert_eq!(lex.guess_pos("Brasil", false), PosTag::Propn);
        // No início da sentença a maiúscula não diz nada
        assert_eq!(lex.guess_pos("Gato", true), PosTag::Noun);
    }

    #[test]
    fn test_substantivo_por_default() {
        let lex = Lexicon::new();
        assert_eq!(lex.guess_pos("gato", false), PosTag::Noun);
        assert_eq!(lex.guess_pos("coração", false), PosTag::Noun);
    }

    #[test]
    fn test_lemas_verbais() {
        let lex = Lexicon::new();
        assert_eq!(lex.lemma_of("perseguiu", PosTag::Verb), "perseguir");
        assert_eq!(lex.lemma_of("perseguido", PosTag::Verb), "perseguir");
        assert_eq!(lex.lemma_of("falou", PosTag::Verb), "falar");
        assert_eq!(lex.lemma_of("comeu", PosTag::Verb), "comer");
        assert_eq!(lex.lemma_of("foi", PosTag::Aux), "ser");
        assert_eq!(lex.lemma_of("feito", PosTag::Verb), "fazer");
    }

    #[test]
    fn test_lemas_nominais() {
        let lex = Lexicon::new();
        assert_eq!(lex.lemma_of("gatos", PosTag::Noun), "gato");
        assert_eq!(lex.lemma_of("corações", PosTag::Noun), "coração");
        assert_eq!(lex.lemma_of("animais", PosTag::Noun), "animal");
    }

    #[test]
    fn test_participios() {
        let lex = Lexicon::new();
        assert!(lex.is_participle("perseguido"));
        assert!(lex.is_participle("aprovada"));
        assert!(lex.is_participle("feito"));
        assert!(!lex.is_participle("gato"));
        assert!(!lex.is_participle("ido")); // curto demais para a regra
    }

    #[test]
    fn test_ser_e_stopwords() {
        let lex = Lexicon::new();
        assert!(lex.is_ser_form("foi"));
        assert!(lex.is_ser_form("Foi"));
        assert!(!lex.is_ser_form("tinha"));
        assert!(lex.is_stop("de"));
        assert!(!lex.is_stop("gato"));
    }
}
