//! # Rótulos de Dependência e Classes Gramaticais
//!
//! Define o vocabulário **fechado** de relações de dependência sintática
//! reconhecidas pelo sistema, inspirado no esquema Universal Dependencies (UD).
//!
//! ## Por que um enum fechado?
//!
//! Parsers externos (spaCy, UDPipe, Stanza) expõem o rótulo de dependência
//! como string livre (`"nsubj"`, `"nsubj:pass"`, ...). Comparar strings em
//! cada decisão é frágil: um typo compila e falha silenciosamente. Aqui os
//! rótulos crus são traduzidos **uma única vez** (via [`DepLabel::from_label`])
//! para um conjunto finito de variantes, e o analisador de orações faz
//! `match` exaustivo sobre elas.
//!
//! ## Rótulos Reconhecidos
//!
//! | Rótulo     | Significado                         | Exemplo                        |
//! |------------|-------------------------------------|--------------------------------|
//! | ROOT       | Predicado principal da oração       | O gato **perseguiu** o rato    |
//! | nsubj      | Sujeito nominal (voz ativa)         | O **gato** perseguiu o rato    |
//! | nsubjpass  | Sujeito nominal passivo             | O **rato** foi perseguido      |
//! | obj        | Objeto direto                       | perseguiu o **rato**           |
//! | obl        | Oblíquo (agente, adjuntos)          | perseguido pelo **gato**       |
//! | det        | Determinante                        | **O** gato                     |
//! | amod       | Modificador adjetival               | gato **preto**                 |
//! | aux        | Verbo auxiliar                      | **tinha** perseguido           |
//! | auxpass    | Auxiliar da passiva                 | **foi** perseguido             |
//! | case       | Preposição/marcador de caso         | **pelo** gato                  |
//! | advmod     | Modificador adverbial               | correu **rápido**              |
//! | punct      | Pontuação                           | .                              |
//! | dep        | Qualquer outra relação              | —                              |

use serde::{Deserialize, Serialize};

/// Relação de dependência de um token com seu head.
///
/// Conjunto fechado: tudo que não é reconhecido vira [`DepLabel::Other`],
/// nunca uma string solta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepLabel {
    /// Predicado principal da oração. Por convenção o head de um token ROOT
    /// é ele mesmo (como no spaCy).
    #[serde(rename = "ROOT")]
    Root,
    /// Sujeito nominal de oração na voz ativa.
    Nsubj,
    /// Sujeito nominal de oração na voz passiva.
    #[serde(rename = "nsubjpass")]
    NsubjPass,
    /// Objeto direto do verbo.
    Obj,
    /// Nominal oblíquo: agente da passiva e demais adjuntos preposicionados.
    Obl,
    /// Determinante (artigos, demonstrativos).
    Det,
    /// Adjetivo modificando um nome.
    Amod,
    /// Verbo auxiliar (tempo composto, perífrases).
    Aux,
    /// Auxiliar da voz passiva ("foi", "era", "será" + particípio).
    #[serde(rename = "auxpass")]
    AuxPass,
    /// Preposição ou contração introduzindo um nominal.
    Case,
    /// Advérbio modificando o predicado.
    Advmod,
    /// Pontuação.
    Punct,
    /// Qualquer relação fora do vocabulário acima.
    Other,
}

impl DepLabel {
    /// Rótulo textual no estilo spaCy (para serialização e UI).
    pub fn label(&self) -> &'static str {
        match self {
            DepLabel::Root => "ROOT",
            DepLabel::Nsubj => "nsubj",
            DepLabel::NsubjPass => "nsubjpass",
            DepLabel::Obj => "obj",
            DepLabel::Obl => "obl",
            DepLabel::Det => "det",
            DepLabel::Amod => "amod",
            DepLabel::Aux => "aux",
            DepLabel::AuxPass => "auxpass",
            DepLabel::Case => "case",
            DepLabel::Advmod => "advmod",
            DepLabel::Punct => "punct",
            DepLabel::Other => "dep",
        }
    }

    /// Traduz um rótulo cru de parser externo para o vocabulário fechado.
    ///
    /// Aceita tanto a grafia do spaCy (`"nsubjpass"`, `"dobj"`) quanto a do
    /// UD v2 (`"nsubj:pass"`, `"obj"`). Rótulos desconhecidos viram `Other`
    /// — nunca erro, pois o parser externo pode emitir relações que não nos
    /// interessam (`ccomp`, `xcomp`, ...).
    pub fn from_label(raw: &str) -> Self {
        match raw {
            "ROOT" | "root" => DepLabel::Root,
            "nsubj" => DepLabel::Nsubj,
            "nsubjpass" | "nsubj:pass" => DepLabel::NsubjPass,
            "obj" | "dobj" => DepLabel::Obj,
            "obl" | "obl:agent" | "pobj" => DepLabel::Obl,
            "det" => DepLabel::Det,
            "amod" => DepLabel::Amod,
            "aux" => DepLabel::Aux,
            "auxpass" | "aux:pass" => DepLabel::AuxPass,
            "case" | "prep" => DepLabel::Case,
            "advmod" => DepLabel::Advmod,
            "punct" => DepLabel::Punct,
            _ => DepLabel::Other,
        }
    }

    /// O token com este rótulo pode ser o sujeito da oração?
    ///
    /// São exatamente os dois rótulos que o analisador de orações procura
    /// entre os dependentes à esquerda da raiz.
    pub fn is_subject(&self) -> bool {
        matches!(self, DepLabel::Nsubj | DepLabel::NsubjPass)
    }
}

impl std::fmt::Display for DepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classe gramatical grossa (coarse-grained POS), no estilo UD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    /// Determinante: "o", "uma", "este".
    Det,
    /// Substantivo comum: "gato", "cidade".
    Noun,
    /// Nome próprio: "Brasil", "Maria".
    Propn,
    /// Pronome: "ele", "nós".
    Pron,
    /// Verbo pleno: "perseguiu", "correr".
    Verb,
    /// Verbo auxiliar: "foi", "tinha", "está".
    Aux,
    /// Adjetivo: "preto", "rápida".
    Adj,
    /// Advérbio: "rapidamente", "não".
    Adv,
    /// Preposição ou contração: "de", "pelo".
    Adp,
    /// Numeral: "2023", "três".
    Num,
    /// Conjunção coordenativa: "e", "mas".
    Cconj,
    /// Pontuação.
    Punct,
    /// Classe não determinada.
    Other,
}

impl PosTag {
    /// Nome da classe como string (convenção UD, para serialização e UI).
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Det => "DET",
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Pron => "PRON",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Adp => "ADP",
            PosTag::Num => "NUM",
            PosTag::Cconj => "CCONJ",
            PosTag::Punct => "PUNCT",
            PosTag::Other => "X",
        }
    }

    /// O token pode encabeçar ou compor um sintagma nominal?
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn | PosTag::Pron)
    }

    /// O token é verbal (verbo pleno ou auxiliar)?
    pub fn is_verbal(&self) -> bool {
        matches!(self, PosTag::Verb | PosTag::Aux)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_spacy_e_ud() {
        // Grafia spaCy e grafia UD devem cair na mesma variante
        assert_eq!(DepLabel::from_label("nsubjpass"), DepLabel::NsubjPass);
        assert_eq!(DepLabel::from_label("nsubj:pass"), DepLabel::NsubjPass);
        assert_eq!(DepLabel::from_label("dobj"), DepLabel::Obj);
        assert_eq!(DepLabel::from_label("obj"), DepLabel::Obj);
        assert_eq!(DepLabel::from_label("ROOT"), DepLabel::Root);
        assert_eq!(DepLabel::from_label("root"), DepLabel::Root);
    }

    #[test]
    fn test_from_label_desconhecido_vira_other() {
        assert_eq!(DepLabel::from_label("ccomp"), DepLabel::Other);
        assert_eq!(DepLabel::from_label(""), DepLabel::Other);
    }

    #[test]
    fn test_is_subject() {
        assert!(DepLabel::Nsubj.is_subject());
        assert!(DepLabel::NsubjPass.is_subject());
        assert!(!DepLabel::Obj.is_subject());
        assert!(!DepLabel::Root.is_subject());
    }

    #[test]
    fn test_labels_round_trip() {
        for dep in [
            DepLabel::Root,
            DepLabel::Nsubj,
            DepLabel::NsubjPass,
            DepLabel::Obj,
            DepLabel::Obl,
            DepLabel::Det,
            DepLabel::Amod,
            DepLabel::Aux,
            DepLabel::AuxPass,
            DepLabel::Case,
            DepLabel::Advmod,
            DepLabel::Punct,
        ] {
            assert_eq!(DepLabel::from_label(dep.label()), dep);
        }
    }

    #[test]
    fn test_pos_nominal_e_verbal() {
        assert!(PosTag::Noun.is_nominal());
        assert!(PosTag::Propn.is_nominal());
        assert!(PosTag::Pron.is_nominal());
        assert!(!PosTag::Verb.is_nominal());
        assert!(PosTag::Verb.is_verbal());
        assert!(PosTag::Aux.is_verbal());
        assert!(!PosTag::Det.is_verbal());
    }
}
