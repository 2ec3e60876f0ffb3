//! # Corpus de Demonstração e Mini-Treebank
//!
//! Dois recursos embutidos:
//!
//! 1. **Textos de demonstração** por domínio temático, usados pela interface
//!    web e pelos testes de integração do pipeline. Misturam voz ativa,
//!    passiva perifrástica, imperativas e sentenças com entidades.
//! 2. **Mini-treebank dourado**: sentenças com a análise de dependências
//!    esperada, anotadas manualmente. Serve de oráculo nos testes: o
//!    anotador precisa reproduzir raiz, sujeito e voz de cada uma.

use crate::clause::Voice;

/// Uma sentença do mini-treebank com a análise esperada.
pub struct GoldSentence {
    /// O texto da sentença.
    pub text: &'static str,
    /// Texto do token raiz esperado.
    pub root: &'static str,
    /// Texto do sujeito esperado, se houver.
    pub subject: Option<&'static str>,
    /// Voz esperada (só definida quando há sujeito).
    pub voice: Option<Voice>,
}

/// O mini-treebank: análises de referência anotadas à mão.
pub fn gold_sentences() -> Vec<GoldSentence> {
    vec![
        GoldSentence {
            text: "O gato perseguiu o rato.",
            root: "perseguiu",
            subject: Some("gato"),
            voice: Some(Voice::Active),
        },
        GoldSentence {
            text: "O rato foi perseguido pelo gato.",
            root: "perseguido",
            subject: Some("rato"),
            voice: Some(Voice::Passive),
        },
        GoldSentence {
            text: "A Fiocruz desenvolveu a vacina.",
            root: "desenvolveu",
            subject: Some("Fiocruz"),
            voice: Some(Voice::Active),
        },
        GoldSentence {
            text: "A vacina foi aprovada pela Anvisa.",
            root: "aprovada",
            subject: Some("vacina"),
            voice: Some(Voice::Passive),
        },
        GoldSentence {
            text: "O governo anunciou as medidas.",
            root: "anunciou",
            subject: Some("governo"),
            voice: Some(Voice::Active),
        },
        GoldSentence {
            text: "A lei foi assinada pela princesa.",
            root: "assinada",
            subject: Some("lei"),
            voice: Some(Voice::Passive),
        },
        GoldSentence {
            text: "Corra rápido!",
            root: "Corra",
            subject: None,
            voice: None,
        },
        GoldSentence {
            text: "O contrato foi escrito ontem.",
            root: "escrito",
            subject: Some("contrato"),
            voice: Some(Voice::Passive),
        },
    ]
}

/// Textos de demonstração para a interface web: (domínio, texto).
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Clássico",
            "O gato perseguiu o rato. O rato foi perseguido pelo gato. Corra rápido!",
        ),
        (
            "Saúde",
            "A Fiocruz desenvolveu a vacina contra a dengue. A vacina foi aprovada pela Anvisa. O Instituto Butantan produziu milhões de doses.",
        ),
        (
            "História",
            "Dom Pedro proclamou a independência em 1822. A Lei Áurea foi assinada pela princesa Isabel. Tiradentes foi enforcado no Rio de Janeiro.",
        ),
        (
            "Economia",
            "A Petrobras anunciou lucro recorde. O contrato foi assinado pela Embraer. O Banco Central manteve a taxa Selic.",
        ),
        (
            "Esportes",
            "O Flamengo venceu o Palmeiras no Maracanã. O jogo foi decidido nos pênaltis. Pelé marcou 1.283 gols na carreira.",
        ),
        (
            "Semântica",
            "O coração bombeia o sangue. O pulmão foi examinado pelo médico. A pinha caiu do pinheiro na floresta.",
        ),
    ]
}

/// Palavras da demonstração de similaridade semântica, na ordem clássica.
pub const SIMILARITY_WORDS: &[&str] = &["coração", "torácico", "pulmão", "pinha"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::Annotator;
    use crate::clause;

    #[test]
    fn test_treebank_e_reproduzido_pelo_anotador() {
        let annotator = Annotator::default();
        for gold in gold_sentences() {
            let sentence = annotator.annotate_sentence(gold.text);
            let result = clause::analyze(&sentence).unwrap();

            assert_eq!(
                result.root_token(&sentence).text,
                gold.root,
                "raiz divergente em: {}",
                gold.text
            );
            assert_eq!(
                result.subject_token(&sentence).map(|t| t.text.as_str()),
                gold.subject,
                "sujeito divergente em: {}",
                gold.text
            );
            assert_eq!(result.voice, gold.voice, "voz divergente em: {}", gold.text);
        }
    }

    #[test]
    fn test_palavras_da_demonstracao_tem_vetor() {
        let vectors = crate::vectors::WordVectors::new();
        let pairs = vectors.pairwise(SIMILARITY_WORDS);
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|p| p.similarity.is_some()));
    }

    #[test]
    fn test_demo_texts_tem_dominios_unicos() {
        let texts = demo_texts();
        assert!(!texts.is_empty());
        let mut domains: Vec<&str> = texts.iter().map(|(d, _)| *d).collect();
        domains.dedup();
        assert_eq!(domains.len(), texts.len());
    }
}
