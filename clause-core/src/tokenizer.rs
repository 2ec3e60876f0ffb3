//! # Tokenização e Segmentação de Sentenças
//!
//! Primeiro estágio do serviço de anotação: divide o texto bruto em sentenças
//! e cada sentença em tokens, preservando os offsets de byte originais para
//! permitir destacar qualquer token na interface web.
//!
//! A segmentação usa as fronteiras de palavra do Unicode (UAX #29, via
//! `unicode-segmentation`) e depois corrige dois casos em que o ponto final
//! não encerra sentença: abreviações conhecidas ("Dr.", "Sra.") e números
//! com separador de milhar ("1.234").

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token de superfície, ainda sem anotações linguísticas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// O texto do token (ex: "gato", ",").
    pub text: String,
    /// Offset de byte inicial no texto de origem (inclusivo).
    pub start: usize,
    /// Offset de byte final no texto de origem (exclusivo).
    pub end: usize,
    /// Índice sequencial do token (0, 1, 2...).
    pub index: usize,
}

/// Uma sentença delimitada no texto original, ainda sem tokens anotados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Texto da sentença, sem espaços nas bordas.
    pub text: String,
    /// Offset de byte inicial no documento.
    pub start: usize,
    /// Offset de byte final no documento (exclusivo).
    pub end: usize,
}

/// Abreviações comuns em PT-BR cujo ponto não encerra sentença
const ABBREVIATIONS: &[&str] = &[
    "Dr", "Dra", "Sr", "Sra", "Srta", "Prof", "Profa", "Gov", "Dep", "Sen",
    "Min", "Gen", "Cel", "Pres", "Eng", "Av", "km", "kg", "etc", "pág",
    "art", "núm", "vol", "tel",
];

/// Caracteres que encerram sentença
const TERMINALS: &[char] = &['.', '!', '?', '…'];

/// Tokeniza um texto preservando offsets.
///
/// Usa as fronteiras de palavra do Unicode e emite um token por palavra ou
/// sinal de pontuação, pulando espaços. O ponto de uma abreviação conhecida
/// e o separador decimal/milhar são fundidos ao token anterior.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for (start, word) in text.split_word_bound_indices() {
        if word.trim().is_empty() {
            continue;
        }

        // Funde "." ao token anterior quando for abreviação ("Dr" + ".")
        if word == "." {
            if let Some(last) = tokens.last_mut() {
                if last.end == start && ABBREVIATIONS.contains(&last.text.as_str()) {
                    last.text.push('.');
                    last.end = start + 1;
                    continue;
                }
            }
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            // Cobertura para segmentadores que separam "1.234" em "1." + "234"
            if let Some(last) = tokens.last_mut() {
                if last.end == start && ends_with_digit_dot(&last.text) {
                    last.text.push_str(word);
                    last.end = start + word.len();
                    continue;
                }
            }
        }

        tokens.push(Token {
            text: word.to_string(),
            start,
            end: start + word.len(),
            index: 0,
        });
    }

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// O token terminado em "." era um número? ("1." sim, "Dr." não)
fn ends_with_digit_dot(text: &str) -> bool {
    match text.strip_suffix('.') {
        Some(stem) => {
            !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit() || c == '.')
        }
        None => false,
    }
}

/// Divide o texto em sentenças.
///
/// Uma sentença termina num caractere terminal (`. ! ? …`) que não faça
/// parte de abreviação nem de número. Pontuação terminal repetida ("!?",
/// "...") fica na mesma sentença.
pub fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let tokens = tokenize(text);
    let mut spans = Vec::new();
    let mut sentence_first: Option<usize> = None;

    let mut i = 0;
    while i < tokens.len() {
        if sentence_first.is_none() {
            sentence_first = Some(i);
        }

        if is_terminal(&tokens[i].text) {
            // Consome terminais consecutivos ("!?", "...")
            let mut last = i;
            while last + 1 < tokens.len() && is_terminal(&tokens[last + 1].text) {
                last += 1;
            }

            let first = sentence_first.take().unwrap_or(i);
            push_span(&mut spans, text, tokens[first].start, tokens[last].end);
            i = last + 1;
            continue;
        }

        i += 1;
    }

    // Sobra sem pontuação final também é sentença
    if let Some(first) = sentence_first {
        let last_end = tokens.last().map(|t| t.end).unwrap_or(0);
        push_span(&mut spans, text, tokens[first].start, last_end);
    }

    spans
}

fn is_terminal(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| TERMINALS.contains(&c))
}

fn push_span(spans: &mut Vec<SentenceSpan>, text: &str, start: usize, end: usize) {
    let slice = text[start..end].trim();
    if !slice.is_empty() {
        spans.push(SentenceSpan {
            text: slice.to_string(),
            start,
            end,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basico() {
        let tokens = tokenize("O gato dormiu.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["O", "gato", "dormiu", "."]);
    }

    #[test]
    fn test_tokenize_offsets_e_indices() {
        let text = "gato preto";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, 4);
        assert_eq!(&text[tokens[1].start..tokens[1].end], "preto");
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_tokenize_abreviacao() {
        let tokens = tokenize("O Dr. Silva chegou.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"Dr."));
    }

    #[test]
    fn test_tokenize_acentos() {
        let tokens = tokenize("coração e pulmão");
        assert_eq!(tokens[0].text, "coração");
        assert_eq!(tokens[2].text, "pulmão");
    }

    #[test]
    fn test_split_sentences_basico() {
        let spans = split_sentences("O gato dormiu. O rato fugiu!");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "O gato dormiu.");
        assert_eq!(spans[1].text, "O rato fugiu!");
    }

    #[test]
    fn test_split_sentences_abreviacao_nao_quebra() {
        let spans = split_sentences("O Dr. Silva chegou. Todos aplaudiram.");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].text.contains("Dr. Silva"));
    }

    #[test]
    fn test_split_sentences_sem_pontuacao_final() {
        let spans = split_sentences("frase sem ponto final");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "frase sem ponto final");
    }

    #[test]
    fn test_split_sentences_terminais_repetidos() {
        let spans = split_sentences("Sério?! Não acredito...");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_split_sentences_vazio() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
