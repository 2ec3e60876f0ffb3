//! # Sintagmas Nominais
//!
//! Extrai os sintagmas nominais básicos ("noun chunks") de uma sentença
//! anotada: sequências contíguas de determinante, numeral e adjetivo em
//! torno de um núcleo nominal. "O gato preto" é um único sintagma com
//! núcleo "gato".
//!
//! Sintagmas não se aninham nem se sobrepõem; preposições e verbos sempre
//! encerram o sintagma corrente.

use serde::{Deserialize, Serialize};

use crate::dep::PosTag;
use crate::sentence::Sentence;

/// Um sintagma nominal básico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NounChunk {
    /// Texto do sintagma (ex: "o gato preto").
    pub text: String,
    /// Índice do primeiro token.
    pub start_token: usize,
    /// Índice do último token (inclusivo).
    pub end_token: usize,
    /// Índice do núcleo (o último nominal do sintagma).
    pub head_token: usize,
    /// Offset de byte inicial na sentença.
    pub start: usize,
    /// Offset de byte final na sentença.
    pub end: usize,
}

/// Um token pode abrir ou continuar um sintagma?
fn chunkable(pos: PosTag) -> bool {
    pos.is_nominal() || matches!(pos, PosTag::Det | PosTag::Num | PosTag::Adj)
}

/// Extrai os sintagmas nominais da sentença, na ordem do texto.
///
/// Acumula sequências de tokens "chunkáveis" e emite um sintagma quando a
/// sequência termina, desde que contenha ao menos um nominal. Sequências só
/// de determinantes ou adjetivos são descartadas.
pub fn noun_chunks(sentence: &Sentence) -> Vec<NounChunk> {
    let mut chunks = Vec::new();
    let mut current: Option<usize> = None;

    for (i, token) in sentence.tokens.iter().enumerate() {
        if chunkable(token.pos) {
            current.get_or_insert(i);
        } else {
            if let Some(first) = current.take() {
                push_chunk(&mut chunks, sentence, first, i - 1);
            }
        }
    }
    if let Some(first) = current {
        push_chunk(&mut chunks, sentence, first, sentence.tokens.len() - 1);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<NounChunk>, sentence: &Sentence, first: usize, last: usize) {
    let head = (first..=last)
        .rev()
        .find(|&i| sentence.tokens[i].pos.is_nominal());
    let head = match head {
        Some(h) => h,
        None => return, // sem núcleo nominal não há sintagma
    };

    let start = sentence.tokens[first].start;
    let end = sentence.tokens[last].end;
    chunks.push(NounChunk {
        text: sentence.text[start..end].to_string(),
        start_token: first,
        end_token: last,
        head_token: head,
        start,
        end,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::Annotator;

    fn chunks_of(text: &str) -> Vec<NounChunk> {
        noun_chunks(&Annotator::default().annotate_sentence(text))
    }

    #[test]
    fn test_sujeito_e_objeto_viram_sintagmas() {
        let chunks = chunks_of("O gato perseguiu o rato.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["O gato", "o rato"]);
    }

    #[test]
    fn test_adjetivo_entra_no_sintagma() {
        let chunks = chunks_of("O gato preto dormiu.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "O gato preto");
    }

    #[test]
    fn test_nucleo_e_o_ultimo_nominal() {
        let text = "O gato famoso dormiu.";
        let s = Annotator::default().annotate_sentence(text);
        let chunks = noun_chunks(&s);
        assert_eq!(chunks[0].text, "O gato famoso");
        assert_eq!(s.tokens[chunks[0].head_token].text, "gato");
    }

    #[test]
    fn test_preposicao_separa_sintagmas() {
        let chunks = chunks_of("O rato foi perseguido pelo gato.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["O rato", "gato"]);
    }

    #[test]
    fn test_sentenca_sem_nominal() {
        assert!(chunks_of("!?").is_empty());
    }

    #[test]
    fn test_offsets_recortam_o_texto() {
        let text = "A vacina nova chegou.";
        let s = Annotator::default().annotate_sentence(text);
        for c in noun_chunks(&s) {
            assert_eq!(&text[c.start..c.end], c.text);
        }
    }
}
