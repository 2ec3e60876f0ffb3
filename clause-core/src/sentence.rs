//! # Sentença Anotada com Dependências
//!
//! Estruturas de dados que o serviço de anotação produz e o analisador de
//! orações consome: tokens com lema, classe gramatical, rótulo de dependência
//! e referência ao head, agrupados em sentenças imutáveis.
//!
//! A referência ao head é um **índice** dentro da sentença, não um ponteiro:
//! isso mantém os tipos serializáveis (os eventos do pipeline atravessam um
//! WebSocket) e evita ciclos de ownership — a árvore de dependências tem
//! arestas nos dois sentidos.

use serde::{Deserialize, Serialize};

use crate::dep::{DepLabel, PosTag};

/// Um token já anotado pelo serviço de anotação.
///
/// Os offsets `start`/`end` são relativos ao texto da **sentença** a que o
/// token pertence, o que permite destacar o token na UI sem recomputar nada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Texto de superfície (ex: "perseguiu").
    pub text: String,
    /// Forma de dicionário (ex: "perseguir").
    pub lemma: String,
    /// Classe gramatical grossa.
    pub pos: PosTag,
    /// Relação de dependência com o head.
    pub dep: DepLabel,
    /// Índice do head dentro da sentença. A raiz aponta para si mesma.
    pub head: usize,
    /// Índice sequencial do token na sentença (0, 1, 2...).
    pub index: usize,
    /// Offset de byte inicial no texto da sentença (inclusivo).
    pub start: usize,
    /// Offset de byte final no texto da sentença (exclusivo).
    pub end: usize,
    /// O token é uma stopword?
    pub is_stop: bool,
}

/// Uma sentença com seus tokens anotados.
///
/// Criada uma única vez pelo serviço de anotação e nunca modificada depois;
/// o analisador de orações só lê.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Texto original da sentença.
    pub text: String,
    /// Tokens em ordem linear.
    pub tokens: Vec<AnnotatedToken>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, tokens: Vec<AnnotatedToken>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Dependentes à esquerda do token `head`: filhos diretos que aparecem
    /// **antes** dele na ordem linear, retornados nessa mesma ordem.
    ///
    /// O próprio token nunca é incluído (a raiz tem `head == index`, o que
    /// sem o filtro de identidade a faria filha de si mesma).
    pub fn left_dependents(&self, head: usize) -> impl Iterator<Item = &AnnotatedToken> {
        self.tokens
            .iter()
            .filter(move |t| t.head == head && t.index < head)
    }

    /// Dependentes à direita do token `head`, em ordem linear.
    pub fn right_dependents(&self, head: usize) -> impl Iterator<Item = &AnnotatedToken> {
        self.tokens
            .iter()
            .filter(move |t| t.head == head && t.index > head)
    }

    /// Head de um token, ou `None` se o token é a raiz (head aponta para si).
    pub fn head_of(&self, index: usize) -> Option<&AnnotatedToken> {
        let token = self.tokens.get(index)?;
        if token.head == index {
            None
        } else {
            self.tokens.get(token.head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monta um token mínimo para os testes deste módulo
    fn tok(index: usize, text: &str, dep: DepLabel, head: usize) -> AnnotatedToken {
        AnnotatedToken {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            pos: PosTag::Other,
            dep,
            head,
            index,
            start: 0,
            end: 0,
            is_stop: false,
        }
    }

    #[test]
    fn test_left_dependents_ordem_linear() {
        // "O gato preto dormiu" — det e nsubj à esquerda da raiz
        let sent = Sentence::new(
            "O gato preto dormiu",
            vec![
                tok(0, "O", DepLabel::Det, 1),
                tok(1, "gato", DepLabel::Nsubj, 3),
                tok(2, "preto", DepLabel::Amod, 1),
                tok(3, "dormiu", DepLabel::Root, 3),
            ],
        );

        let lefts: Vec<&str> = sent.left_dependents(3).map(|t| t.text.as_str()).collect();
        // Apenas filhos diretos da raiz: "gato". "O" e "preto" dependem de "gato".
        assert_eq!(lefts, vec!["gato"]);

        let lefts_gato: Vec<&str> = sent.left_dependents(1).map(|t| t.text.as_str()).collect();
        assert_eq!(lefts_gato, vec!["O"]);
    }

    #[test]
    fn test_raiz_nao_e_dependente_de_si_mesma() {
        let sent = Sentence::new("dormiu", vec![tok(0, "dormiu", DepLabel::Root, 0)]);
        assert_eq!(sent.left_dependents(0).count(), 0);
        assert_eq!(sent.right_dependents(0).count(), 0);
        assert!(sent.head_of(0).is_none());
    }

    #[test]
    fn test_head_of() {
        let sent = Sentence::new(
            "gato dormiu",
            vec![
                tok(0, "gato", DepLabel::Nsubj, 1),
                tok(1, "dormiu", DepLabel::Root, 1),
            ],
        );
        assert_eq!(sent.head_of(0).unwrap().text, "dormiu");
        assert!(sent.head_of(1).is_none());
        assert!(sent.head_of(99).is_none());
    }

    #[test]
    fn test_right_dependents() {
        // "perseguiu o rato" — obj à direita
        let sent = Sentence::new(
            "perseguiu o rato",
            vec![
                tok(0, "perseguiu", DepLabel::Root, 0),
                tok(1, "o", DepLabel::Det, 2),
                tok(2, "rato", DepLabel::Obj, 0),
            ],
        );
        let rights: Vec<&str> = sent.right_dependents(0).map(|t| t.text.as_str()).collect();
        assert_eq!(rights, vec!["rato"]);
    }
}
