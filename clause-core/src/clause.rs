//! # Analisador de Orações — Raiz, Sujeito e Voz
//!
//! O coração do sistema: dado uma [`Sentence`] já anotada com dependências,
//! localiza a **raiz** da oração (o predicado principal), procura o
//! **sujeito** entre os dependentes à esquerda da raiz e classifica a **voz**
//! (ativa ou passiva) pelo rótulo do sujeito encontrado.
//!
//! ## Regras de decisão
//!
//! 1. **Raiz**: o token com rótulo `ROOT`. O contrato com o serviço de
//!    anotação prevê exatamente um por sentença, mas isso é *validado*, não
//!    assumido: zero raízes é erro ([`ClauseError::MalformedParse`]); mais de
//!    uma é anomalia registrada — vence a primeira em ordem linear e o
//!    excedente fica visível em [`ClauseResult::extra_roots`] e num `warn!`.
//! 2. **Sujeito**: varre **apenas** os dependentes à esquerda da raiz, em
//!    ordem linear. O primeiro com rótulo `nsubj` ou `nsubjpass` vence e a
//!    varredura para. Dependentes à direita e descendentes indiretos nunca
//!    são considerados.
//! 3. **Voz**: `nsubjpass` → passiva; `nsubj` → ativa. Sem sujeito não há
//!    voz — e isso **não** é erro: imperativas e fragmentos são orações
//!    válidas sem sujeito detectável.
//!
//! A análise é uma função pura sobre a sentença: sem estado, sem I/O,
//! independente entre sentenças.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::dep::DepLabel;
use crate::sentence::{AnnotatedToken, Sentence};

/// Voz gramatical da oração.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    /// O sujeito pratica a ação: "O gato perseguiu o rato".
    Active,
    /// O sujeito sofre a ação: "O rato foi perseguido pelo gato".
    Passive,
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Voice::Active => write!(f, "ativa"),
            Voice::Passive => write!(f, "passiva"),
        }
    }
}

/// Resultado da busca pela raiz: a multiplicidade é explícita para que o
/// chamador decida a política (erro vs. primeira raiz), em vez de o dado
/// ser descartado silenciosamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootMatch {
    /// Nenhum token com rótulo `ROOT`.
    None,
    /// Exatamente uma raiz, no índice dado.
    One(usize),
    /// Mais de uma raiz. `first` é a primeira em ordem linear; `count` é o
    /// total encontrado.
    Multiple { first: usize, count: usize },
}

/// Erros do analisador de orações.
///
/// A ausência de sujeito **não** aparece aqui: é um resultado válido,
/// reportado em [`ClauseResult::subject`] como `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClauseError {
    /// A sentença não tem nenhum token raiz — violação do contrato com o
    /// serviço de anotação. O chamador pode pular a sentença e continuar.
    #[error("parse malformado: nenhuma raiz de dependência em \"{text}\"")]
    MalformedParse { text: String },
}

/// Resultado da análise de uma oração.
///
/// Carrega **índices** de tokens (não referências), resolvíveis contra a
/// mesma [`Sentence`] que gerou o resultado via [`ClauseResult::root_token`]
/// e [`ClauseResult::subject_token`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseResult {
    /// Índice do token raiz.
    pub root: usize,
    /// Índice do token sujeito, se encontrado.
    pub subject: Option<usize>,
    /// Voz da oração. Presente se e somente se há sujeito.
    pub voice: Option<Voice>,
    /// Quantas raízes além da primeira a sentença tinha (0 no caso normal).
    pub extra_roots: usize,
}

impl ClauseResult {
    /// Resolve o índice da raiz contra a sentença analisada.
    pub fn root_token<'a>(&self, sentence: &'a Sentence) -> &'a AnnotatedToken {
        &sentence.tokens[self.root]
    }

    /// Resolve o índice do sujeito contra a sentença analisada.
    pub fn subject_token<'a>(&self, sentence: &'a Sentence) -> Option<&'a AnnotatedToken> {
        self.subject.map(|i| &sentence.tokens[i])
    }
}

/// Localiza os tokens com rótulo `ROOT` na sentença.
pub fn find_roots(sentence: &Sentence) -> RootMatch {
    let mut roots = sentence
        .tokens
        .iter()
        .filter(|t| t.dep == DepLabel::Root)
        .map(|t| t.index);

    match roots.next() {
        None => RootMatch::None,
        Some(first) => {
            let rest = roots.count();
            if rest == 0 {
                RootMatch::One(first)
            } else {
                RootMatch::Multiple {
                    first,
                    count: rest + 1,
                }
            }
        }
    }
}

/// Analisa uma sentença: raiz, sujeito e voz.
///
/// Determinística e sem efeitos colaterais (além de um `warn!` na anomalia
/// de múltiplas raízes); pode ser chamada em paralelo sobre sentenças
/// distintas sem coordenação.
pub fn analyze(sentence: &Sentence) -> Result<ClauseResult, ClauseError> {
    let (root, extra_roots) = match find_roots(sentence) {
        RootMatch::None => {
            return Err(ClauseError::MalformedParse {
                text: sentence.text.clone(),
            })
        }
        RootMatch::One(index) => (index, 0),
        RootMatch::Multiple { first, count } => {
            warn!(
                raizes = count,
                texto = %sentence.text,
                "sentença com múltiplas raízes; usando a primeira em ordem linear"
            );
            (first, count - 1)
        }
    };

    // Sujeito: primeiro dependente à esquerda da raiz com rótulo de sujeito.
    // A varredura para no primeiro — um segundo sujeito à esquerda seria
    // outro parse malformado, mas aí vale a primeira leitura.
    let mut subject = None;
    let mut voice = None;
    for dependent in sentence.left_dependents(root) {
        if dependent.dep.is_subject() {
            subject = Some(dependent.index);
            voice = Some(if dependent.dep == DepLabel::NsubjPass {
                Voice::Passive
            } else {
                Voice::Active
            });
            break;
        }
    }

    Ok(ClauseResult {
        root,
        subject,
        voice,
        extra_roots,
    })
}
