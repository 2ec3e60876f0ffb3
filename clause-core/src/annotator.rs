//! # Anotador de Dependências — o Serviço de Anotação
//!
//! Produz as [`Sentence`]s que o analisador de orações consome: tokeniza,
//! atribui classe gramatical, lema e stopword a cada token e monta uma
//! árvore de dependências rasa com regras determinísticas.
//!
//! ## Por que regras e não um parser estatístico?
//!
//! O analisador de orações só depende do **contrato** (tokens com rótulo de
//! dependência e head); qualquer parser real pode substituir este módulo.
//! Para a demonstração basta um anotador raso que acerte as construções
//! canônicas do português:
//!
//! - o primeiro verbo pleno é a raiz (na falta dele, um auxiliar; na falta
//!   de ambos, o primeiro nominal);
//! - "ser" + particípio marca a **passiva perifrástica**: o auxiliar vira
//!   `auxpass` e o nominal pré-verbal vira `nsubjpass`;
//! - nominal pré-verbal sem preposição é sujeito; pós-verbal sem preposição
//!   é objeto; com preposição é oblíquo (inclui o agente "pelo gato");
//! - determinantes e adjetivos se apoiam no nominal mais próximo.
//!
//! O anotador é construído com um [`Lexicon`] e passado explicitamente a
//! quem precisa dele — nada de estado global de processo.

use crate::dep::{DepLabel, PosTag};
use crate::lexicon::Lexicon;
use crate::sentence::{AnnotatedToken, Sentence};
use crate::tokenizer::{self, SentenceSpan};

/// O serviço de anotação: tokenização + POS + lema + dependências.
pub struct Annotator {
    lexicon: Lexicon,
}

impl Annotator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Divide o texto em sentenças e anota cada uma.
    pub fn annotate(&self, text: &str) -> Vec<Sentence> {
        self.split(text)
            .iter()
            .map(|span| self.annotate_sentence(&span.text))
            .collect()
    }

    /// Segmentação de sentenças (exposta para o pipeline emitir o evento
    /// antes de anotar).
    pub fn split(&self, text: &str) -> Vec<SentenceSpan> {
        tokenizer::split_sentences(text)
    }

    /// Anota uma única sentença. Offsets dos tokens são relativos a `text`.
    pub fn annotate_sentence(&self, text: &str) -> Sentence {
        let raw = tokenizer::tokenize(text);
        if raw.is_empty() {
            return Sentence::new(text, vec![]);
        }

        let pos: Vec<PosTag> = raw
            .iter()
            .map(|t| self.lexicon.guess_pos(&t.text, t.index == 0))
            .collect();

        let root = pick_root(&pos);
        let passive = match root {
            Some(r) => {
                pos[r] == PosTag::Verb
                    && self.lexicon.is_participle(&raw[r].text)
                    && (0..r).any(|j| pos[j] == PosTag::Aux && self.lexicon.is_ser_form(&raw[j].text))
            }
            None => false,
        };

        let deps = self.assign_deps(&raw, &pos, root, passive);

        let tokens = raw
            .into_iter()
            .zip(pos.iter())
            .zip(deps.into_iter())
            .map(|((token, pos), (dep, head))| AnnotatedToken {
                lemma: self.lexicon.lemma_of(&token.text, *pos),
                is_stop: self.lexicon.is_stop(&token.text),
                text: token.text,
                pos: *pos,
                dep,
                head,
                index: token.index,
                start: token.start,
                end: token.end,
            })
            .collect();

        Sentence::new(text, tokens)
    }

    /// Atribui (rótulo, head) a cada token.
    ///
    /// Sem raiz identificável, todos os tokens ficam `Other` apontando para
    /// si mesmos — o analisador de orações reportará o parse malformado.
    fn assign_deps(
        &self,
        raw: &[tokenizer::Token],
        pos: &[PosTag],
        root: Option<usize>,
        passive: bool,
    ) -> Vec<(DepLabel, usize)> {
        let root = match root {
            Some(r) => r,
            None => return pos.iter().enumerate().map(|(i, _)| (DepLabel::Other, i)).collect(),
        };

        let mut deps = Vec::with_capacity(pos.len());
        let mut subject_taken = false;
        let mut object_taken = false;

        for i in 0..pos.len() {
            if i == root {
                deps.push((DepLabel::Root, i));
                continue;
            }

            let (dep, head) = match pos[i] {
                PosTag::Det => (DepLabel::Det, next_nominal(pos, i).unwrap_or(root)),
                PosTag::Adp => (DepLabel::Case, next_nominal(pos, i).unwrap_or(root)),
                PosTag::Aux => {
                    if passive && i < root && self.lexicon.is_ser_form(&raw[i].text) {
                        (DepLabel::AuxPass, root)
                    } else {
                        (DepLabel::Aux, root)
                    }
                }
                PosTag::Adj => {
                    let head = prev_nominal(pos, i)
                        .or_else(|| next_nominal(pos, i))
                        .unwrap_or(root);
                    (DepLabel::Amod, head)
                }
                PosTag::Adv => (DepLabel::Advmod, root),
                PosTag::Punct => (DepLabel::Punct, root),
                PosTag::Cconj => (DepLabel::Other, root),
                PosTag::Noun | PosTag::Propn | PosTag::Pron | PosTag::Num => {
                    if case_marked(pos, i) {
                        (DepLabel::Obl, root)
                    } else if i < root {
                        if !subject_taken {
                            subject_taken = true;
                            let label = if passive {
                                DepLabel::NsubjPass
                            } else {
                                DepLabel::Nsubj
                            };
                            (label, root)
                        } else {
                            // Segundo nominal nu antes da raiz: aposto ou
                            // nome composto, apoiado no nominal anterior
                            (DepLabel::Other, prev_nominal(pos, i).unwrap_or(root))
                        }
                    } else if !object_taken {
                        object_taken = true;
                        (DepLabel::Obj, root)
                    } else {
                        (DepLabel::Other, prev_nominal(pos, i).unwrap_or(root))
                    }
                }
                PosTag::Verb | PosTag::Other => (DepLabel::Other, root),
            };
            deps.push((dep, head));
        }

        deps
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(Lexicon::new())
    }
}

/// Escolhe a raiz: primeiro verbo pleno, senão primeiro auxiliar, senão
/// primeiro nominal, senão o primeiro token não-pontuação.
fn pick_root(pos: &[PosTag]) -> Option<usize> {
    pos.iter()
        .position(|p| *p == PosTag::Verb)
        .or_else(|| pos.iter().position(|p| *p == PosTag::Aux))
        .or_else(|| pos.iter().position(|p| p.is_nominal()))
        .or_else(|| pos.iter().position(|p| *p != PosTag::Punct))
}

/// Próximo token nominal (ou numeral) estritamente depois de `i`
fn next_nominal(pos: &[PosTag], i: usize) -> Option<usize> {
    ((i + 1)..pos.len()).find(|&j| pos[j].is_nominal() || pos[j] == PosTag::Num)
}

/// Token nominal (ou numeral) mais próximo estritamente antes de `i`
fn prev_nominal(pos: &[PosTag], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| pos[j].is_nominal() || pos[j] == PosTag::Num)
}

/// O nominal em `i` é introduzido por preposição? Pula determinantes,
/// adjetivos e numerais entre a preposição e o nominal ("pelo velho gato").
fn case_marked(pos: &[PosTag], i: usize) -> bool {
    let mut j = i;
    while j > 0 {
        j -= 1;
        match pos[j] {
            PosTag::Det | PosTag::Adj | PosTag::Num => continue,
            PosTag::Adp => return true,
            _ => return false,
        }
    }
    false
}
