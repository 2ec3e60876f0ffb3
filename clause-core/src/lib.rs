//! # clause-core — Análise de Orações em Português Brasileiro
//!
//! Este crate implementa um pipeline completo de análise sintática rasa para
//! textos em Português Brasileiro: localiza a **raiz** de cada oração, o
//! **sujeito** entre os dependentes à esquerda e classifica a **voz** (ativa
//! ou passiva). Foi projetado para ser didático, modular e extensível.
//!
//! ## Arquitetura do Sistema
//!
//! O sistema segue uma arquitetura de pipeline linear, onde o dado flui e é
//! transformado passo a passo:
//!
//! 1.  **Entrada**: Texto bruto (String).
//! 2.  **Segmentação e Tokenização** ([`tokenizer`]): o texto é dividido em
//!     sentenças e tokens, preservando offsets originais.
//! 3.  **Anotação** ([`annotator`]): cada token recebe classe gramatical,
//!     lema e um rótulo de dependência com head ([`dep`], [`lexicon`]).
//! 4.  **Análise de Orações** ([`clause`]): raiz, sujeito e voz por sentença.
//! 5.  **Camadas complementares**: entidades nomeadas ([`entities`]),
//!     sintagmas nominais ([`chunker`]) e similaridade semântica
//!     ([`vectors`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use clause_core::{ClausePipeline, Voice};
//!
//! // 1. Instancia o pipeline (léxico, gazetteers e vetores embutidos)
//! let pipeline = ClausePipeline::new();
//!
//! // 2. Executa a análise
//! let analysis = pipeline.analyze("O rato foi perseguido pelo gato.");
//!
//! // 3. Inspeciona raiz, sujeito e voz de cada sentença
//! for sentence in &analysis.sentences {
//!     if let Some(clause) = &sentence.clause {
//!         let root = &sentence.tokens[clause.root];
//!         println!("raiz: {}, voz: {:?}", root.text, clause.voice);
//!         assert_eq!(clause.voice, Some(Voice::Passive));
//!     }
//! }
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: orquestrador que conecta todos os estágios.
//! - [`clause`]: as regras de decisão de raiz, sujeito e voz.
//! - [`annotator`]: o serviço de anotação (substituível por qualquer parser
//!   que produza o mesmo contrato de [`sentence::Sentence`]).
//! - [`corpus`]: textos de demonstração e mini-treebank de referência.

pub mod annotator;
pub mod chunker;
pub mod clause;
pub mod corpus;
pub mod dep;
pub mod entities;
pub mod lexicon;
pub mod pipeline;
pub mod sentence;
pub mod tokenizer;
pub mod vectors;

pub use clause::{analyze, ClauseError, ClauseResult, RootMatch, Voice};
pub use dep::{DepLabel, PosTag};
pub use pipeline::{ClausePipeline, DocumentAnalysis, PipelineEvent, SentenceAnalysis};
pub use sentence::{AnnotatedToken, Sentence};
pub use tokenizer::{SentenceSpan, Token};
