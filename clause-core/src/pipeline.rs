//! # Pipeline de Análise — Orquestrador com Eventos Observáveis
//!
//! O pipeline coordena todos os módulos (segmentação, anotação, análise de
//! orações, entidades, sintagmas e similaridade) e emite eventos em cada
//! passo via um canal Rust (`mpsc`), permitindo que o servidor WebSocket
//! transmita o raciocínio em tempo real para o cliente.
//!
//! Sentenças são independentes entre si: o modo síncrono as analisa em
//! paralelo com `rayon`, e um parse malformado derruba só a sentença
//! afetada, nunca o documento inteiro.

use std::sync::mpsc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::annotator::Annotator;
use crate::chunker::{self, NounChunk};
use crate::clause::{self, ClauseResult, Voice};
use crate::entities::{EntityRules, EntitySpan};
use crate::sentence::{AnnotatedToken, Sentence};
use crate::tokenizer::SentenceSpan;
use crate::vectors::{SimilarityPair, WordVectors};

/// Eventos emitidos pelo pipeline durante o processamento.
///
/// Cada variante carrega os dados necessários para renderizar uma etapa da
/// visualização no frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// **Passo 1**: Segmentação concluída. Retorna as sentenças e o total.
    SentencesSplit {
        sentences: Vec<SentenceSpan>,
        total: usize,
    },
    /// **Passo 2**: Uma sentença foi anotada (tokens, POS, dependências).
    SentenceAnnotated {
        index: usize,
        text: String,
        tokens: Vec<AnnotatedToken>,
    },
    /// **Passo 3**: Raiz, sujeito e voz identificados na sentença.
    ClauseAnalyzed {
        index: usize,
        result: ClauseResult,
        root_text: String,
        subject_text: Option<String>,
        voice: Option<Voice>,
    },
    /// **Passo 3 (alternativo)**: A sentença tinha parse malformado e foi
    /// pulada. As demais continuam normalmente.
    SentenceSkipped { index: usize, message: String },
    /// **Passo 4**: Entidades nomeadas encontradas na sentença.
    EntitiesFound {
        index: usize,
        entities: Vec<EntitySpan>,
    },
    /// **Passo 5**: Sintagmas nominais da sentença.
    NounChunksFound {
        index: usize,
        chunks: Vec<NounChunk>,
    },
    /// **Passo 6**: Similaridades entre as palavras do documento que têm
    /// vetor conhecido.
    SimilaritiesComputed { pairs: Vec<SimilarityPair> },
    /// **Conclusão**: resultado final consolidado e tempo de processamento.
    Done {
        analysis: DocumentAnalysis,
        processing_ms: u64,
    },
    /// **Falha**: erro irrecuperável (não usado para parse malformado, que
    /// apenas pula a sentença).
    Error { message: String },
}

/// Análise completa de uma sentença.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// Posição da sentença no documento (0, 1, 2...).
    pub index: usize,
    /// Texto da sentença.
    pub text: String,
    /// Tokens anotados.
    pub tokens: Vec<AnnotatedToken>,
    /// Raiz/sujeito/voz, ou `None` se o parse era malformado.
    pub clause: Option<ClauseResult>,
    /// Motivo do descarte, quando `clause` é `None`.
    pub skipped: Option<String>,
    /// Entidades nomeadas.
    pub entities: Vec<EntitySpan>,
    /// Sintagmas nominais.
    pub chunks: Vec<NounChunk>,
}

/// Análise consolidada de um documento.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Análises por sentença, na ordem do texto.
    pub sentences: Vec<SentenceAnalysis>,
    /// Similaridades entre as palavras do documento com vetor conhecido.
    pub similarities: Vec<SimilarityPair>,
    /// Quantas sentenças foram puladas por parse malformado.
    pub skipped: usize,
}

/// O pipeline principal.
///
/// # Modos de Uso
/// - **Sync**: [`ClausePipeline::analyze`] para scripts e chamadas diretas;
///   paraleliza sobre sentenças com `rayon`.
/// - **Streaming**: [`ClausePipeline::analyze_streaming`] para UIs reativas
///   (via WebSocket); sequencial, na ordem do texto.
pub struct ClausePipeline {
    annotator: Annotator,
    entity_rules: EntityRules,
    vectors: WordVectors,
}

impl ClausePipeline {
    pub fn new() -> Self {
        Self {
            annotator: Annotator::default(),
            entity_rules: EntityRules::new(),
            vectors: WordVectors::new(),
        }
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    pub fn vectors(&self) -> &WordVectors {
        &self.vectors
    }

    /// Processa o documento de forma síncrona.
    ///
    /// As sentenças são independentes, então a anotação e a análise rodam
    /// em paralelo; o resultado preserva a ordem do texto.
    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        let spans = self.annotator.split(text);
        info!(sentencas = spans.len(), "documento segmentado");

        let sentences: Vec<SentenceAnalysis> = spans
            .par_iter()
            .enumerate()
            .map(|(index, span)| self.analyze_sentence(index, &span.text))
            .collect();

        let skipped = sentences.iter().filter(|s| s.clause.is_none()).count();
        let similarities = self.document_similarities(&sentences);

        DocumentAnalysis {
            sentences,
            similarities,
            skipped,
        }
    }

    /// Executa o pipeline enviando eventos de progresso em tempo real.
    ///
    /// Este método não retorna valores diretamente: ele "empurra"
    /// [`PipelineEvent`]s pelo canal `tx`, encerrando sempre com `Done`.
    ///
    /// # Fluxo de Eventos
    /// 1. `SentencesSplit`: sentenças delimitadas.
    /// 2. Por sentença: `SentenceAnnotated`, depois `ClauseAnalyzed` ou
    ///    `SentenceSkipped`, depois `EntitiesFound` e `NounChunksFound`.
    /// 3. `SimilaritiesComputed`: pares de similaridade do documento.
    /// 4. `Done`: resultado final consolidado.
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        let start = std::time::Instant::now();

        let spans = self.annotator.split(text);
        let _ = tx.send(PipelineEvent::SentencesSplit {
            sentences: spans.clone(),
            total: spans.len(),
        });

        let mut sentences = Vec::with_capacity(spans.len());
        for (index, span) in spans.iter().enumerate() {
            let analysis = self.analyze_sentence(index, &span.text);

            let _ = tx.send(PipelineEvent::SentenceAnnotated {
                index,
                text: analysis.text.clone(),
                tokens: analysis.tokens.clone(),
            });

            match (&analysis.clause, &analysis.skipped) {
                (Some(result), _) => {
                    let sentence = Sentence::new(&analysis.text, analysis.tokens.clone());
                    let _ = tx.send(PipelineEvent::ClauseAnalyzed {
                        index,
                        result: result.clone(),
                        root_text: result.root_token(&sentence).text.clone(),
                        subject_text: result
                            .subject_token(&sentence)
                            .map(|t| t.text.clone()),
                        voice: result.voice,
                    });
                }
                (None, Some(message)) => {
                    let _ = tx.send(PipelineEvent::SentenceSkipped {
                        index,
                        message: message.clone(),
                    });
                }
                (None, None) => {}
            }

            let _ = tx.send(PipelineEvent::EntitiesFound {
                index,
                entities: analysis.entities.clone(),
            });
            let _ = tx.send(PipelineEvent::NounChunksFound {
                index,
                chunks: analysis.chunks.clone(),
            });

            sentences.push(analysis);
        }

        let similarities = self.document_similarities(&sentences);
        let _ = tx.send(PipelineEvent::SimilaritiesComputed {
            pairs: similarities.clone(),
        });

        let skipped = sentences.iter().filter(|s| s.clause.is_none()).count();
        let _ = tx.send(PipelineEvent::Done {
            analysis: DocumentAnalysis {
                sentences,
                similarities,
                skipped,
            },
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }

    /// Analisa uma única sentença: anotação, oração, entidades e sintagmas.
    fn analyze_sentence(&self, index: usize, text: &str) -> SentenceAnalysis {
        let sentence = self.annotator.annotate_sentence(text);

        let (clause, skipped) = match clause::analyze(&sentence) {
            Ok(result) => (Some(result), None),
            Err(err) => {
                debug!(indice = index, erro = %err, "sentença pulada");
                (None, Some(err.to_string()))
            }
        };

        let raw = crate::tokenizer::tokenize(text);
        let entities = self.entity_rules.find_entities(&raw, text);
        let chunks = chunker::noun_chunks(&sentence);

        SentenceAnalysis {
            index,
            text: text.to_string(),
            tokens: sentence.tokens,
            clause,
            skipped,
            entities,
            chunks,
        }
    }

    /// Similaridades entre as palavras de conteúdo do documento que têm
    /// vetor: cada palavra entra uma vez, na ordem da primeira ocorrência.
    fn document_similarities(&self, sentences: &[SentenceAnalysis]) -> Vec<SimilarityPair> {
        let mut words: Vec<String> = Vec::new();
        for analysis in sentences {
            for token in &analysis.tokens {
                let lower = token.text.to_lowercase();
                if !token.is_stop
                    && self.vectors.has_vector(&lower)
                    && !words.contains(&lower)
                {
                    words.push(lower);
                }
            }
        }

        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        self.vectors.pairwise(&refs)
    }
}

impl Default for ClausePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_basico() {
        let pipeline = ClausePipeline::new();
        let analysis =
            pipeline.analyze("O gato perseguiu o rato. O rato foi perseguido pelo gato.");

        assert_eq!(analysis.sentences.len(), 2);
        assert_eq!(analysis.skipped, 0);

        let first = analysis.sentences[0].clause.as_ref().unwrap();
        assert_eq!(first.voice, Some(Voice::Active));
        let second = analysis.sentences[1].clause.as_ref().unwrap();
        assert_eq!(second.voice, Some(Voice::Passive));
    }

    #[test]
    fn test_pipeline_vazio() {
        let pipeline = ClausePipeline::new();
        let analysis = pipeline.analyze("");
        assert!(analysis.sentences.is_empty());
        assert_eq!(analysis.skipped, 0);
    }

    #[test]
    fn test_sentenca_malformada_nao_derruba_o_documento() {
        // A "sentença" do meio só tem pontuação e não produz raiz
        let pipeline = ClausePipeline::new();
        let analysis = pipeline.analyze("O gato dormiu. , . O rato fugiu.");

        assert_eq!(analysis.sentences.len(), 3);
        assert_eq!(analysis.skipped, 1);
        assert!(analysis.sentences[0].clause.is_some());
        assert!(analysis.sentences[1].clause.is_none());
        assert!(analysis.sentences[1].skipped.is_some());
        assert!(analysis.sentences[2].clause.is_some());
    }

    #[test]
    fn test_entidades_e_sintagmas_no_resultado() {
        let pipeline = ClausePipeline::new();
        let analysis = pipeline.analyze("A Fiocruz desenvolveu a vacina.");

        let sentence = &analysis.sentences[0];
        assert!(sentence.entities.iter().any(|e| e.text == "Fiocruz"));
        assert!(!sentence.chunks.is_empty());
    }

    #[test]
    fn test_similaridades_do_documento() {
        let pipeline = ClausePipeline::new();
        let analysis = pipeline.analyze("O coração e o pulmão diferem da pinha.");

        // 3 palavras com vetor → C(3,2) = 3 pares
        assert_eq!(analysis.similarities.len(), 3);
        let hearts = analysis
            .similarities
            .iter()
            .find(|p| p.left == "coração" && p.right == "pulmão")
            .unwrap();
        assert!(hearts.similarity.unwrap() > 0.9);
    }

    #[test]
    fn test_eventos_streaming() {
        let pipeline = ClausePipeline::new();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("O gato perseguiu o rato.", tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        assert!(!events.is_empty());

        assert!(
            matches!(&events[0], PipelineEvent::SentencesSplit { .. }),
            "primeiro evento deve ser SentencesSplit"
        );
        assert!(
            matches!(events.last().unwrap(), PipelineEvent::Done { .. }),
            "último evento deve ser Done"
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, PipelineEvent::ClauseAnalyzed { .. })));
    }

    #[test]
    fn test_evento_serializa_com_tipo_e_dados() {
        let event = PipelineEvent::SentenceSkipped {
            index: 3,
            message: "parse malformado".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "sentence_skipped");
        assert_eq!(json["data"]["index"], 3);
    }

    #[test]
    fn test_streaming_sentenca_pulada_emite_evento() {
        let pipeline = ClausePipeline::new();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("!!!", tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, PipelineEvent::SentenceSkipped { .. })));
        assert!(matches!(
            events.last().unwrap(),
            PipelineEvent::Done { .. }
        ));
    }
}
