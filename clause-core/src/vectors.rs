//! # Vetores de Palavras e Similaridade
//!
//! Mini-espaço vetorial embutido para a demonstração de similaridade
//! semântica: cada palavra conhecida tem um vetor de 8 dimensões construído
//! à mão, onde cada dimensão representa um traço semântico interpretável
//! (anatomia, medicina, planta, animal, ação, abstração, lugar, tecnologia).
//!
//! A comparação usa **similaridade de cosseno**: o produto escalar dos
//! vetores normalizado pelas magnitudes. O resultado fica em [-1, 1]; com
//! vetores de componentes não-negativos, em [0, 1]. "coração" e "pulmão"
//! ficam próximos (ambos anatomia/medicina); "pinha" fica longe dos dois.
//!
//! Num sistema real os vetores viriam de um modelo treinado em corpus; o
//! espaço embutido serve para a demonstração ser determinística e testável.

use serde::{Deserialize, Serialize};

/// Dimensão dos vetores embutidos
pub const DIMENSIONS: usize = 8;

/// Vocabulário com vetores: (palavra, [anatomia, medicina, planta, animal,
/// ação, abstração, lugar, tecnologia])
const EMBEDDED: &[(&str, [f32; DIMENSIONS])] = &[
    ("coração", [0.95, 0.70, 0.00, 0.30, 0.05, 0.20, 0.00, 0.00]),
    ("torácico", [0.90, 0.80, 0.00, 0.20, 0.00, 0.05, 0.00, 0.00]),
    ("pulmão", [0.95, 0.75, 0.00, 0.30, 0.05, 0.00, 0.00, 0.00]),
    ("tórax", [0.90, 0.70, 0.00, 0.25, 0.00, 0.00, 0.00, 0.00]),
    ("sangue", [0.85, 0.80, 0.00, 0.35, 0.05, 0.00, 0.00, 0.00]),
    ("médico", [0.50, 0.95, 0.00, 0.10, 0.30, 0.10, 0.10, 0.05]),
    ("hospital", [0.30, 0.90, 0.00, 0.05, 0.10, 0.05, 0.60, 0.10]),
    ("vacina", [0.20, 0.90, 0.05, 0.05, 0.15, 0.10, 0.00, 0.30]),
    ("pinha", [0.00, 0.00, 0.95, 0.00, 0.00, 0.00, 0.10, 0.00]),
    ("pinheiro", [0.00, 0.00, 0.95, 0.00, 0.00, 0.00, 0.25, 0.00]),
    ("árvore", [0.00, 0.00, 0.90, 0.05, 0.00, 0.05, 0.30, 0.00]),
    ("floresta", [0.00, 0.00, 0.85, 0.30, 0.00, 0.05, 0.70, 0.00]),
    ("gato", [0.20, 0.05, 0.00, 0.95, 0.30, 0.00, 0.05, 0.00]),
    ("rato", [0.20, 0.10, 0.00, 0.95, 0.30, 0.00, 0.05, 0.00]),
    ("cachorro", [0.20, 0.05, 0.00, 0.95, 0.35, 0.00, 0.05, 0.00]),
    ("correr", [0.10, 0.05, 0.00, 0.30, 0.95, 0.05, 0.10, 0.00]),
    ("perseguir", [0.05, 0.00, 0.00, 0.40, 0.90, 0.05, 0.05, 0.00]),
    ("ideia", [0.00, 0.00, 0.00, 0.00, 0.10, 0.95, 0.00, 0.10]),
    ("amor", [0.30, 0.00, 0.00, 0.10, 0.10, 0.90, 0.00, 0.00]),
    ("cidade", [0.00, 0.05, 0.05, 0.05, 0.10, 0.10, 0.95, 0.20]),
    ("computador", [0.00, 0.05, 0.00, 0.00, 0.10, 0.15, 0.05, 0.95]),
];

/// Similaridade entre um par de palavras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityPair {
    /// Primeira palavra do par.
    pub left: String,
    /// Segunda palavra do par.
    pub right: String,
    /// Similaridade de cosseno, ou `None` se alguma palavra não tem vetor.
    pub similarity: Option<f32>,
}

/// O espaço vetorial embutido.
pub struct WordVectors {
    entries: Vec<(String, [f32; DIMENSIONS])>,
}

impl WordVectors {
    pub fn new() -> Self {
        Self {
            entries: EMBEDDED
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
        }
    }

    /// O vetor da palavra, se conhecida (lookup em minúsculas).
    pub fn vector(&self, word: &str) -> Option<&[f32; DIMENSIONS]> {
        let lower = word.to_lowercase();
        self.entries
            .iter()
            .find(|(w, _)| *w == lower)
            .map(|(_, v)| v)
    }

    /// A palavra tem vetor?
    pub fn has_vector(&self, word: &str) -> bool {
        self.vector(word).is_some()
    }

    /// Similaridade de cosseno entre duas palavras.
    pub fn similarity(&self, left: &str, right: &str) -> Option<f32> {
        let a = self.vector(left)?;
        let b = self.vector(right)?;
        Some(cosine(a, b))
    }

    /// Similaridade de todos os pares (i < j) de uma lista de palavras, na
    /// ordem dada. Palavras sem vetor produzem `similarity: None` em vez de
    /// derrubar a comparação inteira.
    pub fn pairwise(&self, words: &[&str]) -> Vec<SimilarityPair> {
        let mut pairs = Vec::new();
        for i in 0..words.len() {
            for j in (i + 1)..words.len() {
                pairs.push(SimilarityPair {
                    left: words[i].to_string(),
                    right: words[j].to_string(),
                    similarity: self.similarity(words[i], words[j]),
                });
            }
        }
        pairs
    }
}

impl Default for WordVectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Similaridade de cosseno: dot(a, b) / (|a| * |b|).
fn cosine(a: &[f32; DIMENSIONS], b: &[f32; DIMENSIONS]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similaridade_consigo_mesma() {
        let vectors = WordVectors::new();
        let sim = vectors.similarity("coração", "coração").unwrap();
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_anatomia_proxima_planta_distante() {
        let vectors = WordVectors::new();
        let organs = vectors.similarity("coração", "pulmão").unwrap();
        let organ_plant = vectors.similarity("coração", "pinha").unwrap();
        assert!(organs > 0.9);
        assert!(organ_plant < 0.2);
        assert!(organs > organ_plant);
    }

    #[test]
    fn test_lookup_sem_caso() {
        let vectors = WordVectors::new();
        assert!(vectors.has_vector("Coração"));
        assert!(!vectors.has_vector("zzz"));
    }

    #[test]
    fn test_palavra_desconhecida() {
        let vectors = WordVectors::new();
        assert_eq!(vectors.similarity("coração", "inexistente"), None);
    }

    #[test]
    fn test_pairwise_ordem_e_contagem() {
        let vectors = WordVectors::new();
        let pairs = vectors.pairwise(&["coração", "torácico", "pulmão", "pinha"]);
        // C(4,2) = 6 pares
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0].left, "coração");
        assert_eq!(pairs[0].right, "torácico");
        assert!(pairs.iter().all(|p| p.similarity.is_some()));
    }

    #[test]
    fn test_pairwise_com_desconhecida() {
        let vectors = WordVectors::new();
        let pairs = vectors.pairwise(&["coração", "xyz"]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].similarity, None);
    }

    #[test]
    fn test_simetria() {
        let vectors = WordVectors::new();
        assert_eq!(
            vectors.similarity("gato", "rato"),
            vectors.similarity("rato", "gato")
        );
    }
}
