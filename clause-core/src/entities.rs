//! # Entidades Nomeadas — Gazetteers e Padrões
//!
//! Reconhecimento de entidades por conhecimento explícito: listas de nomes
//! conhecidos (gazetteers) e o padrão "título + nome próprio". É a parte da
//! demonstração que apenas repassa o que o serviço de anotação sabe — não há
//! decisão sintática aqui, só lookup.

use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Categorias de entidade reconhecidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityCategory {
    /// Pessoa: "Machado de Assis", "Santos Dumont".
    Per,
    /// Organização: "Fiocruz", "Petrobras".
    Org,
    /// Localização: "Brasília", "Amazônia".
    Loc,
    /// Miscelânea: eventos, obras, doenças.
    Misc,
}

impl EntityCategory {
    /// Nome da categoria como string (para serialização e UI)
    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Per => "PER",
            EntityCategory::Org => "ORG",
            EntityCategory::Loc => "LOC",
            EntityCategory::Misc => "MISC",
        }
    }

    /// Cor CSS para highlight na UI
    pub fn color(&self) -> &'static str {
        match self {
            EntityCategory::Per => "#3b82f6",
            EntityCategory::Org => "#10b981",
            EntityCategory::Loc => "#f59e0b",
            EntityCategory::Misc => "#8b5cf6",
        }
    }
}

/// Uma entidade identificada no texto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Texto da entidade (ex: "Rio de Janeiro").
    pub text: String,
    /// Categoria da entidade.
    pub category: EntityCategory,
    /// Índice do primeiro token.
    pub start_token: usize,
    /// Índice do último token (inclusivo).
    pub end_token: usize,
    /// Offset de byte inicial no texto original.
    pub start: usize,
    /// Offset de byte final no texto original.
    pub end: usize,
    /// Qual regra identificou a entidade.
    pub source: String,
}

/// Pessoas conhecidas (um token)
const PERSONS: &[&str] = &[
    "lula", "dilma", "temer", "bolsonaro", "cardoso", "sarney", "collor",
    "pelé", "senna", "neymar", "ronaldo", "zico", "garrincha", "anitta",
    "caetano", "chico", "buarque", "drummond", "machado", "assis",
    "lispector", "clarice", "oswaldo", "cruz", "dumont",
];

/// Localizações conhecidas (até três tokens)
const LOCATIONS: &[&str] = &[
    "brasil", "brasília", "são paulo", "rio de janeiro", "salvador",
    "recife", "curitiba", "manaus", "fortaleza", "porto alegre",
    "minas gerais", "amazônia", "pantanal", "cerrado", "nordeste",
    "argentina", "portugal", "frança", "alemanha", "japão", "maracanã",
];

/// Organizações conhecidas (até três tokens)
const ORGS: &[&str] = &[
    "fiocruz", "petrobras", "embraer", "anvisa", "ibge", "inpe", "bndes",
    "instituto butantan", "banco central", "usp", "unicamp", "ufrj",
    "flamengo", "corinthians", "palmeiras", "onu", "fifa", "oms",
];

/// Miscelânea: eventos, doenças, obras
const MISC: &[&str] = &[
    "copa do mundo", "olimpíadas", "carnaval", "covid-19", "dengue",
    "zika", "pib", "selic", "lava jato", "dom casmurro",
];

/// Títulos que precedem nomes de pessoas
const TITLES: &[&str] = &[
    "presidente", "senador", "senadora", "deputado", "deputada", "ministro",
    "ministra", "governador", "governadora", "prefeito", "prefeita",
    "doutor", "doutora", "dr.", "dra.", "professor", "professora",
];

/// Regras de reconhecimento de entidades com gazetteers embutidos.
pub struct EntityRules {
    persons: Vec<String>,
    locations: Vec<Vec<String>>,
    orgs: Vec<Vec<String>>,
    misc: Vec<Vec<String>>,
    titles: Vec<String>,
}

impl EntityRules {
    pub fn new() -> Self {
        let split = |list: &[&str]| -> Vec<Vec<String>> {
            list.iter()
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .collect()
        };
        Self {
            persons: PERSONS.iter().map(|s| s.to_string()).collect(),
            locations: split(LOCATIONS),
            orgs: split(ORGS),
            misc: split(MISC),
            titles: TITLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Acrescenta uma pessoa ao gazetteer (para testes e extensão)
    pub fn add_person(&mut self, name: &str) {
        self.persons.push(name.to_lowercase());
    }

    /// Aplica todas as regras ao texto tokenizado.
    ///
    /// Gazetteers multi-token têm prioridade sobre os de token único; cada
    /// token participa de no máximo uma entidade.
    pub fn find_entities(&self, tokens: &[Token], text: &str) -> Vec<EntitySpan> {
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut taken = vec![false; tokens.len()];
        let mut spans = Vec::new();

        // 1. Gazetteers multi-token (maior match primeiro)
        for (list, category, source) in [
            (&self.locations, EntityCategory::Loc, "location_gazetteer"),
            (&self.orgs, EntityCategory::Org, "org_gazetteer"),
            (&self.misc, EntityCategory::Misc, "misc_gazetteer"),
        ] {
            for i in 0..tokens.len() {
                if taken[i] {
                    continue;
                }
                let best = list
                    .iter()
                    .filter(|parts| {
                        i + parts.len() <= tokens.len()
                            && parts.iter().enumerate().all(|(j, p)| lower[i + j] == *p)
                            && !taken[i..i + parts.len()].iter().any(|t| *t)
                    })
                    .map(|parts| parts.len())
                    .max();
                if let Some(len) = best {
                    mark(&mut taken, i, len);
                    spans.push(span_of(tokens, text, i, i + len - 1, category, source));
                }
            }
        }

        // 2. Pessoas (token único)
        for i in 0..tokens.len() {
            if !taken[i] && self.persons.contains(&lower[i]) {
                taken[i] = true;
                spans.push(span_of(tokens, text, i, i, EntityCategory::Per, "person_gazetteer"));
            }
        }

        // 3. Padrão "título + Maiúscula": "a presidente Dilma" → Dilma é PER
        for i in 0..tokens.len().saturating_sub(1) {
            if taken[i + 1] || !self.titles.contains(&lower[i]) {
                continue;
            }
            let next_upper = tokens[i + 1]
                .text
                .chars()
                .next()
                .map(|c| c.is_uppercase())
                .unwrap_or(false);
            if next_upper {
                taken[i + 1] = true;
                spans.push(span_of(tokens, text, i + 1, i + 1, EntityCategory::Per, "title_pattern"));
            }
        }

        spans.sort_by_key(|s| s.start);
        spans
    }
}

impl Default for EntityRules {
    fn default() -> Self {
        Self::new()
    }
}

fn mark(taken: &mut [bool], start: usize, len: usize) {
    for slot in &mut taken[start..start + len] {
        *slot = true;
    }
}

fn span_of(
    tokens: &[Token],
    text: &str,
    first: usize,
    last: usize,
    category: EntityCategory,
    source: &str,
) -> EntitySpan {
    let start = tokens[first].start;
    let end = tokens[last].end;
    EntitySpan {
        text: text[start..end].to_string(),
        category,
        start_token: first,
        end_token: last,
        start,
        end,
        source: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_gazetteer_token_unico() {
        let rules = EntityRules::new();
        let text = "A Fiocruz fica no Brasil.";
        let spans = rules.find_entities(&tokenize(text), text);

        let cats: Vec<(&str, EntityCategory)> =
            spans.iter().map(|s| (s.text.as_str(), s.category)).collect();
        assert!(cats.contains(&("Fiocruz", EntityCategory::Org)));
        assert!(cats.contains(&("Brasil", EntityCategory::Loc)));
    }

    #[test]
    fn test_gazetteer_multitoken() {
        let rules = EntityRules::new();
        let text = "Visitei o Rio de Janeiro ontem.";
        let spans = rules.find_entities(&tokenize(text), text);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Rio de Janeiro");
        assert_eq!(spans[0].category, EntityCategory::Loc);
        assert_eq!(spans[0].end_token - spans[0].start_token, 2);
    }

    #[test]
    fn test_padrao_titulo() {
        let rules = EntityRules::new();
        // "Joana" não está em nenhum gazetteer; só o título a identifica
        let text = "A presidente Joana discursou.";
        let spans = rules.find_entities(&tokenize(text), text);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Joana");
        assert_eq!(spans[0].category, EntityCategory::Per);
        assert_eq!(spans[0].source, "title_pattern");
    }

    #[test]
    fn test_token_participa_de_uma_entidade() {
        let rules = EntityRules::new();
        // "São Paulo" é LOC multi-token; "paulo" não deve repetir como PER
        let text = "Moro em São Paulo.";
        let spans = rules.find_entities(&tokenize(text), text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "São Paulo");
    }

    #[test]
    fn test_sem_entidades() {
        let rules = EntityRules::new();
        let text = "o gato dormiu no sofá";
        assert!(rules.find_entities(&tokenize(text), text).is_empty());
    }
}
