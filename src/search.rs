//! Search and ranking engine.
//!
//! Queries and compared fields share one normal form: lower-cased, with
//! diacritics folded away and everything that is not a letter or digit
//! collapsed to single spaces. A query is classified once as
//! identifier-like or name-like, which reorders the per-field priority
//! table; every token must hit at least one field or the record drops out.

use crate::product::Product;
use crate::schema::Field;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How a query string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Looks like an article number: priority starts at the identifier.
    Identifier,
    /// Free text: the category fields outrank the identifier.
    Name,
}

/// Tunable search behavior.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// A single digit-free token shorter than this many characters is
    /// still treated as identifier-like. The threshold is a guess about
    /// intent, so it is configuration rather than structure.
    pub identifier_token_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            identifier_token_limit: 10,
        }
    }
}

/// Per-field scores, highest priority first. The first field containing a
/// token decides that token's score; lower rows are never summed on top.
const IDENTIFIER_PRIORITY: [(Field, u32); 4] = [
    (Field::Identifier, 100),
    (Field::SubCategory, 90),
    (Field::MainCategory, 80),
    (Field::Name, 70),
];

const NAME_PRIORITY: [(Field, u32); 4] = [
    (Field::SubCategory, 100),
    (Field::MainCategory, 90),
    (Field::Identifier, 80),
    (Field::Name, 70),
];

/// One search match: a borrowed record plus its transient score.
///
/// The score lives only on the hit, never on the stored record, so
/// re-running a query can never leak state into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub product: &'a Product,
    pub score: u32,
}

/// Shared normal form for queries and compared fields.
///
/// Lower-case, NFD-decompose and drop combining marks (`Blå` → `bla`),
/// then map every non-alphanumeric character to a space and collapse runs.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify a raw query before normalization (hyphens still present).
///
/// Identifier-like when the trimmed query contains an ASCII digit, or is a
/// single whitespace-free token of word characters/hyphens shorter than
/// the configured limit. Everything else reads as free text.
pub fn classify_query(query: &str, options: &SearchOptions) -> QueryMode {
    let query = query.trim();
    if query.chars().any(|c| c.is_ascii_digit()) {
        return QueryMode::Identifier;
    }

    let word_like = query
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if !query.is_empty() && word_like && query.chars().count() < options.identifier_token_limit {
        QueryMode::Identifier
    } else {
        QueryMode::Name
    }
}

fn priority_table(mode: QueryMode) -> &'static [(Field, u32); 4] {
    match mode {
        QueryMode::Identifier => &IDENTIFIER_PRIORITY,
        QueryMode::Name => &NAME_PRIORITY,
    }
}

/// Search the record list.
///
/// A record qualifies only when every token scores on some field (AND
/// across tokens); its score is the sum of per-token scores. Output is
/// ordered by descending score, equal scores keep ingestion order (stable
/// sort). An empty — or normalized-empty — query returns every record
/// unscored, in ingestion order.
pub fn search<'a>(
    products: &'a [Product],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchHit<'a>> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return products
            .iter()
            .map(|product| SearchHit { product, score: 0 })
            .collect();
    }

    let table = priority_table(classify_query(query, options));
    let tokens: Vec<&str> = normalized.split(' ').collect();

    let mut hits = Vec::new();
    for product in products {
        // Normal forms of the four compared fields, in priority order.
        let compared: Vec<(String, u32)> = table
            .iter()
            .map(|(field, points)| (normalize(product.get(*field)), *points))
            .collect();

        let mut total = 0u32;
        let mut matched_all = true;
        for &token in &tokens {
            let token_score = compared
                .iter()
                .find(|(text, _)| text.contains(token))
                .map(|(_, points)| *points)
                .unwrap_or(0);
            if token_score == 0 {
                matched_all = false;
                break;
            }
            total += token_score;
        }

        if matched_all {
            hits.push(SearchHit {
                product,
                score: total,
            });
        }
    }

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}
