//! Related-products recommendation.
//!
//! Candidates are ranked by category affinity first (both categories
//! shared, parent only, none), then by numeric article-number proximity.
//! A record whose identifier does not parse as a number is still eligible,
//! at maximal distance — never an error.

use crate::product::Product;
use crate::search::normalize;
use std::cmp::Reverse;

/// Default number of related records shown next to a product card.
pub const DEFAULT_RELATED_LIMIT: usize = 6;

/// Distance used when either side lacks a numeric identifier.
const MAX_DISTANCE: u64 = u64::MAX;

fn parse_identifier(identifier: &str) -> Option<i64> {
    identifier.trim().parse().ok()
}

/// Category affinity: 2 when parent and sub category both match under
/// normalized equality, 1 for parent only, 0 otherwise.
fn category_score(focal_main: &str, focal_sub: &str, candidate: &Product) -> u8 {
    if normalize(&candidate.main_category) != focal_main {
        return 0;
    }
    if normalize(&candidate.sub_category) == focal_sub {
        2
    } else {
        1
    }
}

fn identifier_distance(focal: Option<i64>, candidate: &Product) -> u64 {
    match (focal, parse_identifier(&candidate.identifier)) {
        (Some(a), Some(b)) => a.abs_diff(b),
        _ => MAX_DISTANCE,
    }
}

/// Rank the records related to `products[focal_index]`.
///
/// The focal record is excluded by position, so duplicate identifiers can
/// never alias it back into its own results. Candidates with a blank
/// identifier are skipped. Ties fall back to ingestion order (stable
/// sort), making the output fully deterministic. An out-of-range index
/// yields no results.
pub fn related<'a>(products: &'a [Product], focal_index: usize, limit: usize) -> Vec<&'a Product> {
    let focal = match products.get(focal_index) {
        Some(product) => product,
        None => return Vec::new(),
    };

    let focal_main = normalize(&focal.main_category);
    let focal_sub = normalize(&focal.sub_category);
    let focal_id = parse_identifier(&focal.identifier);

    let mut ranked: Vec<(&Product, u8, u64)> = products
        .iter()
        .enumerate()
        .filter(|(index, candidate)| {
            *index != focal_index && !candidate.identifier.trim().is_empty()
        })
        .map(|(_, candidate)| {
            (
                candidate,
                category_score(&focal_main, &focal_sub, candidate),
                identifier_distance(focal_id, candidate),
            )
        })
        .collect();

    ranked.sort_by_key(|(_, score, distance)| (Reverse(*score), *distance));
    ranked.truncate(limit);
    ranked.into_iter().map(|(candidate, _, _)| candidate).collect()
}
