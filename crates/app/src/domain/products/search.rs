//! Fuzzy product search.
//!
//! Matches a query against product names and keywords: substring hits always
//! qualify, otherwise normalized edit-distance similarity must reach 0.6
//! (tolerating roughly 40% mismatch). Results are ordered by descending
//! relevance; ties keep catalog order.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

use crate::domain::products::models::Product;

/// Minimum similarity for a non-substring match.
const MATCH_THRESHOLD: f64 = 0.6;

pub(crate) fn rank(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return products;
    }

    let mut scored: Vec<(f64, Product)> = products
        .into_iter()
        .filter_map(|product| {
            let score = score(&product, &needle);

            if score >= MATCH_THRESHOLD {
                Some((score, product))
            } else {
                None
            }
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(_, product)| product).collect()
}

fn score(product: &Product, needle: &str) -> f64 {
    let name_score = field_score(&product.name, needle);

    product
        .keywords
        .iter()
        .map(|keyword| field_score(keyword, needle))
        .fold(name_score, f64::max)
}

fn field_score(field: &str, needle: &str) -> f64 {
    let haystack = field.to_lowercase();

    if haystack.contains(needle) {
        return 1.0;
    }

    // Compare against the whole field and each word so "baskteball" still
    // lands on "Intermediate Size Basketball".
    haystack
        .split_whitespace()
        .map(|word| normalized_levenshtein(word, needle))
        .fold(normalized_levenshtein(&haystack, needle), f64::max)
}
