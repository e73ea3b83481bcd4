//! Edit distance used by the did-you-mean advisor.
//!
//! Only the restricted Damerau-Levenshtein variant (optimal string alignment)
//! is provided: typos in shop queries are dominated by single insertions,
//! deletions, substitutions and swapped neighbours ("kanpae").

use std::cmp::min;

/// Calculate the optimal-string-alignment distance between two strings.
///
/// Counts insertions, deletions, substitutions and transpositions of two
/// adjacent characters. Works on `char`s, not bytes.
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    osa_distance(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Distance with an upper bound.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`:
/// on the length difference alone, or once a whole row of the table is
/// above it. This keeps scans over the whole registry cheap.
pub fn damerau_levenshtein_within(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }

    osa_distance(&a, &b, threshold)
}

/// Row-by-row OSA table; `None` once every cell of a row exceeds `threshold`.
///
/// Row minimums never decrease, so a row above the threshold bounds the
/// final distance too.
fn osa_distance(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return (distance <= threshold).then_some(distance);
    }

    // Three rolling rows: two rows back is needed for transpositions.
    let mut before_prev: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = min(min(prev[j] + 1, curr[j - 1] + 1), prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = min(best, before_prev[j - 2] + 1);
            }
            curr[j] = best;
            row_min = min(row_min, best);
        }
        if row_min > threshold {
            return None;
        }
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= threshold).then_some(distance)
}
