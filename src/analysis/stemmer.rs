//! Light-weight Hungarian suffix handling.
//!
//! Product names are inflected ("Kanapék", "Fotelok", "Székek") while the
//! synonym registry stores base forms. Instead of a full morphological
//! stemmer, a token is considered an inflection of a term when the term is a
//! prefix of the token and the remainder is one of a small set of common
//! endings. Everything operates on normalized (ASCII) text.

/// Minimum length of a base form eligible for suffix matching.
pub const MIN_STEM_LEN: usize = 3;

/// Minimum length of a term recognized as the last member of a compound.
pub const MIN_COMPOUND_TERM_LEN: usize = 4;

/// Minimum length of the part in front of the term in a compound.
const MIN_COMPOUND_HEAD_LEN: usize = 2;

/// Common Hungarian endings in normalized form (plural, accusative, possessive,
/// case endings and the adjective-forming `-s`/`-i`).
const HUNGARIAN_SUFFIXES: &[&str] = &[
    "k", "ek", "ok", "ak", "t", "at", "et", "ot", "kat", "ket", "okat", "eket", "akat", "s",
    "as", "es", "os", "i", "ai", "ei", "ba", "be", "ban", "ben", "ra", "re", "rol", "hoz",
    "nak", "nek", "ja", "je", "uk", "juk", "bol", "ig",
];

/// Check whether `token` is `term` or an inflected form of it.
///
/// ```
/// use butorkereso::analysis::stemmer::matches_inflected;
///
/// assert!(matches_inflected("kanapek", "kanape"));
/// assert!(matches_inflected("szekek", "szek"));
/// assert!(!matches_inflected("szekreny", "szek"));
/// ```
pub fn matches_inflected(token: &str, term: &str) -> bool {
    if token == term {
        return true;
    }
    if term.len() < MIN_STEM_LEN || !token.starts_with(term) {
        return false;
    }
    HUNGARIAN_SUFFIXES.contains(&&token[term.len()..])
}

/// Check whether `token` is `term`, an inflection of it, or a compound that
/// ends in it ("borkanape", "sarokkanapek" for "kanape").
///
/// The term has to close the compound, so "szekreny" does not contain
/// "szek", while "barszek" does.
///
/// ```
/// use butorkereso::analysis::stemmer::matches_compound;
///
/// assert!(matches_compound("borkanape", "kanape"));
/// assert!(matches_compound("relaxfotelek", "fotel"));
/// assert!(!matches_compound("szekreny", "szek"));
/// ```
pub fn matches_compound(token: &str, term: &str) -> bool {
    if matches_inflected(token, term) {
        return true;
    }
    if term.len() < MIN_COMPOUND_TERM_LEN {
        return false;
    }
    std::iter::once("")
        .chain(HUNGARIAN_SUFFIXES.iter().copied())
        .any(|suffix| {
            token.len() >= MIN_COMPOUND_HEAD_LEN + term.len() + suffix.len()
                && token.ends_with(suffix)
                && token[..token.len() - suffix.len()].ends_with(term)
        })
}

/// Candidate base forms of `token`, longest suffix stripped first.
///
/// The token itself is not included. Stems shorter than [`MIN_STEM_LEN`] are
/// skipped.
pub fn stem_candidates(token: &str) -> Vec<&str> {
    let mut suffixes: Vec<&str> = HUNGARIAN_SUFFIXES
        .iter()
        .copied()
        .filter(|suffix| token.len() >= suffix.len() + MIN_STEM_LEN && token.ends_with(suffix))
        .collect();
    suffixes.sort_by_key(|suffix| std::cmp::Reverse(suffix.len()));

    suffixes
        .into_iter()
        .map(|suffix| &token[..token.len() - suffix.len()])
        .collect()
}
