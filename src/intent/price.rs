//! Price phrase recognition.
//!
//! Works on [`fold`](crate::analysis::fold)ed text so decimal separators
//! survive ("1,5 millió"). Recognized shapes:
//!
//! - `100e alatt`, `100 ezer alatt`, `max 100k`, `100e-ig`, `100 000 Ft alatt`
//! - `80ezer felett`, `80e-től`, `min 80 000`
//! - `80 és 150 ezer között`, `80-150e`
//!
//! A number without a direction word is never a price filter, and neither is
//! a small bare number ("max 3 személyes") without magnitude or currency.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::normalize;

/// Inclusive price interval; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn below(max: f64) -> Self {
        PriceRange {
            min: None,
            max: Some(max),
        }
    }

    pub fn above(min: f64) -> Self {
        PriceRange {
            min: Some(min),
            max: None,
        }
    }

    pub fn between(a: f64, b: f64) -> Self {
        PriceRange {
            min: Some(a.min(b)),
            max: Some(a.max(b)),
        }
    }

    /// Check whether a price falls inside the range (bounds inclusive).
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Direction a price bound points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Below,
    Above,
    Between,
}

const BELOW_WORDS: &[&str] = &[
    "alatt",
    "alatti",
    "alattiak",
    "alattit",
    "ig",
    "max",
    "maximum",
    "maximalis",
    "legfeljebb",
    "under",
    "below",
    "olcsobb",
];
const ABOVE_WORDS: &[&str] = &[
    "felett",
    "feletti",
    "felettiek",
    "felettit",
    "folott",
    "folotti",
    "folottiek",
    "folottit",
    "tol",
    "min",
    "minimum",
    "legalabb",
    "over",
    "above",
    "dragabb",
];
const BETWEEN_WORDS: &[&str] = &["kozott", "between"];
const CONNECTOR_WORDS: &[&str] = &["es", "and", "to"];
const CURRENCY_WORDS: &[&str] = &["forint", "huf", "ft"];
/// Magnitude suffixes, longest first so "ezer" is not read as "e" + "zer".
const MAGNITUDES: &[(&str, f64)] = &[
    ("millio", 1_000_000.0),
    ("ezer", 1_000.0),
    ("mio", 1_000_000.0),
    ("e", 1_000.0),
    ("k", 1_000.0),
    ("m", 1_000_000.0),
];
/// Smallest number accepted as a price without magnitude or currency.
const MIN_BARE_AMOUNT: f64 = 1_000.0;
/// Case endings that may trail an amount without changing its meaning.
const NEUTRAL_ENDINGS: &[&str] = &["nal", "nel", "os", "es", "as"];

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:[.,]\d+)*)([a-z]*)$").expect("valid amount regex"));

fn direction_of(word: &str) -> Option<Direction> {
    if BELOW_WORDS.contains(&word) {
        Some(Direction::Below)
    } else if ABOVE_WORDS.contains(&word) {
        Some(Direction::Above)
    } else if BETWEEN_WORDS.contains(&word) {
        Some(Direction::Between)
    } else {
        None
    }
}

/// Whether a normalized word belongs to the price vocabulary (direction,
/// connector, currency or magnitude words).
pub fn is_price_word(word: &str) -> bool {
    direction_of(word).is_some()
        || CONNECTOR_WORDS.contains(&word)
        || CURRENCY_WORDS.contains(&word)
        || MAGNITUDES.iter().any(|(suffix, _)| *suffix == word)
}

/// Unit information parsed from the letters trailing a number, or from a
/// standalone word such as "ezer" or "ezertol".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Unit {
    magnitude: Option<f64>,
    currency: bool,
    direction: Option<Direction>,
}

impl Unit {
    fn is_price_like(&self) -> bool {
        self.magnitude.is_some() || self.currency
    }
}

impl Amount {
    /// Whether the amount reads as a price rather than a count.
    fn is_plausible_price(&self) -> bool {
        self.unit.is_price_like() || self.value >= MIN_BARE_AMOUNT
    }
}

/// Parse `[magnitude][currency][ending]`; `None` if letters are left over.
fn parse_unit(mut letters: &str) -> Option<Unit> {
    let mut unit = Unit::default();

    if let Some((suffix, factor)) = MAGNITUDES.iter().find(|(s, _)| letters.starts_with(s)) {
        // "e" only counts as a magnitude when what follows still parses
        let rest = &letters[suffix.len()..];
        if parse_tail(rest).is_some() {
            unit.magnitude = Some(*factor);
            letters = rest;
        }
    }

    let tail = parse_tail(letters)?;
    unit.currency = tail.currency;
    unit.direction = tail.direction;
    Some(unit)
}

fn parse_tail(mut letters: &str) -> Option<Unit> {
    let mut unit = Unit::default();
    if let Some(currency) = CURRENCY_WORDS.iter().find(|c| letters.starts_with(*c)) {
        unit.currency = true;
        letters = &letters[currency.len()..];
    }
    match letters {
        "" => {}
        "ig" => unit.direction = Some(Direction::Below),
        "tol" => unit.direction = Some(Direction::Above),
        ending if NEUTRAL_ENDINGS.contains(&ending) => {}
        _ => return None,
    }
    Some(unit)
}

/// Parse the numeric part, treating `100.000` / `1.500.000` as digit grouping
/// unless a magnitude makes a decimal reading more plausible (`1,5m`).
fn parse_number(digits: &str, has_magnitude: bool) -> Option<f64> {
    let separators = digits.matches(['.', ',']).count();
    let grouped = separators > 1
        || (separators == 1
            && !has_magnitude
            && digits
                .rsplit(['.', ','])
                .next()
                .is_some_and(|last| last.len() == 3));

    if grouped {
        digits.replace(['.', ','], "").parse().ok()
    } else {
        digits.replace(',', ".").parse().ok()
    }
}

#[derive(Debug, Clone)]
enum Piece {
    Amount {
        text: String,
        digits: String,
        unit: Unit,
    },
    Range {
        text: String,
        low: (String, Unit),
        high: (String, Unit),
    },
    Word(String),
}

impl Piece {
    fn text(&self) -> &str {
        match self {
            Piece::Amount { text, .. } | Piece::Range { text, .. } | Piece::Word(text) => text,
        }
    }
}

fn split_amount(text: &str) -> Option<(String, Unit)> {
    let caps = AMOUNT_RE.captures(text)?;
    let unit = parse_unit(&caps[2])?;
    Some((caps[1].to_string(), unit))
}

/// Split folded text into pieces: amounts, hyphenated ranges and words.
fn pieces(folded: &str) -> Vec<Piece> {
    let mut out = Vec::new();
    for raw in folded.split_whitespace() {
        let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() {
            continue;
        }

        if let Some((left, right)) = token.split_once('-')
            && left.starts_with(|c: char| c.is_ascii_digit())
            && right.starts_with(|c: char| c.is_ascii_digit())
            && let (Some(low), Some(high)) = (split_amount(left), split_amount(right))
        {
            out.push(Piece::Range {
                text: token.to_string(),
                low,
                high,
            });
            continue;
        }

        for part in token.split(|c: char| !(c.is_alphanumeric() || c == '.' || c == ',')) {
            let part = part.trim_matches(|c: char| c == '.' || c == ',');
            if part.is_empty() {
                continue;
            }
            match split_amount(part) {
                Some((digits, unit)) => out.push(Piece::Amount {
                    text: part.to_string(),
                    digits,
                    unit,
                }),
                None => out.push(Piece::Word(part.to_string())),
            }
        }
    }
    out
}

/// An amount assembled from one or more pieces.
#[derive(Debug, Clone)]
struct Amount {
    value: f64,
    unit: Unit,
    /// Index of the first and one past the last piece.
    span: (usize, usize),
}

fn piece_text(piece: &Piece) -> Option<&str> {
    match piece {
        Piece::Word(w) => Some(w.as_str()),
        _ => None,
    }
}

/// Assemble an amount starting at `start`: thousands groups ("150 000"), a
/// separate magnitude word ("100 ezer") and a currency word ("Ft").
fn read_amount(pieces: &[Piece], start: usize) -> Option<Amount> {
    let Some(Piece::Amount { digits, unit, .. }) = pieces.get(start) else {
        return None;
    };
    let mut unit = *unit;
    let mut digits = digits.clone();
    let mut end = start + 1;

    while unit.magnitude.is_none()
        && !unit.currency
        && unit.direction.is_none()
        && !digits.contains(['.', ','])
        && let Some(Piece::Amount {
            digits: group,
            unit: group_unit,
            ..
        }) = pieces.get(end)
        && group.len() == 3
        && group.chars().all(|c| c.is_ascii_digit())
    {
        digits.push_str(group);
        unit = *group_unit;
        end += 1;
    }

    if unit.magnitude.is_none()
        && !unit.currency
        && unit.direction.is_none()
        && let Some(word) = pieces.get(end).and_then(piece_text)
        && let Some(word_unit) = parse_unit(word).filter(Unit::is_price_like)
    {
        unit = word_unit;
        end += 1;
    }

    if !unit.currency
        && unit.direction.is_none()
        && let Some(word) = pieces.get(end).and_then(piece_text)
        && let Some(word_unit) = parse_tail(word).filter(|u| u.currency)
    {
        unit.currency = true;
        unit.direction = word_unit.direction;
        end += 1;
    }

    let value = parse_number(&digits, unit.magnitude.is_some())? * unit.magnitude.unwrap_or(1.0);
    Some(Amount {
        value,
        unit,
        span: (start, end),
    })
}

/// One recognized price phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Below(f64),
    Above(f64),
    Between(f64, f64),
}

/// Outcome of scanning a query for price phrases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceScan {
    /// Combined range, `None` if no phrase was recognized.
    pub range: Option<PriceRange>,
    /// Normalized tokens consumed by recognized phrases.
    pub consumed: Vec<String>,
}

/// Scan folded query text for price phrases.
pub fn scan(folded: &str) -> PriceScan {
    let pieces = pieces(folded);
    let mut bounds = Vec::new();
    let mut used = vec![false; pieces.len()];
    let mut i = 0;

    while i < pieces.len() {
        if let Piece::Range { low, high, .. } = &pieces[i] {
            if let Some((a, b)) = range_values(low, high) {
                bounds.push(Bound::Between(a, b));
                used[i] = true;
                // "80-150e között" / "80-150e ft"
                if let Some(next) = pieces.get(i + 1).and_then(piece_text)
                    && direction_of(next) == Some(Direction::Between)
                {
                    used[i + 1] = true;
                    i += 1;
                }
            }
            i += 1;
            continue;
        }

        let Some(amount) = read_amount(&pieces, i) else {
            i += 1;
            continue;
        };
        let (start, end) = amount.span;

        // "80 és 150 ezer között"
        if let Some(connector) = pieces.get(end).and_then(piece_text)
            && CONNECTOR_WORDS.contains(&connector)
            && let Some(second) = read_amount(&pieces, end + 1)
        {
            let after = pieces.get(second.span.1).and_then(piece_text);
            let before = start
                .checked_sub(1)
                .and_then(|b| pieces.get(b))
                .and_then(piece_text);
            let closes = after.and_then(direction_of) == Some(Direction::Between);
            let opens = before.and_then(direction_of) == Some(Direction::Between);
            if (closes || opens) && (amount.unit.is_price_like() || second.is_plausible_price()) {
                let low = if amount.unit.magnitude.is_none() {
                    amount.value * second.unit.magnitude.unwrap_or(1.0)
                } else {
                    amount.value
                };
                bounds.push(Bound::Between(low, second.value));
                let mut last = second.span.1;
                if closes {
                    last += 1;
                }
                let first = if opens { start - 1 } else { start };
                used[first..last].iter_mut().for_each(|u| *u = true);
                i = last;
                continue;
            }
        }

        if !amount.is_plausible_price() {
            debug!("Ignoring bare number {} at piece {start}", amount.value);
            i = end;
            continue;
        }

        // The last directional token adjacent to the number wins: attached
        // ending, then the word after, then the word before.
        let after = pieces
            .get(end)
            .and_then(piece_text)
            .and_then(direction_of)
            .filter(|d| *d != Direction::Between);
        let before = start
            .checked_sub(1)
            .filter(|b| !used[*b])
            .and_then(|b| pieces.get(b))
            .and_then(piece_text)
            .and_then(direction_of)
            .filter(|d| *d != Direction::Between);

        let (direction, first, last) = match (amount.unit.direction, after, before) {
            (Some(d), _, _) => (d, start, end),
            (None, Some(d), _) => (d, start, end + 1),
            (None, None, Some(d)) => (d, start - 1, end),
            (None, None, None) => {
                debug!("Ignoring number without direction word at piece {start}");
                i = end;
                continue;
            }
        };

        match direction {
            Direction::Below => bounds.push(Bound::Below(amount.value)),
            Direction::Above => bounds.push(Bound::Above(amount.value)),
            Direction::Between => {}
        }
        used[first..last].iter_mut().for_each(|u| *u = true);
        i = last;
    }

    let consumed = pieces
        .iter()
        .zip(&used)
        .filter(|(_, used)| **used)
        .flat_map(|(piece, _)| {
            normalize(piece.text())
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    PriceScan {
        range: combine(&bounds),
        consumed,
    }
}

fn range_values(low: &(String, Unit), high: &(String, Unit)) -> Option<(f64, f64)> {
    let (low_digits, low_unit) = low;
    let (high_digits, high_unit) = high;
    if !low_unit.is_price_like() && !high_unit.is_price_like() {
        return None;
    }
    let high_value =
        parse_number(high_digits, high_unit.magnitude.is_some())? * high_unit.magnitude.unwrap_or(1.0);
    let low_factor = low_unit.magnitude.or(high_unit.magnitude).unwrap_or(1.0);
    let low_value = parse_number(low_digits, low_unit.magnitude.is_some())? * low_factor;
    Some((low_value, high_value))
}

/// Merge phrases into the narrowest consistent range. A second bound in the
/// same direction, or one contradicting the range so far, is ignored.
fn combine(bounds: &[Bound]) -> Option<PriceRange> {
    if bounds.is_empty() {
        return None;
    }

    let mut range = PriceRange::default();
    for bound in bounds {
        let (low, high) = match *bound {
            Bound::Below(v) => (None, Some(v)),
            Bound::Above(v) => (Some(v), None),
            Bound::Between(a, b) => (Some(a.min(b)), Some(a.max(b))),
        };

        if let Some(low) = low {
            if range.min.is_none() && range.max.is_none_or(|max| low <= max) {
                range.min = Some(low);
            } else {
                debug!("Ignoring conflicting lower price bound {low}");
            }
        }
        if let Some(high) = high {
            if range.max.is_none() && range.min.is_none_or(|min| high >= min) {
                range.max = Some(high);
            } else {
                debug!("Ignoring conflicting upper price bound {high}");
            }
        }
    }

    (!range.is_unbounded()).then_some(range)
}

/// Render an amount in the shorthand the scanner accepts ("100e", "1,5m").
///
/// Other amounts keep their exact digits with a currency word ("999,5 ft"),
/// so they are read back as prices. A three-digit fraction gets a trailing
/// zero to keep it from reading as a thousands group.
pub fn format_amount(value: f64) -> String {
    if value >= 1_000_000.0 && (value % 100_000.0) == 0.0 {
        let millions = value / 1_000_000.0;
        return format!("{millions}m").replace('.', ",");
    }
    if value >= 1_000.0 && (value % 1_000.0) == 0.0 {
        return format!("{}e", value / 1_000.0);
    }
    let mut digits = value.to_string().replace('.', ",");
    if digits.split_once(',').is_some_and(|(_, fraction)| fraction.len() == 3) {
        digits.push('0');
    }
    format!("{digits} ft")
}

impl PriceRange {
    /// Render the range as a query phrase, e.g. "100e alatt".
    pub fn to_phrase(&self) -> Option<String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(format!(
                "{} és {} között",
                format_amount(min),
                format_amount(max)
            )),
            (None, Some(max)) => Some(format!("{} alatt", format_amount(max))),
            (Some(min), None) => Some(format!("{} felett", format_amount(min))),
            (None, None) => None,
        }
    }
}
