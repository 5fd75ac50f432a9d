use crate::catalog::{Catalog, NameStyle, NamedEntry};
use crate::errors::ReferenceError;
use deunicode::deunicode;
use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Minimum similarity for a fuzzy candidate to be considered at all.
pub const MIN_SIMILARITY: f64 = 0.75;

/// A candidate is discarded once it trails the best score by this much.
pub const SIMILARITY_WINDOW: f64 = 0.1;

/// A raw reference as it appears in a record: a positional index, a
/// (possibly misspelled) name, or null for "no selection".
#[derive(Debug, Clone, PartialEq)]
pub enum RefToken {
    Index(usize),
    Name(String),
    Null,
}

impl fmt::Display for RefToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefToken::Index(index) => write!(f, "{}", index),
            RefToken::Name(name) => write!(f, "{}", name),
            RefToken::Null => write!(f, "null"),
        }
    }
}

/// Result of a catalog resolution: the (cloned) entity plus whether the
/// match was exact. `exact: false` means a fuzzy correction was accepted
/// and the caller should surface an advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub entity: T,
    pub exact: bool,
}

/// Normalized Levenshtein similarity over lowercased strings, 0.0-1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Fold a species name for matching: map the gender glyphs to ASCII
/// suffixes, strip diacritics, lowercase. `Nidoran♂` becomes
/// `nidoran-m`, so the common ASCII spellings resolve exactly.
pub fn normalize_name(name: &str) -> String {
    let mut mapped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '♀' => mapped.push_str("-f"),
            '♂' => mapped.push_str("-m"),
            _ => mapped.push(c),
        }
    }
    deunicode(&mapped).to_lowercase()
}

/// Whether two names differ by more than hyphens and spaces, compared
/// case- and diacritic-insensitively. Insignificant differences suppress
/// the autocorrection advisory: the match was not literally exact, but
/// the caller clearly meant this entry.
pub fn is_difference_significant(name1: &str, name2: &str) -> bool {
    let folded1 = deunicode(&name1.to_lowercase());
    let folded2 = deunicode(&name2.to_lowercase());
    let mut counts: BTreeMap<char, i64> = BTreeMap::new();
    for c in folded1.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in folded2.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }
    counts
        .iter()
        .any(|(&c, &count)| count != 0 && c != '-' && c != ' ')
}

impl<T: NamedEntry> Catalog<T> {
    /// The name an entry is matched under for exact lookups.
    fn exact_key<'a>(&self, entry: &'a T) -> Option<&'a str> {
        let name = entry.name()?;
        match self.style() {
            NameStyle::StripSuffix(suffix) => Some(name.strip_suffix(suffix).unwrap_or(name)),
            _ => Some(name),
        }
    }

    /// The name an entry is matched under for fuzzy lookups.
    fn fuzzy_key<'a>(&self, entry: &'a T) -> Option<Cow<'a, str>> {
        let name = entry.name()?;
        match self.style() {
            NameStyle::Plain => Some(Cow::Borrowed(name)),
            NameStyle::Normalized => Some(Cow::Owned(normalize_name(name))),
            NameStyle::StripSuffix(suffix) => {
                Some(Cow::Borrowed(name.strip_suffix(suffix).unwrap_or(name)))
            }
        }
    }

    /// Exact lookup by name (case-sensitive) or by null for the
    /// catalog's null entry.
    pub fn get_exact(&self, token: &RefToken) -> Option<&T> {
        match token {
            RefToken::Index(index) => self.by_index(*index),
            RefToken::Null => self.iter().find(|entry| entry.name().is_none()),
            RefToken::Name(name) => self
                .iter()
                .find(|entry| self.exact_key(entry) == Some(name.as_str())),
        }
    }

    /// Collect fuzzy candidates scoring at least `min_similarity`,
    /// keeping only entries within [`SIMILARITY_WINDOW`] of the running
    /// maximum. A full match short-circuits to a single candidate.
    ///
    /// More than one surviving candidate means the token is ambiguous;
    /// none means it is unknown.
    pub fn find_similar(&self, token: &str, min_similarity: f64) -> Vec<&T> {
        let token_key = match self.style() {
            NameStyle::Normalized => Cow::Owned(normalize_name(token)),
            _ => Cow::Borrowed(token),
        };

        let mut highest = OrderedFloat(0.0f64);
        let mut kept: Vec<&T> = Vec::new();
        for entry in self.iter() {
            let Some(key) = self.fuzzy_key(entry) else {
                continue; // null entry, matched only by a null token
            };
            let score = OrderedFloat(similarity(&token_key, &key));
            if score.0 == 1.0 {
                return vec![entry];
            }
            if (score - highest).0 > SIMILARITY_WINDOW {
                // the rest isn't close enough, ditch them
                kept.clear();
            }
            if score.0 >= min_similarity && (highest - score).0 < SIMILARITY_WINDOW {
                kept.push(entry);
            }
            highest = highest.max(score);
        }
        kept
    }

    /// Resolve a raw token per the full contract: index, null and exact
    /// name lookups first, then fuzzy correction with ambiguity
    /// detection. The returned entity is a clone; `exact` is false only
    /// when a fuzzy correction differed significantly from the token.
    pub fn resolve(&self, token: &RefToken) -> Result<Resolved<T>, ReferenceError> {
        let (entity, exact) = match token {
            RefToken::Index(index) => {
                let entry = self.by_index(*index).ok_or(ReferenceError::InvalidIndex {
                    kind: self.kind(),
                    index: *index,
                })?;
                (entry.clone(), true)
            }
            RefToken::Null => {
                let entry = self
                    .iter()
                    .find(|entry| entry.name().is_none())
                    .ok_or_else(|| ReferenceError::Unknown {
                        kind: self.kind(),
                        token: token.to_string(),
                    })?;
                (entry.clone(), true)
            }
            RefToken::Name(name) => {
                if let Some(entry) = self.get_exact(token) {
                    (entry.clone(), true)
                } else {
                    let candidates = self.find_similar(name, MIN_SIMILARITY);
                    match candidates.as_slice() {
                        [] => {
                            return Err(ReferenceError::Unknown {
                                kind: self.kind(),
                                token: name.clone(),
                            })
                        }
                        [entry] => {
                            let resolved_name = entry.name().unwrap_or_default();
                            // balls are referenced without their suffix;
                            // re-append it before judging significance
                            let shown = match self.style() {
                                NameStyle::StripSuffix(suffix) => {
                                    Cow::Owned(format!("{}{}", name, suffix))
                                }
                                _ => Cow::Borrowed(name.as_str()),
                            };
                            let exact = !is_difference_significant(&shown, resolved_name);
                            ((*entry).clone(), exact)
                        }
                        _ => {
                            return Err(ReferenceError::Ambiguous {
                                kind: self.kind(),
                                token: name.clone(),
                                candidates: candidates
                                    .iter()
                                    .filter_map(|entry| entry.name())
                                    .map(str::to_owned)
                                    .collect(),
                            })
                        }
                    }
                }
            }
        };

        if let NameStyle::StripSuffix(suffix) = self.style() {
            let name = entity.name().unwrap_or_default();
            if !name.ends_with(suffix) {
                return Err(ReferenceError::NotInCategory {
                    kind: self.kind(),
                    name: name.to_owned(),
                });
            }
        }

        Ok(Resolved { entity, exact })
    }
}
