//! Decides whether a requested skill token is covered by a
//! set of known (lower-cased) tokens, and how confidently.
//!
//! Stages, first success wins:
//! 1. exact match after trim + lower-case → strong
//! 2. whole-word containment: target inside a known token → strong,
//!    known token inside the target → moderate
//! 3. Jaro-Winkler over every known token, best score classified against the
//!    thresholds (tightened for targets of four characters or fewer)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::job_fit::scoring_config::SimilarityThresholds;

/// Only Jaro scores above this receive the Winkler prefix boost.
const WINKLER_BOOST_THRESHOLD: f64 = 0.7;
const WINKLER_PREFIX_WEIGHT: f64 = 0.1;
const WINKLER_MAX_PREFIX: usize = 4;

/// Targets this short ("SQL", "AWS", "Java") collide too easily under edit-style metrics.
const SHORT_TOKEN_MAX_LEN: usize = 4;
const SHORT_TOKEN_STRONG: f64 = 0.95;
const SHORT_TOKEN_MODERATE: f64 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    Strong,
    Moderate,
    Weak,
}

impl MatchQuality {
    /// Share of a rule's `matchBase` earned at this quality.
    pub fn multiplier(self) -> f64 {
        match self {
            MatchQuality::Strong => 1.0,
            MatchQuality::Moderate => 0.7,
            MatchQuality::Weak => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub found: bool,
    pub matched_term: Option<String>,
    pub quality: MatchQuality,
}

impl MatchOutcome {
    fn hit(term: &str, quality: MatchQuality) -> Self {
        Self {
            found: true,
            matched_term: Some(term.to_string()),
            quality,
        }
    }

    fn miss() -> Self {
        Self {
            found: false,
            matched_term: None,
            quality: MatchQuality::Weak,
        }
    }
}

/// Finds the best match for `target` among `available`, which must already be
/// lower-cased. Iteration follows the set's sorted order, so ties resolve the
/// same way on every call.
pub fn find_best_match(
    target: &str,
    available: &BTreeSet<String>,
    thresholds: &SimilarityThresholds,
) -> MatchOutcome {
    let normalized = target.trim().to_lowercase();
    if normalized.is_empty() {
        return MatchOutcome::miss();
    }

    if available.contains(&normalized) {
        return MatchOutcome::hit(&normalized, MatchQuality::Strong);
    }

    // e.g. "c#" inside ".net / c#"
    if let Some(term) = available.iter().find(|known| contains_word(known, &normalized)) {
        return MatchOutcome::hit(term, MatchQuality::Strong);
    }

    // e.g. "aws" inside "aws lambda": only part of the requirement is covered
    if let Some(term) = available.iter().find(|known| contains_word(&normalized, known)) {
        return MatchOutcome::hit(term, MatchQuality::Moderate);
    }

    let mut best: Option<(&str, f64)> = None;
    for known in available {
        let score = jaro_winkler(&normalized, known);
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((known, score));
        }
    }

    let target_len = normalized.chars().count();
    match best.and_then(|(term, score)| {
        classify_similarity(score, target_len, thresholds).map(|q| (term, q))
    }) {
        Some((term, quality)) => MatchOutcome::hit(term, quality),
        None => MatchOutcome::miss(),
    }
}

/// Maps a similarity score to a match quality, or `None` when it falls below
/// the moderate threshold.
pub fn classify_similarity(
    score: f64,
    target_len: usize,
    thresholds: &SimilarityThresholds,
) -> Option<MatchQuality> {
    let (strong, moderate) = if target_len <= SHORT_TOKEN_MAX_LEN {
        (SHORT_TOKEN_STRONG, SHORT_TOKEN_MODERATE)
    } else {
        (thresholds.strong, thresholds.moderate)
    };

    if score > strong {
        Some(MatchQuality::Strong)
    } else if score >= moderate {
        Some(MatchQuality::Moderate)
    } else {
        None
    }
}

/// Jaro similarity with a Winkler common-prefix boost, in `[0, 1]`.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let base = jaro(&a, &b);
    if base <= WINKLER_BOOST_THRESHOLD {
        return base;
    }

    let prefix = a
        .iter()
        .zip(&b)
        .take_while(|(x, y)| x == y)
        .take(WINKLER_MAX_PREFIX)
        .count();

    base + prefix as f64 * WINKLER_PREFIX_WEIGHT * (1.0 - base)
}

/// Plain Jaro similarity of two non-empty strings. Characters match within a
/// window of `max(len) / 2 - 1`; transpositions are matched characters that
/// disagree when both sides are read in order, counted in halves.
fn jaro(a: &[char], b: &[char]) -> f64 {
    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let low = i.saturating_sub(window);
        let high = (i + window).min(b.len() - 1);
        for j in low..=high {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0;
    for (i, ca) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if *ca != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0
}

/// True when `word` occurs in `text` bounded on both sides by the string edge or
/// a character outside `[A-Za-z0-9]`. Keeps "go" from matching inside "google".
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() || word.len() > text.len() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = text[from..].find(word) {
        let start = from + offset;
        let end = start + word.len();

        let open = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        let close = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        if open && close {
            return true;
        }

        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
