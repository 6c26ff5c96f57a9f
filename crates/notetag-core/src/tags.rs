//! Tag ranking pipeline.
//!
//! Turns raw classifier output into display tags:
//!
//! 1. sort by descending confidence
//! 2. keep the first [`MAX_TAGS`]
//! 3. format each label ([`format_label`]) and round its score
//! 4. derive the top tag and the star tag from the rank-1 entry, the latter
//!    carrying a [`calculate_priority`] blend of rank and confidence

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::{RawClassification, Tag, TagSet};

/// Maximum number of tags kept per text.
pub const MAX_TAGS: usize = 5;

/// Weight of the rank component in the priority blend.
pub const RANK_WEIGHT: f64 = 0.6;

/// Weight of the confidence component in the priority blend.
pub const SCORE_WEIGHT: f64 = 0.4;

/// Divisor normalizing a zero-based rank into [0, 1).
pub const RANK_SPAN: f64 = 5.0;

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").expect("valid regex"));

/// Convert a raw classifier label into a display string.
///
/// Underscores become spaces, then the first character of every word is
/// upper-cased: `"tech_and_science"` → `"Tech And Science"`.
pub fn format_label(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    WORD_START
        .replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Round to 2 decimals, halves rounding up (towards positive infinity).
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Blend a zero-based rank and a confidence into one priority value.
///
/// `rank` 0 contributes the full rank weight, `rank` 4 a fifth of it.
/// Ranks of 5 or more produce a negative rank term; the ranker never passes
/// them since it keeps at most [`MAX_TAGS`] entries.
pub fn calculate_priority(rank: usize, score: f64) -> f64 {
    let normalized_rank = 1.0 - (rank as f64 / RANK_SPAN);
    round2(normalized_rank * RANK_WEIGHT + score * SCORE_WEIGHT)
}

// NaN sorts last.
fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Rank raw classifier output into a [`TagSet`].
pub fn rank_tags(mut raw: Vec<RawClassification>) -> TagSet {
    raw.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));

    let tags = raw
        .into_iter()
        .take(MAX_TAGS)
        .enumerate()
        .map(|(i, item)| Tag {
            label: format_label(&item.label),
            score: round2(item.score),
            rank: i as u32 + 1,
        })
        .collect();

    TagSet::from_tags(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(label: &str, score: f64) -> RawClassification {
        RawClassification::new(label, score)
    }

    #[test]
    fn test_format_label_underscores() {
        assert_eq!(format_label("tech_and_science"), "Tech And Science");
    }

    #[test]
    fn test_format_label_empty() {
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_format_label_whitespace_keeps_length() {
        assert_eq!(format_label("   "), "   ");
        assert_eq!(format_label("___"), "   ");
    }

    #[test]
    fn test_format_label_symbols() {
        assert_eq!(format_label("arts_&_culture"), "Arts & Culture");
        assert_eq!(format_label("news_&_social_concern"), "News & Social Concern");
    }

    #[test]
    fn test_format_label_already_capitalized() {
        assert_eq!(format_label("Music"), "Music");
        assert_eq!(format_label("LABEL_0"), "LABEL 0");
    }

    #[test]
    fn test_format_label_hyphenated_words() {
        assert_eq!(format_label("self-care"), "Self-Care");
    }

    #[test]
    fn test_calculate_priority_rank_zero() {
        assert_eq!(calculate_priority(0, 0.9), 0.96);
    }

    #[test]
    fn test_calculate_priority_rank_four() {
        assert_eq!(calculate_priority(4, 0.5), 0.32);
    }

    #[test]
    fn test_calculate_priority_bounds() {
        assert_eq!(calculate_priority(0, 1.0), 1.0);
        assert_eq!(calculate_priority(0, 0.0), 0.6);
    }

    #[test]
    fn test_calculate_priority_beyond_cap_goes_negative() {
        // 1 - 6/5 = -0.2 → -0.12 + 0.0
        assert_eq!(calculate_priority(6, 0.0), -0.12);
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.954), 0.95);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_rank_tags_empty() {
        assert_eq!(rank_tags(vec![]), TagSet::empty());
    }

    #[test]
    fn test_rank_tags_sorts_descending() {
        let set = rank_tags(vec![
            raw("music", 0.2),
            raw("sports", 0.9),
            raw("gaming", 0.5),
        ]);

        let labels: Vec<&str> = set.tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Sports", "Gaming", "Music"]);
        let ranks: Vec<u32> = set.tags.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_tags_caps_at_five() {
        let input: Vec<RawClassification> = (0..8)
            .map(|i| raw(&format!("label_{}", i), i as f64 / 10.0))
            .collect();

        let set = rank_tags(input);
        assert_eq!(set.tags.len(), MAX_TAGS);
        assert_eq!(set.tags[0].label, "Label 7");
        assert_eq!(set.tags[4].label, "Label 3");
        assert_eq!(set.tags[4].rank, 5);
    }

    #[test]
    fn test_rank_tags_len_is_min_of_five_and_input() {
        for n in 1..=9 {
            let input: Vec<RawClassification> =
                (0..n).map(|i| raw("x", 1.0 / (i as f64 + 1.0))).collect();
            assert_eq!(rank_tags(input).tags.len(), n.min(MAX_TAGS));
        }
    }

    #[test]
    fn test_rank_tags_rounds_scores() {
        let set = rank_tags(vec![raw("diaries_&_daily_life", 0.87654)]);
        assert_eq!(set.tags[0].score, 0.88);
    }

    #[test]
    fn test_rank_tags_star_and_top_match_first() {
        let set = rank_tags(vec![raw("entertainment", 0.3), raw("tech_and_science", 0.95)]);

        let first = &set.tags[0];
        let star = set.star_tag.as_ref().unwrap();
        let top = set.top_tag.as_ref().unwrap();

        assert_eq!(first.label, "Tech And Science");
        assert_eq!(star.label, first.label);
        assert_eq!(star.score, first.score);
        assert_eq!(top.label, first.label);
        assert_eq!(top.score, first.score);
        assert_eq!(star.priority, calculate_priority(0, first.score));
        assert_eq!(star.priority, 0.98);
    }

    #[test]
    fn test_rank_tags_idempotent() {
        let input = vec![raw("sports", 0.4), raw("music", 0.7), raw("gaming", 0.1)];
        assert_eq!(rank_tags(input.clone()), rank_tags(input));
    }

    #[test]
    fn test_rank_tags_nan_sorts_last() {
        let set = rank_tags(vec![raw("a", f64::NAN), raw("b", 0.5), raw("c", 0.1)]);
        assert_eq!(set.tags.len(), 3);
        assert_eq!(set.tags[0].label, "B");
        assert_eq!(set.tags[2].label, "A");
    }
}
