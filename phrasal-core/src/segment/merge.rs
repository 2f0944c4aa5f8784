//! Post-processing merge pass
//!
//! One-word phrases make for jumpy highlighting, so each one is folded back
//! into the phrase before it while that phrase is still short. Single forward
//! pass, no backtracking.

use crate::types::Phrase;

/// Fold single-word phrases into a predecessor with fewer than `merge_below`
/// words
pub(crate) fn merge_short_phrases(raw: Vec<Phrase>, merge_below: usize) -> Vec<Phrase> {
    let mut merged: Vec<Phrase> = Vec::with_capacity(raw.len());

    for phrase in raw {
        if phrase.len() == 1 {
            if let Some(last) = merged.last_mut() {
                if last.len() < merge_below {
                    last.absorb(phrase);
                    continue;
                }
            }
        }
        merged.push(phrase);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    /// Build phrases from word groups, numbering tokens across groups
    fn phrases(groups: &[&[&str]]) -> Vec<Phrase> {
        let mut index = 0;
        groups
            .iter()
            .map(|group| {
                let words = group
                    .iter()
                    .map(|text| {
                        index += 1;
                        Token::new(*text, index - 1)
                    })
                    .collect();
                Phrase::from_words(words).unwrap()
            })
            .collect()
    }

    fn texts(phrases: &[Phrase]) -> Vec<String> {
        phrases.iter().map(Phrase::text).collect()
    }

    #[test]
    fn test_single_word_stays_after_full_phrase() {
        let merged = merge_short_phrases(phrases(&[&["A", "B", "C"], &["D"], &["E", "F"]]), 3);
        assert_eq!(texts(&merged), vec!["A B C", "D", "E F"]);
    }

    #[test]
    fn test_single_word_merges_into_short_phrase() {
        let merged = merge_short_phrases(phrases(&[&["A", "B"], &["D"], &["E", "F"]]), 3);
        assert_eq!(texts(&merged), vec!["A B D", "E F"]);
        assert_eq!(merged[0].start_index, 0);
        assert_eq!(merged[0].end_index, 2);
    }

    #[test]
    fn test_leading_single_word_is_kept() {
        let merged = merge_short_phrases(phrases(&[&["A"], &["B", "C", "D"]]), 3);
        assert_eq!(texts(&merged), vec!["A", "B C D"]);
    }

    #[test]
    fn test_merging_stops_once_predecessor_fills_up() {
        let merged = merge_short_phrases(phrases(&[&["A"], &["B"], &["C"], &["D"]]), 3);
        assert_eq!(texts(&merged), vec!["A B C", "D"]);
    }

    #[test]
    fn test_multi_word_phrases_never_merge() {
        let merged = merge_short_phrases(phrases(&[&["A"], &["B", "C"]]), 3);
        assert_eq!(texts(&merged), vec!["A", "B C"]);
    }
}
