// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The canonical anagram key of a word: its letters, lowercased, then sorted.
/// Two words are anagrams of each other exactly when their signatures match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Signature of a single word. Every char takes part, so callers are
    /// expected to have filtered out non-alphabetic tokens already.
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    /// Signature of a whole phrase, ignoring spaces, punctuation and digits.
    /// "F. Baconis" and "baconisf" share a signature.
    pub fn of_letters(phrase: &str) -> Self {
        let mut chars: Vec<char> = phrase
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A multiset of letters, used to ask whether one word can be spelled out of
/// the letters of a longer phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    pub fn of_letters(phrase: &str) -> Self {
        let mut letters = Self::default();
        for c in phrase
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
        {
            *letters.counts.entry(c).or_insert(0) += 1;
            letters.total += 1;
        }
        letters
    }

    /// True when every letter of `other` is available here at least as often.
    pub fn covers(&self, other: &LetterCounts) -> bool {
        other.total <= self.total
            && other
                .counts
                .iter()
                .all(|(c, &n)| self.counts.get(c).copied().unwrap_or(0) >= n)
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Where a word in the combined vocabulary was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordSource {
    Corpus,
    Dictionary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_case_insensitive() {
        assert_eq!(Signature::of("Listen"), Signature::of("silent"));
        assert_eq!(Signature::of("listen").as_str(), "eilnst");
    }

    #[test]
    fn phrase_signature_skips_non_letters() {
        assert_eq!(
            Signature::of_letters("Hi ludi, F. Baconis!"),
            Signature::of("hiludifbaconis")
        );
        assert!(Signature::of_letters("1, 2 -- 3").is_empty());
    }

    #[test]
    fn letter_counts_cover_sub_multisets_only() {
        let phrase = LetterCounts::of_letters("banana");
        assert!(phrase.covers(&LetterCounts::of_letters("nab")));
        assert!(phrase.covers(&LetterCounts::of_letters("Banana")));
        assert!(!phrase.covers(&LetterCounts::of_letters("bananas")));
        assert!(!phrase.covers(&LetterCounts::of_letters("bb")));
        assert_eq!(phrase.total(), 6);
    }
}
