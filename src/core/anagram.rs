// --- File: src/core/anagram.rs
use crate::core::types::{LetterCounts, Signature};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Maps each signature to the words spelled with exactly those letters.
///
/// Words are grouped in a single pass and keep their first-seen order within
/// a group. A word lives in exactly one group, the one keyed by its own
/// signature.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnagramIndex {
    groups: HashMap<Signature, Vec<String>>,
    #[serde(skip)]
    len: usize,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from candidate words. Non-alphabetic tokens are
    /// expected to be filtered out upstream (see [`crate::core::normalize`]).
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Adds a word to its group, lowercased. Returns `false` if the word was
    /// already there in any case. O(k log k) where k is the word length.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word = word.to_lowercase();
        let group = self.groups.entry(Signature::of(&word)).or_default();
        if group.contains(&word) {
            return false;
        }
        group.push(word);
        self.len += 1;
        true
    }

    pub fn group(&self, signature: &Signature) -> &[String] {
        self.groups.get(signature).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every indexed word sharing the query's signature, the query itself
    /// included when it is indexed.
    pub fn lookup(&self, query: &str) -> &[String] {
        self.group(&Signature::of(query))
    }

    /// The anagrams of `query` other than the query itself.
    /// Empty when nothing else shares its letters; that is not an error.
    pub fn anagrams_of(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.lookup(&query)
            .iter()
            .filter(|w| **w != query)
            .map(String::as_str)
            .collect()
    }

    /// The `n` largest groups, biggest first; equal sizes fall back to
    /// signature order so the output is stable between runs.
    pub fn largest_groups(&self, n: usize) -> Vec<(&Signature, &[String])> {
        let mut groups: Vec<(&Signature, &[String])> = self
            .groups
            .iter()
            .map(|(sig, words)| (sig, words.as_slice()))
            .collect();
        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
        groups.truncate(n);
        groups
    }

    /// Indexed words that can be spelled using only the letters of `phrase`,
    /// each letter used at most as often as it occurs there. These are the
    /// candidate pieces of a multi-word anagram. Longest words come first,
    /// then alphabetical order.
    pub fn words_within(&self, phrase: &str) -> Vec<&str> {
        let available = LetterCounts::of_letters(phrase);
        let mut found: Vec<&str> = self
            .groups
            .iter()
            .filter(|(sig, _)| sig.as_str().chars().count() <= available.total())
            .filter(|(sig, _)| available.covers(&LetterCounts::of_letters(sig.as_str())))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
            .collect();
        found.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
        found
    }

    /// Groups in signature order.
    pub fn groups(&self) -> impl Iterator<Item = (&Signature, &[String])> {
        let sorted: BTreeMap<&Signature, &Vec<String>> = self.groups.iter().collect();
        sorted.into_iter().map(|(sig, words)| (sig, words.as_slice()))
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn signature_count(&self) -> usize {
        self.groups.len()
    }
}

/// True when the two phrases use exactly the same letters, ignoring case,
/// spaces and punctuation.
pub fn is_phrase_anagram(first: &str, second: &str) -> bool {
    let first = Signature::of_letters(first);
    !first.is_empty() && first == Signature::of_letters(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCABULARY: [&str; 8] = [
        "listen", "silent", "google", "enlist", "banana", "inlets", "tinsel", "stone",
    ];

    #[test]
    fn listen_finds_all_and_only_its_permutations() {
        let index = AnagramIndex::build(VOCABULARY);
        assert_eq!(index.anagrams_of("listen"), ["silent", "enlist", "inlets", "tinsel"]);
        assert_eq!(index.lookup("listen").len(), 5);
    }

    #[test]
    fn every_word_is_in_its_own_group() {
        let index = AnagramIndex::build(VOCABULARY);
        for word in VOCABULARY {
            assert!(index.group(&Signature::of(word)).iter().any(|w| w == word));
        }
        let total: usize = index.groups().map(|(_, words)| words.len()).sum();
        assert_eq!(total, index.len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = AnagramIndex::build(VOCABULARY);
        assert_eq!(index.anagrams_of("SILENT"), ["listen", "enlist", "inlets", "tinsel"]);
    }

    #[test]
    fn missing_anagrams_are_empty_not_errors() {
        let index = AnagramIndex::build(VOCABULARY);
        assert!(index.anagrams_of("google").is_empty());
        assert!(index.anagrams_of("zebra").is_empty());
        assert!(index.lookup("").is_empty());
    }

    #[test]
    fn mixed_case_words_are_folded_on_insert() {
        let mut index = AnagramIndex::build(["Listen", "silent"]);
        assert_eq!(index.anagrams_of("listen"), ["silent"]);
        assert_eq!(index.anagrams_of("LISTEN"), ["silent"]);
        assert!(!index.insert("listen"));
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("Silent"), ["listen", "silent"]);
    }

    #[test]
    fn duplicates_are_indexed_once() {
        let mut index = AnagramIndex::build(["stone", "notes", "stone"]);
        assert_eq!(index.len(), 2);
        assert!(!index.insert("notes"));
        assert!(index.insert("onset"));
        assert_eq!(index.signature_count(), 1);
    }

    #[test]
    fn largest_groups_come_first() {
        let index = AnagramIndex::build(VOCABULARY);
        let top = index.largest_groups(2);
        assert_eq!(top[0].0.as_str(), "eilnst");
        assert_eq!(top[0].1.len(), 5);
        assert_eq!(top[1].1.len(), 1);
        assert_eq!(index.largest_groups(100).len(), index.signature_count());
    }

    #[test]
    fn words_within_respects_letter_counts() {
        let index = AnagramIndex::build(["ban", "nab", "banana", "bananas", "bb", "a"]);
        assert_eq!(index.words_within("Banana!"), ["banana", "ban", "nab", "a"]);
    }

    #[test]
    fn baconian_reading_is_a_true_anagram() {
        assert!(is_phrase_anagram(
            "honorificabilitudinitatibus",
            "Hi ludi, F. Baconis nati, tuiti orbi"
        ));
        assert!(!is_phrase_anagram("honorificabilitudinitatibus", "Hi ludi F. Bacon"));
        assert!(!is_phrase_anagram("", "..."));
    }
}
