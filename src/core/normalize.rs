// File: src/core/normalize.rs
use crate::core::types::WordSource;
use std::collections::HashMap;

/// Strips punctuation (ASCII or typographic) from a raw token and
/// lowercases it. Returns `None` unless what is left is a non-empty, purely
/// alphabetic word: "Don't," and "o’er" both lose their apostrophe, while
/// tokens carrying digits ("1599", "act2") are not words and are dropped.
pub fn normalize_token(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

/// Figure, en and em dashes and the horizontal bar join words without
/// spaces ("lord—what"), so they separate tokens like whitespace does.
fn is_word_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{2012}'..='\u{2015}')
}

/// Raw tokens of a text, before normalization.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_break).filter(|t| !t.is_empty())
}

/// Lazily yields every normalized word of a text, in reading order.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    tokens(text).filter_map(normalize_token)
}

#[derive(Debug, Clone)]
pub struct WordEntry {
    pub word: String,
    pub source: WordSource,
}

/// Deduplicated, insertion-ordered vocabulary.
/// Every member is lowercase and purely alphabetic.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    entries: Vec<WordEntry>,
    positions: HashMap<String, usize>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and inserts a token. Returns `true` only when a new word was
    /// added; duplicates keep the source they were first seen with.
    pub fn insert(&mut self, token: &str, source: WordSource) -> bool {
        let Some(word) = normalize_token(token) else {
            return false;
        };
        if self.positions.contains_key(&word) {
            return false;
        }
        self.positions.insert(word.clone(), self.entries.len());
        self.entries.push(WordEntry { word, source });
        true
    }

    /// Adds every word of a free-running text. Returns how many were new.
    pub fn extend_from_text(&mut self, text: &str, source: WordSource) -> usize {
        tokens(text)
            .filter(|token| self.insert(token, source))
            .count()
    }

    /// Adds one word per line, the layout of dictionary files.
    /// Lines holding more than a single token are skipped.
    pub fn extend_from_lines(&mut self, text: &str, source: WordSource) -> usize {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.contains(char::is_whitespace))
            .filter(|line| self.insert(line, source))
            .count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn source_of(&self, word: &str) -> Option<WordSource> {
        self.positions.get(word).map(|&i| self.entries[i].source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_lose_punctuation_and_case() {
        assert_eq!(normalize_token("Don't,"), Some("dont".to_string()));
        assert_eq!(normalize_token("HONORIFICABILITUDINITATIBUS:"), Some("honorificabilitudinitatibus".to_string()));
        assert_eq!(normalize_token("--"), None);
        assert_eq!(normalize_token("1599"), None);
        assert_eq!(normalize_token("act2"), None);
    }

    #[test]
    fn typographic_punctuation_is_stripped_too() {
        assert_eq!(normalize_token("o\u{2019}er"), Some("oer".to_string()));
        assert_eq!(normalize_token("\u{2019}Tis"), Some("tis".to_string()));
        assert_eq!(normalize_token("\u{201c}Hamlet\u{201d}"), Some("hamlet".to_string()));
        assert_eq!(normalize_token("\u{201c}\u{2014}\u{201d}"), None);
    }

    #[test]
    fn dashes_separate_words() {
        let found: Vec<String> = words("My lord\u{2014}what? 1599\u{2013}1600").collect();
        assert_eq!(found, ["my", "lord", "what"]);
    }

    #[test]
    fn curly_quoted_text_fills_the_set() {
        let mut set = WordSet::new();
        set.extend_from_text("\u{201c}Thou art\u{201d} \u{2019}Tis o\u{2019}er", WordSource::Corpus);
        assert_eq!(set.iter().collect::<Vec<_>>(), ["thou", "art", "tis", "oer"]);
    }

    #[test]
    fn words_in_reading_order() {
        let found: Vec<String> = words("To be, or not to be: that is the question.").collect();
        assert_eq!(found, ["to", "be", "or", "not", "to", "be", "that", "is", "the", "question"]);
    }

    #[test]
    fn word_set_deduplicates_and_keeps_first_source() {
        let mut set = WordSet::new();
        assert_eq!(set.extend_from_text("Listen! listen, LISTEN.", WordSource::Corpus), 1);
        assert_eq!(set.extend_from_lines("listen\nsilent\n\n42\n", WordSource::Dictionary), 1);

        assert_eq!(set.iter().collect::<Vec<_>>(), ["listen", "silent"]);
        assert_eq!(set.source_of("listen"), Some(WordSource::Corpus));
        assert_eq!(set.source_of("silent"), Some(WordSource::Dictionary));
        assert!(!set.contains("42"));
    }

    #[test]
    fn members_are_lowercase_alphabetic() {
        let mut set = WordSet::new();
        set.extend_from_text("ACT I. SCENE 2. Enter HAMLET, with a book; [Aside] o'er", WordSource::Corpus);
        assert!(!set.is_empty());
        for word in set.iter() {
            assert!(word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()), "{word}");
        }
        assert!(set.contains("oer"));
    }
}
