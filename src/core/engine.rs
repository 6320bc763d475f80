use crate::acquire::{acquire_corpus, acquire_word_list, DataCache, Fetch};
use crate::config::Config;
use crate::core::anagram::AnagramIndex;
use crate::core::normalize::WordSet;
use crate::core::search::{find_all, hits, Hit};
use crate::core::types::{Signature, WordSource};
use log::{error, info};

/// Summary counts for a built session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    pub corpus_chars: usize,
    pub corpus_words: usize,
    pub dictionary_words: usize,
    pub signatures: usize,
}

// The engine is built once from the corpus and word list and never changes
// afterwards; all queries borrow from it.
pub struct AnagramEngine {
    corpus: String,
    words: WordSet,
    index: AnagramIndex,
}

impl AnagramEngine {
    /// Builds a session from already-acquired text. `dictionary` holds one
    /// word per line; corpus words are seen first, so they lead their groups.
    pub fn from_texts(corpus: String, dictionary: &str) -> Self {
        let mut words = WordSet::new();
        words.extend_from_text(&corpus, WordSource::Corpus);
        words.extend_from_lines(dictionary, WordSource::Dictionary);

        let index = AnagramIndex::build(words.iter());
        info!(
            "Indexed {} words under {} signatures",
            index.len(),
            index.signature_count()
        );
        Self { corpus, words, index }
    }

    /// Acquires both sources through `cache` and builds the session.
    ///
    /// A source that cannot be acquired is reported and treated as empty, so
    /// a failed word-list download still leaves the corpus searchable.
    pub fn acquire(config: &Config, cache: &DataCache, fetcher: &dyn Fetch) -> Self {
        let corpus = acquire_corpus(&config.corpus, cache, fetcher).unwrap_or_else(|e| {
            error!("Could not acquire corpus from {}: {}", config.corpus.url, e);
            String::new()
        });
        let dictionary = acquire_word_list(&config.dictionary, cache, fetcher).unwrap_or_else(|e| {
            error!("Could not acquire word list from {}: {}", config.dictionary.url, e);
            String::new()
        });
        Self::from_texts(corpus, &dictionary)
    }

    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }

    /// Anagrams of `word` in the combined vocabulary, `word` itself excluded.
    pub fn anagrams_of(&self, word: &str) -> Vec<&str> {
        self.index.anagrams_of(word)
    }

    /// The whole group sharing `word`'s signature, `word` included if known.
    pub fn lookup(&self, word: &str) -> &[String] {
        self.index.lookup(word)
    }

    /// Literal byte offsets of `keyword` in the corpus.
    pub fn find(&self, keyword: &str) -> Vec<usize> {
        find_all(&self.corpus, keyword)
    }

    pub fn hits(&self, keyword: &str, width: usize) -> Vec<Hit<'_>> {
        hits(&self.corpus, keyword, width)
    }

    pub fn words_within(&self, phrase: &str) -> Vec<&str> {
        self.index.words_within(phrase)
    }

    pub fn largest_groups(&self, n: usize) -> Vec<(&Signature, &[String])> {
        self.index.largest_groups(n)
    }

    pub fn stats(&self) -> EngineStats {
        let corpus_words = self
            .words
            .entries()
            .iter()
            .filter(|e| e.source == WordSource::Corpus)
            .count();
        EngineStats {
            corpus_chars: self.corpus.chars().count(),
            corpus_words,
            dictionary_words: self.words.len() - corpus_words,
            signatures: self.index.signature_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONNET: &str = "Shall I compare thee to a summer's day? Thou art more lovely and more temperate.";

    #[test]
    fn every_word_is_reachable_through_its_signature() {
        let engine = AnagramEngine::from_texts(SONNET.to_string(), "listen\nsilent\nhaste\nhates\n");
        for word in engine.words().iter() {
            assert!(engine.lookup(word).iter().any(|w| w == word), "{word}");
        }
        assert_eq!(engine.index().len(), engine.words().len());
    }

    #[test]
    fn corpus_words_lead_their_groups() {
        let engine = AnagramEngine::from_texts("Thou art a rat".to_string(), "tar\nart\n");
        assert_eq!(engine.lookup("tar"), ["art", "rat", "tar"]);
        assert_eq!(engine.anagrams_of("rat"), ["art", "tar"]);
    }

    #[test]
    fn search_runs_on_the_raw_corpus() {
        let engine = AnagramEngine::from_texts(SONNET.to_string(), "");
        assert_eq!(engine.find("more"), [49, 65]);
        assert!(engine.find("More").is_empty());
        assert_eq!(engine.hits("summer's", 4)[0].to_string(), "o a summer's day");
    }

    #[test]
    fn stats_split_words_by_source() {
        let engine = AnagramEngine::from_texts("art rat".to_string(), "art\ntar\n");
        let stats = engine.stats();
        assert_eq!(stats.corpus_words, 2);
        assert_eq!(stats.dictionary_words, 1);
        assert_eq!(stats.signatures, 1);
        assert_eq!(stats.corpus_chars, 7);
    }
}
