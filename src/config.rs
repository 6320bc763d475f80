// File: src/config.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CONTEXT_WIDTH: usize = 40;
const SHAKESPEARE_URL: &str = "https://www.gutenberg.org/cache/epub/100/pg100.txt";
const WORD_LIST_URL: &str = "https://github.com/dwyl/english-words/raw/master/words_alpha.zip";

/// How a downloaded payload is packaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SourceFormat {
    Text,
    /// A zip archive; only `member` is read from it.
    Zip { member: String },
}

/// Character encoding of the text once unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// One remote text, plus the name its raw bytes are cached under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    pub format: SourceFormat,
    pub encoding: TextEncoding,
    /// Cut the text down to what lies between the Project Gutenberg
    /// start and end markers.
    #[serde(default)]
    pub gutenberg: bool,
}

impl SourceConfig {
    pub fn shakespeare() -> Self {
        Self {
            name: "shakespeare.txt".to_string(),
            url: SHAKESPEARE_URL.to_string(),
            format: SourceFormat::Text,
            encoding: TextEncoding::Utf8,
            gutenberg: true,
        }
    }

    pub fn english_words() -> Self {
        Self {
            name: "words_alpha.zip".to_string(),
            url: WORD_LIST_URL.to_string(),
            format: SourceFormat::Zip {
                member: "words_alpha.txt".to_string(),
            },
            encoding: TextEncoding::Utf8,
            gutenberg: false,
        }
    }

    /// Name of the post-processed file cached alongside the raw download.
    /// Built from the whole raw name, so `words.txt` and `words.zip` keep
    /// separate filtered files.
    pub fn filtered_name(&self) -> String {
        format!("{}.filtered.txt", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Chars of context printed on each side of a search hit.
    pub context_width: usize,
    pub corpus: SourceConfig,
    pub dictionary: SourceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            context_width: DEFAULT_CONTEXT_WIDTH,
            corpus: SourceConfig::shakespeare(),
            dictionary: SourceConfig::english_words(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Every raw and filtered file in the cache must have its own name,
    /// otherwise one source would be served another's content.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for source in [&self.corpus, &self.dictionary] {
            if source.name.is_empty() {
                return Err(Error::InvalidConfig("source name is empty".to_string()));
            }
            for name in [source.name.clone(), source.filtered_name()] {
                if !seen.insert(name.clone()) {
                    return Err(Error::InvalidConfig(format!(
                        "cache file '{name}' is used by more than one source"
                    )));
                }
            }
        }
        Ok(())
    }
}
