// File: src/acquire/source.rs
use crate::acquire::cache::DataCache;
use crate::acquire::fetch::Fetch;
use crate::config::{SourceConfig, SourceFormat, TextEncoding};
use crate::core::normalize::words;
use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::io::{Cursor, Read};
use zip::ZipArchive;

const GUTENBERG_START: &str = "*** START OF";
const GUTENBERG_END: &str = "*** END OF";
const UTF8_BOM: &str = "\u{feff}";

/// Turns raw bytes into text. Invalid UTF-8 is replaced rather than
/// rejected; Latin-1 maps each byte to the code point of the same value.
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Utf8 => {
            let text = String::from_utf8_lossy(bytes);
            text.strip_prefix(UTF8_BOM).unwrap_or(&*text).to_string()
        }
        TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Reads one file out of a zip archive held in memory.
pub fn extract_member(bytes: &[u8], member: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.mangled_name();
        let matches = name.to_str() == Some(member)
            || name.file_name().and_then(|n| n.to_str()) == Some(member);
        if file.is_file() && matches {
            let mut out = Vec::new();
            file.read_to_end(&mut out)?;
            debug!("Extracted {member} ({} bytes)", out.len());
            return Ok(out);
        }
    }
    Err(Error::MemberNotFound(member.to_string()))
}

/// Returns the body of a Project Gutenberg text: everything after the
/// `*** START OF ...` line and before the `*** END OF ...` line.
pub fn strip_gutenberg(text: &str) -> Result<&str> {
    let start = text
        .find(GUTENBERG_START)
        .ok_or(Error::MissingMarker(GUTENBERG_START))?;
    let body_start = text[start..]
        .find('\n')
        .map_or(text.len(), |i| start + i + 1);

    let end = text[body_start..]
        .find(GUTENBERG_END)
        .map(|i| body_start + i)
        .ok_or(Error::MissingMarker(GUTENBERG_END))?;

    Ok(text[body_start..end].trim())
}

fn unpack(source: &SourceConfig, raw: &[u8]) -> Result<String> {
    let bytes = match &source.format {
        SourceFormat::Text => raw.to_vec(),
        SourceFormat::Zip { member } => extract_member(raw, member)?,
    };
    Ok(decode(&bytes, source.encoding))
}

/// Produces the author corpus: the cached filtered text if there is one,
/// otherwise download (or reuse the raw download), decode, strip the
/// Gutenberg boilerplate and cache the result.
pub fn acquire_corpus(source: &SourceConfig, cache: &DataCache, fetcher: &dyn Fetch) -> Result<String> {
    let filtered = source.filtered_name();
    if cache.contains(&filtered) {
        debug!("Using filtered corpus {filtered}");
        return cache.read_text(&filtered);
    }

    let raw = cache.fetch_cached(&source.name, &source.url, fetcher)?;
    let text = unpack(source, &raw)?;
    let body = if source.gutenberg {
        strip_gutenberg(&text)?.to_string()
    } else {
        text
    };

    cache.write_text(&filtered, &body)?;
    info!("Corpus ready: {} chars", body.chars().count());
    Ok(body)
}

/// Produces the word list as one normalized word per line, cached the
/// same way as the corpus.
pub fn acquire_word_list(source: &SourceConfig, cache: &DataCache, fetcher: &dyn Fetch) -> Result<String> {
    let filtered = source.filtered_name();
    if cache.contains(&filtered) {
        debug!("Using filtered word list {filtered}");
        return cache.read_text(&filtered);
    }

    let raw = cache.fetch_cached(&source.name, &source.url, fetcher)?;
    let text = unpack(source, &raw)?;
    let text = if source.gutenberg {
        strip_gutenberg(&text)?.to_string()
    } else {
        text
    };

    let mut list = String::with_capacity(text.len());
    let mut count = 0usize;
    for word in words(&text) {
        list.push_str(&word);
        list.push('\n');
        count += 1;
    }
    if count == 0 {
        warn!("Word list {} contained no usable words", source.name);
    }

    cache.write_text(&filtered, &list)?;
    info!("Word list ready: {count} words");
    Ok(list)
}
