// File: src/core/search.rs
use std::fmt;

/// Every byte offset at which `keyword` starts in `text`, left to right.
/// Overlapping occurrences are reported too: "aa" occurs at 0, 1 and 2 in
/// "aaaa". Matching is literal, with no case or punctuation folding.
pub fn find_all(text: &str, keyword: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let Some(first) = keyword.chars().next() else {
        return offsets;
    };
    // Restart one char after each hit so the next search stays on a boundary.
    let step = first.len_utf8();

    let mut start = 0;
    while let Some(pos) = text[start..].find(keyword) {
        let offset = start + pos;
        offsets.push(offset);
        start = offset + step;
    }
    offsets
}

/// One occurrence of a keyword together with the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Byte offset of the match in the searched text.
    pub offset: usize,
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

impl fmt::Display for Hit<'_> {
    /// Renders the window on a single line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in [self.before, self.matched, self.after] {
            for c in part.chars() {
                let c = if c.is_whitespace() { ' ' } else { c };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Cuts a window of at most `width` chars on each side of the `len` bytes
/// starting at `offset`. The window is clamped to the text.
///
/// Returns `None` when the match runs past the end of the text or does not
/// start and end on char boundaries.
pub fn context(text: &str, offset: usize, len: usize, width: usize) -> Option<Hit<'_>> {
    let end = offset.checked_add(len)?;
    if end > text.len() || !text.is_char_boundary(offset) || !text.is_char_boundary(end) {
        return None;
    }
    let from = text[..offset]
        .char_indices()
        .rev()
        .take(width)
        .last()
        .map_or(offset, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(width)
        .map_or(text.len(), |(i, _)| end + i);

    Some(Hit {
        offset,
        before: &text[from..offset],
        matched: &text[offset..end],
        after: &text[end..to],
    })
}

/// All hits for `keyword`, each with `width` chars of context.
pub fn hits<'a>(text: &'a str, keyword: &str, width: usize) -> Vec<Hit<'a>> {
    find_all(text, keyword)
        .into_iter()
        .filter_map(|offset| context(text, offset, keyword.len(), width))
        .collect()
}
