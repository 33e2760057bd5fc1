//! Keyword normalization: splitting numbered variants such as
//! `"outdoor-rug-2"` into a search term and an index, grouping variants
//! that share a search term, and turning keywords into file names.

use regex::Regex;
use std::path::Path;
use url::Url;

/// Extension used when the image URL path carries none.
pub const FALLBACK_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyword {
    pub base: String,
    pub index: Option<u32>,
}

/// One search term and every raw keyword that resolves to it, ordered
/// by index (unindexed entries first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub base: String,
    pub entries: Vec<(String, Option<u32>)>,
}

pub struct KeywordParser {
    suffix_regex: Regex,
}

impl Default for KeywordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordParser {
    pub fn new() -> Self {
        KeywordParser {
            // Lazy prefix so the digit run takes every trailing digit.
            suffix_regex: Regex::new(r"^(.*?)[-_ ]?([0-9]+)$").expect("static keyword pattern"),
        }
    }

    /// Splits `"office chair 2"` into `("office chair", Some(2))`.
    ///
    /// A keyword with nothing usable before its digits (`"123"`, `"-7"`)
    /// is kept whole as an unindexed search term, as is one whose suffix
    /// does not fit in a `u32`.
    pub fn parse(&self, keyword: &str) -> ParsedKeyword {
        let keyword = keyword.trim();
        let whole = || ParsedKeyword {
            base: keyword.to_string(),
            index: None,
        };

        let Some(caps) = self.suffix_regex.captures(keyword) else {
            return whole();
        };

        let base = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if base.is_empty() {
            return whole();
        }

        match caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok()) {
            Some(index) => ParsedKeyword {
                base: base.to_string(),
                index: Some(index),
            },
            None => whole(),
        }
    }
}

/// Buckets keywords by base term. Groups appear in first-seen order of
/// their base; entries inside a group are stable-sorted by index with
/// a missing index treated as 0.
pub fn group_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<KeywordGroup> {
    let parser = KeywordParser::new();
    let mut groups: Vec<KeywordGroup> = Vec::new();

    for raw in keywords {
        let raw = raw.as_ref();
        let parsed = parser.parse(raw);
        match groups.iter_mut().find(|g| g.base == parsed.base) {
            Some(group) => group.entries.push((raw.to_string(), parsed.index)),
            None => groups.push(KeywordGroup {
                base: parsed.base,
                entries: vec![(raw.to_string(), parsed.index)],
            }),
        }
    }

    for group in &mut groups {
        group.entries.sort_by_key(|(_, index)| index.unwrap_or(0));
    }
    groups
}

/// First result page to try for a keyword, so that `chair-11` starts
/// one page past `chair-1` when pages hold 10 results.
pub fn start_page(index: Option<u32>, per_page: u32) -> u32 {
    match index {
        None => 1,
        Some(i) => i.saturating_sub(1) / per_page.max(1) + 1,
    }
}

/// Drops `\ / * ? : " < > |` and turns spaces into underscores.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Extension of the last path segment of `url`, ignoring the query.
pub fn file_extension(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .and_then(|segment| {
            Path::new(&segment)
                .extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext| !ext.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

pub fn output_filename(keyword: &str, image_url: &str) -> String {
    format!("{}.{}", sanitize_filename(keyword), file_extension(image_url))
}
