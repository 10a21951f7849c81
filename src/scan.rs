//! URL candidates in free text.
//!
//! Input is split on whitespace. Each token loses surrounding brackets and
//! quotes and any trailing sentence punctuation, then is kept if it either
//! has a `scheme://host` or is a dotted host name under a known top-level
//! domain. Results keep the order of first appearance without duplicates.

use std::io::{self, BufRead};
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*$").expect("invalid regex")
});

static HOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+([A-Za-z]{2,})(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .expect("invalid regex")
});

const KNOWN_TLDS: &[&str] = &[
    "ai", "app", "au", "biz", "blog", "br", "ca", "ch", "cloud", "cn", "co", "com", "de", "dev",
    "edu", "es", "eu", "fm", "fr", "gg", "gov", "info", "int", "io", "it", "jp", "ly", "me", "mil",
    "net", "news", "nl", "no", "org", "page", "ru", "se", "sh", "site", "tech", "tv", "uk", "us",
    "xyz",
];

const OPENERS: &[char] = &['<', '(', '[', '{', '"', '\''];
const CLOSERS: &[char] = &['>', ')', ']', '}', '"', '\'', '.', ',', ';', ':', '!', '?'];

/// Collect URL candidates from `reader`.
pub fn scan<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut found = IndexSet::new();
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if let Some(url) = candidate(token) {
                found.insert(url.to_string());
            }
        }
    }
    Ok(found.into_iter().collect())
}

/// The URL inside `token`, if it looks like one.
pub fn candidate(token: &str) -> Option<&str> {
    let token = token.trim_start_matches(OPENERS).trim_end_matches(CLOSERS);
    if token.is_empty() {
        return None;
    }

    if SCHEME_REGEX.is_match(token) {
        return Some(token);
    }

    let tld = HOST_REGEX.captures(token)?.get(1)?.as_str().to_ascii_lowercase();
    KNOWN_TLDS.contains(&tld.as_str()).then_some(token)
}
