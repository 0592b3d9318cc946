// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL fragment handling.
//!
//! The fragment (`#<key>`) is the only persisted navigation state. These
//! helpers extract section keys from `location.hash` values and from the
//! attributes of navigation triggers, and format keys back into fragments.

use alloc::format;
use alloc::string::String;

/// Extracts the section key from a `location.hash` value.
///
/// Accepts the value with or without its leading `#`. Returns `None` for an
/// absent or empty fragment.
#[must_use]
pub fn key_from_hash(hash: &str) -> Option<&str> {
    let key = hash.strip_prefix('#').unwrap_or(hash);
    (!key.is_empty()).then_some(key)
}

/// Extracts the fragment key from a link target.
///
/// Works for bare fragments (`#about`) as well as full or relative URLs
/// (`index.html#about`, `/#about`). Returns `None` if the target has no
/// fragment or the fragment is empty.
#[must_use]
pub fn key_from_href(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    (!fragment.is_empty()).then_some(fragment)
}

/// Resolves the target key of a navigation trigger.
///
/// An explicit attribute wins over the link target. Empty attributes are
/// treated as absent.
#[must_use]
pub fn trigger_key<'a>(attr: Option<&'a str>, href: Option<&'a str>) -> Option<&'a str> {
    attr.filter(|key| !key.is_empty())
        .or_else(|| href.and_then(key_from_href))
}

/// Formats a section key as a URL fragment.
#[must_use]
pub fn to_hash(key: &str) -> String {
    format!("#{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_with_and_without_prefix() {
        assert_eq!(key_from_hash("#challenges"), Some("challenges"));
        assert_eq!(key_from_hash("challenges"), Some("challenges"));
        assert_eq!(key_from_hash("#"), None);
        assert_eq!(key_from_hash(""), None);
    }

    #[test]
    fn href_fragments() {
        assert_eq!(key_from_href("#about"), Some("about"));
        assert_eq!(key_from_href("index.html#about"), Some("about"));
        assert_eq!(key_from_href("https://example.org/#faq"), Some("faq"));
        assert_eq!(key_from_href("https://example.org/"), None);
        assert_eq!(key_from_href("page.html#"), None);
    }

    #[test]
    fn attribute_wins_over_href() {
        assert_eq!(trigger_key(Some("home"), Some("#about")), Some("home"));
        assert_eq!(trigger_key(Some(""), Some("#about")), Some("about"));
        assert_eq!(trigger_key(None, Some("#about")), Some("about"));
        assert_eq!(trigger_key(None, Some("/contact")), None);
        assert_eq!(trigger_key(None, None), None);
    }

    #[test]
    fn formats_fragment() {
        assert_eq!(to_hash("home"), "#home");
    }
}
