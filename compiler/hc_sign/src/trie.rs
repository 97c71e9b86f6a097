//! Segment-keyed trie for vendor-namespaced hints.
//!
//! Third-party modules re-export typing constructs under their own dotted
//! paths (`typing_extensions.Literal`). The trie maps each path segment to
//! either a sign (the path ends here) or a nested trie.

use rustc_hash::FxHashMap;

use crate::{Sign, SignError};

/// One trie entry.
#[derive(Clone, Debug)]
pub enum TrieNode {
    Sign(Sign),
    Trie(SignTrie),
}

/// Recursive mapping from path segments to signs.
#[derive(Clone, Debug, Default)]
pub struct SignTrie {
    children: FxHashMap<String, TrieNode>,
}

impl SignTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the dotted `path` to `sign`.
    ///
    /// Fails if the path passes through an existing sign or ends on an
    /// existing entry.
    pub fn insert(&mut self, path: &str, sign: Sign) -> Result<(), SignError> {
        let collision = || SignError::TrieCollision {
            path: path.to_owned(),
        };
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(collision());
        };

        let mut trie = self;
        for segment in parents {
            let node = trie
                .children
                .entry((*segment).to_owned())
                .or_insert_with(|| TrieNode::Trie(SignTrie::new()));
            match node {
                TrieNode::Trie(child) => trie = child,
                TrieNode::Sign(_) => return Err(collision()),
            }
        }

        if trie.children.contains_key(*last) {
            return Err(collision());
        }
        trie.children.insert((*last).to_owned(), TrieNode::Sign(sign));
        Ok(())
    }

    /// Walk `path` segment by segment.
    ///
    /// Returns a sign only when the walk ends exactly on one.
    pub fn get(&self, path: &str) -> Option<Sign> {
        let mut trie = self;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            match trie.children.get(segment)? {
                TrieNode::Sign(sign) => {
                    return if segments.peek().is_none() {
                        Some(*sign)
                    } else {
                        None
                    };
                }
                TrieNode::Trie(child) => trie = child,
            }
        }
        None
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]
mod tests {
    use super::*;

    #[test]
    fn walks_nested_segments() {
        let mut trie = SignTrie::new();
        trie.insert("vendor.typing.Literal", Sign::Literal).unwrap();
        trie.insert("vendor.typing.List", Sign::List).unwrap();
        trie.insert("other.Any", Sign::Any).unwrap();

        assert_eq!(trie.get("vendor.typing.Literal"), Some(Sign::Literal));
        assert_eq!(trie.get("vendor.typing.List"), Some(Sign::List));
        assert_eq!(trie.get("other.Any"), Some(Sign::Any));
    }

    #[test]
    fn partial_and_overlong_paths_miss() {
        let mut trie = SignTrie::new();
        trie.insert("vendor.typing.Literal", Sign::Literal).unwrap();

        assert_eq!(trie.get("vendor.typing"), None);
        assert_eq!(trie.get("vendor.typing.Literal.extra"), None);
        assert_eq!(trie.get("vendor.typing.Missing"), None);
        assert_eq!(trie.get(""), None);
    }

    #[test]
    fn collisions_are_rejected() {
        let mut trie = SignTrie::new();
        trie.insert("vendor.Literal", Sign::Literal).unwrap();

        assert!(trie.insert("vendor.Literal", Sign::Any).is_err());
        assert!(trie.insert("vendor.Literal.deeper", Sign::Any).is_err());
        assert!(trie.insert("vendor", Sign::Any).is_err());
    }
}
