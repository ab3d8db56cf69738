//! # Vocabulary Prefix Trie
//!
//! Arena-backed trie over the scalar values of vocabulary pieces.
//! Built once at tokenizer construction; immutable during encoding.

use crate::types::{SPHashMap, TokenType, hash_map_new};

/// Handle of a node in the [`PrefixTrie`] arena.
type NodeId = usize;

/// Terminal payload of a trie node.
#[derive(Debug, Clone, Copy)]
struct Terminal<T> {
    /// Log-probability score of the piece.
    score: f64,

    /// Vocabulary id of the piece.
    id: T,
}

/// One node in the arena.
#[derive(Debug)]
struct TrieNode<T> {
    /// Child edges, keyed by scalar value.
    children: SPHashMap<char, NodeId>,

    /// Present iff some piece ends at this node.
    terminal: Option<Terminal<T>>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: hash_map_new(),
            terminal: None,
        }
    }
}

/// A single prefix match from [`PrefixTrie::common_prefix_search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrieMatch<T> {
    /// Match length, in scalar values.
    pub len: usize,

    /// Log-probability score of the matched piece.
    pub score: f64,

    /// Vocabulary id of the matched piece.
    pub id: T,
}

/// Prefix trie over vocabulary pieces.
///
/// Nodes live in a flat arena and reference each other by index;
/// the root is index 0 and always exists.
#[derive(Debug)]
pub struct PrefixTrie<T> {
    nodes: Vec<TrieNode<T>>,
}

impl<T> Default for PrefixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrefixTrie<T> {
    /// Construct an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    /// The number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: TokenType> PrefixTrie<T> {
    /// Insert a piece with its score and vocabulary id.
    ///
    /// Walks one child edge per scalar value, extending the arena as
    /// needed, and marks the final node terminal. Re-inserting the same
    /// text overwrites the terminal payload; last write wins.
    pub fn insert(
        &mut self,
        piece: &str,
        score: f64,
        id: T,
    ) {
        let mut node = 0;
        for ch in piece.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
        }
        self.nodes[node].terminal = Some(Terminal { score, id });
    }

    /// Find every vocabulary piece that is a prefix of `suffix`.
    ///
    /// Matches are returned shortest first. When no piece matches a
    /// non-empty suffix, the result is exactly one synthetic unknown
    /// match: one scalar value, score `0.0`, id `0`. An empty suffix
    /// yields no matches.
    pub fn common_prefix_search(
        &self,
        suffix: &[char],
    ) -> Vec<TrieMatch<T>> {
        let mut matches = Vec::new();

        let mut node = 0;
        for (depth, ch) in suffix.iter().enumerate() {
            match self.nodes[node].children.get(ch) {
                Some(&child) => node = child,
                None => break,
            }
            if let Some(terminal) = &self.nodes[node].terminal {
                matches.push(TrieMatch {
                    len: depth + 1,
                    score: terminal.score,
                    id: terminal.id,
                });
            }
        }

        if matches.is_empty() && !suffix.is_empty() {
            matches.push(TrieMatch {
                len: 1,
                score: 0.0,
                id: T::zero(),
            });
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn sample_trie() -> PrefixTrie<u32> {
        let mut trie = PrefixTrie::new();
        trie.insert("a", -1.0, 3);
        trie.insert("ab", -2.0, 4);
        trie.insert("abc", -3.0, 5);
        trie.insert("bx", -4.0, 6);
        trie
    }

    #[test]
    fn test_matches_shortest_first() {
        let trie = sample_trie();

        let matches = trie.common_prefix_search(&chars("abcd"));
        assert_eq!(
            matches,
            vec![
                TrieMatch {
                    len: 1,
                    score: -1.0,
                    id: 3
                },
                TrieMatch {
                    len: 2,
                    score: -2.0,
                    id: 4
                },
                TrieMatch {
                    len: 3,
                    score: -3.0,
                    id: 5
                },
            ]
        );
    }

    #[test]
    fn test_interior_nodes_are_not_matches() {
        let trie = sample_trie();

        // "b" is an interior node on the way to "bx"; only the unknown
        // fallback applies when the walk ends without a terminal.
        let matches = trie.common_prefix_search(&chars("by"));
        assert_eq!(
            matches,
            vec![TrieMatch {
                len: 1,
                score: 0.0,
                id: 0
            }]
        );
    }

    #[test]
    fn test_unknown_fallback() {
        let trie = sample_trie();

        let matches = trie.common_prefix_search(&chars("zzz"));
        assert_eq!(
            matches,
            vec![TrieMatch {
                len: 1,
                score: 0.0,
                id: 0
            }]
        );
    }

    #[test]
    fn test_empty_trie_still_falls_back() {
        let trie: PrefixTrie<u32> = PrefixTrie::new();

        let matches = trie.common_prefix_search(&chars("a"));
        assert_eq!(
            matches,
            vec![TrieMatch {
                len: 1,
                score: 0.0,
                id: 0
            }]
        );
    }

    #[test]
    fn test_empty_suffix_yields_nothing() {
        let trie = sample_trie();
        assert!(trie.common_prefix_search(&[]).is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut trie: PrefixTrie<u32> = PrefixTrie::new();
        trie.insert("dup", -1.0, 7);
        trie.insert("dup", -9.0, 8);

        let matches = trie.common_prefix_search(&chars("dup"));
        assert_eq!(
            matches,
            vec![TrieMatch {
                len: 3,
                score: -9.0,
                id: 8
            }]
        );
    }

    #[test]
    fn test_astral_plane_scalar_is_one_edge() {
        let mut trie: PrefixTrie<u32> = PrefixTrie::new();
        trie.insert("\u{1f600}", -1.0, 3);

        let matches = trie.common_prefix_search(&chars("\u{1f600}x"));
        assert_eq!(
            matches,
            vec![TrieMatch {
                len: 1,
                score: -1.0,
                id: 3
            }]
        );
    }

    #[test]
    fn test_node_count() {
        let trie = sample_trie();
        // root + a + ab + abc + b + bx
        assert_eq!(trie.node_count(), 6);
    }
}
