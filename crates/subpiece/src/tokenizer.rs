//! # Unigram Lattice Tokenizer
//!
//! Best-path segmentation of normalized text over a vocabulary prefix
//! trie, `SentencePiece`-unigram style.

use log::{debug, warn};

use crate::{
    errors::{SPResult, SubpieceError},
    lattice::Lattice,
    normalize,
    trie::PrefixTrie,
    types::TokenType,
    vocab::{Vocabulary, try_vocab_size},
};

/// A unigram lattice tokenizer over a fixed scored vocabulary.
///
/// Construction validates the vocabulary and builds the prefix trie
/// once; [`encode`](Self::encode) is a pure function of the built
/// state and is safe to call concurrently from many threads.
#[derive(Debug)]
pub struct UnigramTokenizer<T: TokenType> {
    vocab: Vocabulary,
    reserved_symbols: usize,
    trie: PrefixTrie<T>,
}

impl<T: TokenType> UnigramTokenizer<T> {
    /// Construct a tokenizer from a vocabulary.
    ///
    /// Entries with id below `reserved_symbols` are control symbols;
    /// they are excluded from the trie and never produced by encoding.
    ///
    /// ## Arguments
    /// * `vocab` - the scored vocabulary; position is token id.
    /// * `reserved_symbols` - count of leading control entries.
    ///
    /// ## Returns
    /// A ready tokenizer, or an error if the vocabulary is empty or
    /// does not fit in `T`.
    pub fn new(
        vocab: Vocabulary,
        reserved_symbols: usize,
    ) -> SPResult<Self> {
        let size = try_vocab_size::<T>(vocab.len())?;

        if reserved_symbols >= size {
            warn!(
                "all {size} vocabulary entries are reserved; every input will encode to unknowns"
            );
        }

        let mut trie = PrefixTrie::new();
        for (id, entry) in vocab.entries().iter().enumerate().skip(reserved_symbols) {
            let id = T::from_usize(id).ok_or(SubpieceError::VocabSizeOverflow { size })?;
            trie.insert(&entry.piece, entry.score, id);
        }
        debug!(
            "built unigram trie: {} pieces, {} nodes",
            size.saturating_sub(reserved_symbols),
            trie.node_count(),
        );

        Ok(Self {
            vocab,
            reserved_symbols,
            trie,
        })
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The number of leading reserved control entries.
    pub fn reserved_symbols(&self) -> usize {
        self.reserved_symbols
    }

    /// Encode text to token ids.
    ///
    /// Normalizes the input, builds the segmentation lattice over its
    /// scalar values, and returns the best-path ids with consecutive
    /// unknown (id 0) runs merged. Every input encodes; characters the
    /// vocabulary cannot cover come back as unknowns.
    ///
    /// Empty input (after normalization) yields an empty sequence.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let normalized = normalize::normalize(text);
        let chars: Vec<char> = normalized.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        Lattice::build(&self.trie, &chars).best_path()
    }

    /// Encode a batch of texts.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Vec<Vec<T>> {
        texts.iter().map(|text| self.encode(text.as_ref())).collect()
    }
}
