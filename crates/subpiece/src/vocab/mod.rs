//! # Scored Piece Vocabularies
//!
//! A vocabulary is an ordered list of (piece text, score) entries;
//! an entry's position is its stable token id. Id 0 is the unknown
//! token. See [`io`] for the `vocab.json` wire format.

pub mod io;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{SPResult, SubpieceError},
    types::TokenType,
};

/// One vocabulary entry: a piece and its log-probability score.
///
/// Serializes as a two-element array `[text, score]`, the published
/// `vocab.json` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct VocabEntry {
    /// The piece text.
    pub piece: String,

    /// The log-probability score.
    pub score: f64,
}

impl From<(String, f64)> for VocabEntry {
    fn from((piece, score): (String, f64)) -> Self {
        Self { piece, score }
    }
}

impl From<VocabEntry> for (String, f64) {
    fn from(entry: VocabEntry) -> Self {
        (entry.piece, entry.score)
    }
}

/// An ordered, immutable vocabulary of scored pieces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    /// Construct a vocabulary from entries.
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    /// The number of entries; also one past the max token id.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for a token id.
    pub fn get(
        &self,
        id: usize,
    ) -> Option<&VocabEntry> {
        self.entries.get(id)
    }

    /// The entries, in id order.
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(piece, score)| VocabEntry {
                    piece: piece.into(),
                    score,
                })
                .collect(),
        }
    }
}

/// Validates and returns the vocabulary size for the token type `T`.
///
/// A non-empty vocabulary whose max id (`size - 1`) fits in `T` is
/// valid; anything else is a construction error.
pub fn try_vocab_size<T: TokenType>(size: usize) -> SPResult<usize> {
    if size == 0 {
        Err(SubpieceError::EmptyVocab)
    } else if T::from_usize(size - 1).is_none() {
        Err(SubpieceError::VocabSizeOverflow { size })
    } else {
        Ok(size)
    }
}
