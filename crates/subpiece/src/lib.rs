//! # `subpiece` Unigram Lattice Tokenizer
//!
//! A `SentencePiece`-style unigram subword tokenizer: a scored-piece
//! vocabulary, a prefix trie, and best-path lattice segmentation.
//!
//! See:
//! * [`tokenizer`] to encode text into token ids.
//! * [`vocab`] to manage piece vocabularies and vocab io.
//! * [`pretrained`] for published vocabularies.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//!
//! #### feature: ``download``
//!
//! The download feature enables downloading vocabularies from the
//! internet, via the ``subpiece-disk-cache`` crate.
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::SPHashMap`` type alias machinery.
//!
//! ## Encoding Text
//!
//! ```rust
//! use subpiece::{UnigramTokenizer, Vocabulary};
//!
//! let vocab: Vocabulary = [
//!     ("<unk>".to_string(), 0.0),
//!     ("<s>".to_string(), 0.0),
//!     ("</s>".to_string(), 0.0),
//!     ("\u{2581}hello".to_string(), -1.0),
//!     ("\u{2581}world".to_string(), -1.5),
//!     ("lo".to_string(), -0.5),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tokenizer: UnigramTokenizer<u32> = UnigramTokenizer::new(vocab, 3).unwrap();
//! assert_eq!(tokenizer.encode("hello world"), vec![3, 4]);
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
mod lattice;
pub mod normalize;
pub mod pretrained;
pub mod tokenizer;
pub mod trie;
pub mod types;
pub mod vocab;

#[cfg(feature = "download")]
#[doc(inline)]
pub use subpiece_disk_cache as disk_cache;

pub use errors::{SPResult, SubpieceError};
pub use tokenizer::UnigramTokenizer;
pub use vocab::{VocabEntry, Vocabulary};
