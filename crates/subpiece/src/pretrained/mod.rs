//! # Pretrained Vocabularies
//!
//! Published universal-sentence-encoder vocabulary resources, and the
//! [`ResourceLoader`] seam that fetches them to local paths.

pub mod resources;

use std::{path::PathBuf, str::FromStr};

use crate::{
    errors::{SPResult, SubpieceError},
    tokenizer::UnigramTokenizer,
    types::TokenType,
    vocab::{Vocabulary, io},
};

pub use resources::ConstUrlResource;

/// Reserved control symbols at the head of the general-model
/// vocabulary.
pub const RESERVED_SYMBOLS: usize = 6;

/// Reserved control symbols at the head of the `QnA`-model vocabulary.
pub const QNA_RESERVED_SYMBOLS: usize = 3;

/// A trait for fetching remote resources to local paths.
pub trait ResourceLoader {
    /// Resolve a resource to a local file path, fetching if needed.
    ///
    /// ## Arguments
    /// * `context` - cache key path segments for the resource.
    /// * `resource` - the resource to resolve.
    fn load_resource_path(
        &mut self,
        context: &[&str],
        resource: &ConstUrlResource,
    ) -> SPResult<PathBuf>;
}

#[cfg(feature = "download")]
impl ResourceLoader for crate::disk_cache::SubpieceDiskCache {
    fn load_resource_path(
        &mut self,
        context: &[&str],
        resource: &ConstUrlResource,
    ) -> SPResult<PathBuf> {
        self.load_cached_path(context, resource.urls, true)
            .map_err(|e| SubpieceError::External(e.to_string()))
    }
}

/// Published universal-sentence-encoder vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseVocab {
    /// The general-model vocabulary: 8k pieces, 6 reserved symbols.
    Base,

    /// The `QnA` on-device vocabulary: 3 reserved symbols.
    QnA,
}

impl UseVocab {
    /// The reserved-symbol count for this model's vocabulary.
    pub fn reserved_symbols(&self) -> usize {
        match self {
            UseVocab::Base => RESERVED_SYMBOLS,
            UseVocab::QnA => QNA_RESERVED_SYMBOLS,
        }
    }

    /// The download resource for this vocabulary.
    pub fn resource(&self) -> ConstUrlResource {
        match self {
            UseVocab::Base => resources::USE_BASE_VOCAB_RESOURCE,
            UseVocab::QnA => resources::USE_QNA_VOCAB_RESOURCE,
        }
    }

    /// Cache key path segments for this vocabulary.
    pub fn cache_context(&self) -> &'static [&'static str] {
        match self {
            UseVocab::Base => &["use", "base"],
            UseVocab::QnA => &["use", "qna"],
        }
    }

    /// Load this vocabulary through a [`ResourceLoader`].
    pub fn load_vocab(
        &self,
        loader: &mut dyn ResourceLoader,
    ) -> SPResult<Vocabulary> {
        let path = loader.load_resource_path(self.cache_context(), &self.resource())?;
        io::load_vocab_path(path)
    }

    /// Load a ready tokenizer for this vocabulary.
    ///
    /// Binds the model's reserved-symbol count.
    pub fn load_tokenizer<T: TokenType>(
        &self,
        loader: &mut dyn ResourceLoader,
    ) -> SPResult<UnigramTokenizer<T>> {
        let vocab = self.load_vocab(loader)?;
        UnigramTokenizer::new(vocab, self.reserved_symbols())
    }
}

impl FromStr for UseVocab {
    type Err = SubpieceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "base" => Ok(UseVocab::Base),
            "qna" => Ok(UseVocab::QnA),
            _ => Err(SubpieceError::ResourceNotFound(name.to_string())),
        }
    }
}
