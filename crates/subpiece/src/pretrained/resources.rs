//! # Published Vocabulary Resources

/// A resource with a constant URL and optional hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstUrlResource {
    /// The URLs associated with this resource, in mirror order.
    pub urls: &'static [&'static str],

    /// The hash associated with this resource, if available.
    pub hash: Option<&'static str>,
}

/// The general universal-sentence-encoder "vocab.json" resource.
pub const USE_BASE_VOCAB_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &[
        "https://storage.googleapis.com/tfjs-models/savedmodel/universal_sentence_encoder/vocab.json",
    ],
    hash: None,
};

/// The `QnA` on-device universal-sentence-encoder "vocab.json" resource.
pub const USE_QNA_VOCAB_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &[
        "https://tfhub.dev/google/tfjs-model/universal-sentence-encoder-qa-ondevice/1/vocab.json?tfjs-format=file",
    ],
    hash: None,
};
