#![allow(missing_docs)]

use std::fs;

use subpiece::{
    UnigramTokenizer, Vocabulary,
    vocab::io::{load_vocab_path, parse_vocab},
};
use tempdir::TempDir;

const VOCAB_JSON: &str = r#"[
    ["<unk>", 0],
    ["<s>", 0],
    ["</s>", 0],
    ["▁hello", -1.0],
    ["▁world", -1.5],
    ["lo", -0.5],
    ["▁", -2.0],
    ["he", -1.2],
    ["ll", -1.4],
    ["o", -0.9]
]"#;

const SAMPLES: &[&str] = &[
    "hello world",
    "hello",
    "lo",
    "he llo",
    "  multiple   spaces  ",
    "o",
    " ",
    "\u{110f}",
    "hello\u{110f}world",
    "caf\u{00e9}",
    "emoji: \u{1f600}\u{1f680}",
];

fn sample_tokenizer() -> UnigramTokenizer<u32> {
    let vocab = parse_vocab(VOCAB_JSON).unwrap();
    UnigramTokenizer::new(vocab, 3).unwrap()
}

#[test]
fn test_encode_scenarios() {
    let vocab: Vocabulary = [
        ("<unk>", 0.0),
        ("<s>", 0.0),
        ("</s>", 0.0),
        ("\u{2581}hello", -1.0),
        ("\u{2581}world", -1.5),
        ("lo", -0.5),
    ]
    .into_iter()
    .collect();
    let tokenizer: UnigramTokenizer<u32> = UnigramTokenizer::new(vocab, 3).unwrap();

    // A single covering piece; the interior "lo" piece never starts
    // on a reachable boundary.
    assert_eq!(tokenizer.encode("hello"), vec![3]);

    // A scalar the vocabulary cannot cover.
    assert_eq!(tokenizer.encode("\u{110f}"), vec![0]);

    // Empty input.
    assert_eq!(tokenizer.encode(""), Vec::<u32>::new());
}

#[test]
fn test_every_sample_produces_output() {
    let tokenizer = sample_tokenizer();

    for text in SAMPLES {
        let tokens = tokenizer.encode(text);
        assert!(!tokens.is_empty(), "no output for {text:?}");
    }
}

#[test]
fn test_no_consecutive_unknowns_across_samples() {
    let tokenizer = sample_tokenizer();

    for text in SAMPLES {
        let tokens = tokenizer.encode(text);
        for pair in tokens.windows(2) {
            assert!(
                pair[0] != 0 || pair[1] != 0,
                "consecutive unknowns for {text:?}: {tokens:?}"
            );
        }
    }
}

#[test]
fn test_token_ids_stay_in_vocab_range() {
    let tokenizer = sample_tokenizer();
    let size = tokenizer.vocab().len() as u32;

    for text in SAMPLES {
        for token in tokenizer.encode(text) {
            assert!(token < size, "token {token} out of range for {text:?}");
        }
    }
}

#[test]
fn test_deterministic_across_calls() {
    let tokenizer = sample_tokenizer();

    for text in SAMPLES {
        let first = tokenizer.encode(text);
        assert_eq!(tokenizer.encode(text), first, "unstable encode for {text:?}");
    }
}

#[test]
fn test_batch_matches_single() {
    let tokenizer = sample_tokenizer();

    let batch = tokenizer.encode_batch(SAMPLES);
    assert_eq!(batch.len(), SAMPLES.len());
    for (text, tokens) in SAMPLES.iter().zip(&batch) {
        assert_eq!(tokens, &tokenizer.encode(text));
    }
}

#[test]
fn test_encode_shared_across_threads() {
    let tokenizer = sample_tokenizer();
    let expected: Vec<Vec<u32>> = SAMPLES.iter().map(|s| tokenizer.encode(s)).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (text, want) in SAMPLES.iter().zip(&expected) {
                    assert_eq!(&tokenizer.encode(text), want);
                }
            });
        }
    });
}

#[test]
fn test_load_tokenizer_from_file() {
    let tmp = TempDir::new("subpiece_encoding").unwrap();
    let path = tmp.path().join("vocab.json");
    fs::write(&path, VOCAB_JSON).unwrap();

    let vocab = load_vocab_path(&path).unwrap();
    let tokenizer: UnigramTokenizer<u32> = UnigramTokenizer::new(vocab, 3).unwrap();

    assert_eq!(tokenizer.encode("hello world"), sample_tokenizer().encode("hello world"));
}

#[test]
fn test_astral_scalars_count_one_position() {
    // The emoji piece is a single scalar value; the lattice must treat
    // it as one position, not two UTF-16 units.
    let vocab: Vocabulary = [
        ("<unk>", 0.0),
        ("\u{2581}\u{1f600}", -1.0),
        ("\u{1f600}", -0.5),
    ]
    .into_iter()
    .collect();
    let tokenizer: UnigramTokenizer<u32> = UnigramTokenizer::new(vocab, 1).unwrap();

    assert_eq!(tokenizer.encode("\u{1f600}"), vec![1]);
    assert_eq!(tokenizer.encode("\u{1f600}\u{1f600}"), vec![1, 2]);
}

#[test]
fn test_space_marking_joins_vocab_pieces() {
    let tokenizer = sample_tokenizer();

    // "hello world" segments into the two word pieces; the marker
    // spelling of each piece absorbs the space.
    assert_eq!(tokenizer.encode("hello world"), vec![3, 4]);

    // A lone space becomes marker pieces, not unknowns; "▁" is in the
    // vocabulary here.
    assert_eq!(tokenizer.encode(" "), vec![6, 6]);
}
