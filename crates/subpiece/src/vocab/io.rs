//! # Vocabulary IO
//!
//! Readers for the `vocab.json` format: a JSON array of
//! `[text, score]` pairs, in token id order.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::info;

use crate::{errors::SPResult, vocab::Vocabulary};

/// Parse a vocabulary from a JSON string.
pub fn parse_vocab(json: &str) -> SPResult<Vocabulary> {
    Ok(serde_json::from_str(json)?)
}

/// Read a vocabulary from a JSON reader.
pub fn read_vocab<R: Read>(reader: R) -> SPResult<Vocabulary> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a vocabulary from a JSON file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> SPResult<Vocabulary> {
    let path = path.as_ref();
    let vocab = read_vocab(BufReader::new(File::open(path)?))?;
    info!("loaded vocabulary: {} entries from {}", vocab.len(), path.display());
    Ok(vocab)
}
