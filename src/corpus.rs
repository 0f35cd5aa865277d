//! Loading the dictionary and corpus files into token streams.

use crate::error::{LoadError, Result};
use crate::token::Token;
use crate::tokenize::{split_corpus_raw, split_word_list};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Reads a dictionary file into one token per whitespace-separated word.
pub async fn load_word_list(path: &Path) -> Result<Vec<Token>> {
    let text = read_text(path).await?;
    let words = tokio::task::spawn_blocking(move || split_word_list(&text))
        .await
        .context("Word list tokenization panicked")?;

    tracing::info!("Loaded {} dictionary words from {}", words.len(), path.display());
    Ok(words)
}

/// Reads corpus text into its raw token stream, shared for concurrent readers.
///
/// The stream keeps the empty tokens left by doubled delimiters so positions
/// line up with the text; consumers that count words skip them.
pub async fn load_corpus(path: &Path) -> Result<Arc<[Token]>> {
    let text = read_text(path).await?;
    let tokens = tokio::task::spawn_blocking(move || split_corpus_raw(&text))
        .await
        .context("Corpus tokenization panicked")?;

    tracing::info!("Loaded {} corpus tokens from {}", tokens.len(), path.display());
    Ok(tokens.into())
}

async fn read_text(path: &Path) -> std::result::Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::from_io(path.to_path_buf(), e))
}
