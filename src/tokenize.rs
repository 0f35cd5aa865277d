//! Splitting raw text into lower-cased tokens.

use crate::token::Token;
use regex::Regex;
use std::sync::LazyLock;

/// A single word boundary in corpus text: whitespace or common punctuation.
///
/// Apostrophes are deliberately absent so contractions stay whole.
static CORPUS_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s"().,?!_\-:;]"#).expect("corpus delimiter pattern"));

/// Splits corpus text at every single delimiter, keeping empty pieces.
///
/// Two adjacent delimiters yield an empty token between them, and that token
/// still occupies a position in the stream. One leading and one trailing empty
/// piece are dropped: a scan starts past the first delimiter and stops at the
/// last one.
pub fn split_corpus_raw(text: &str) -> Vec<Token> {
    let mut pieces: Vec<&str> = CORPUS_DELIMITER.split(text).collect();
    if pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    let skip = usize::from(pieces.first().is_some_and(|piece| piece.is_empty()));
    pieces[skip..].iter().copied().map(Token::normalize).collect()
}

/// Splits corpus text into non-empty tokens, in order of appearance.
pub fn split_corpus(text: &str) -> Vec<Token> {
    CORPUS_DELIMITER
        .split(text)
        .filter(|piece| !piece.is_empty())
        .map(Token::normalize)
        .collect()
}

/// Splits a word list on whitespace only.
pub fn split_word_list(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[rstest]
    #[case("Hello, World!", &["hello", "world"])]
    #[case("\"Frodo!\" said Sam.", &["frodo", "said", "sam"])]
    #[case("half-elven lords_of (the) west", &["half", "elven", "lords", "of", "the", "west"])]
    #[case("one;two:three?four", &["one", "two", "three", "four"])]
    #[case("line one\nline two\r\n", &["line", "one", "line", "two"])]
    #[case("don't stop", &["don't", "stop"])]
    fn test_split_corpus(#[case] input: &str, #[case] expected: &[&str]) {
        check!(texts(&split_corpus(input)) == expected);
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t")]
    #[case("...---,,,;;")]
    fn test_split_corpus_yields_nothing(#[case] input: &str) {
        check!(split_corpus(input).is_empty());
    }

    #[rstest]
    #[case("Frodo. Ring", &["frodo", "", "ring"])]
    #[case("a,  b", &["a", "", "", "b"])]
    #[case(". lead", &["", "lead"])]
    #[case("lead.", &["lead"])]
    #[case("end!\n", &["end", ""])]
    #[case("plain words", &["plain", "words"])]
    fn test_split_corpus_raw_keeps_empty_pieces(#[case] input: &str, #[case] expected: &[&str]) {
        check!(texts(&split_corpus_raw(input)) == expected);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    fn test_split_corpus_raw_yields_nothing(#[case] input: &str) {
        check!(split_corpus_raw(input).is_empty());
    }

    #[test]
    fn test_raw_and_filtered_agree_on_words() {
        let text = "\"The Ring-bearer,\" said Gandalf. (Then: silence!)";
        let raw: Vec<Token> = split_corpus_raw(text)
            .into_iter()
            .filter(|token| !token.is_empty())
            .collect();
        check!(raw == split_corpus(text));
    }

    #[test]
    fn test_split_corpus_keeps_digits_and_unicode() {
        let tokens = split_corpus("Númenor 3019");
        check!(texts(&tokens) == ["númenor", "3019"]);
    }

    #[test]
    fn test_split_word_list_ignores_punctuation() {
        let tokens = split_word_list("Aardvark\nabbey's\n  co-op\n");
        check!(texts(&tokens) == ["aardvark", "abbey's", "co-op"]);
    }
}
