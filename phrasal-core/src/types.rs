//! Token and phrase value types shared by every layer

use serde::{Deserialize, Serialize};

/// A single word (plus any trailing punctuation) with a stable position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Raw surface form as it appeared in the text
    #[serde(default)]
    pub text: String,
    /// Position in the original token sequence
    pub index: usize,
}

impl Token {
    /// Create a token from its text and index
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Build tokens from words, numbering them from zero
    pub fn sequence<I, S>(words: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token::new(text, index))
            .collect()
    }
}

/// A contiguous run of tokens highlighted together
///
/// `start_index` and `end_index` are the `index` values of the first and
/// last word, not positions in the token slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Index of the first word
    pub start_index: usize,
    /// Index of the last word
    pub end_index: usize,
    /// Words in source order
    pub words: Vec<Token>,
}

impl Phrase {
    /// Build a phrase from a non-empty run of tokens
    pub fn from_words(words: Vec<Token>) -> Option<Self> {
        let start_index = words.first()?.index;
        let end_index = words.last()?.index;
        Some(Self {
            start_index,
            end_index,
            words,
        })
    }

    /// A phrase holding exactly one token
    pub fn single(token: Token) -> Self {
        Self {
            start_index: token.index,
            end_index: token.index,
            words: vec![token],
        }
    }

    /// Number of words in the phrase
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the phrase has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word_index` falls inside `[start_index, end_index]`
    pub fn contains_index(&self, word_index: usize) -> bool {
        self.start_index <= word_index && word_index <= self.end_index
    }

    /// Append words from another phrase, extending `end_index`
    pub(crate) fn absorb(&mut self, other: Phrase) {
        if let Some(last) = other.words.last() {
            self.end_index = last.index;
        }
        self.words.extend(other.words);
    }

    /// Words joined with single spaces
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&word.text);
        }
        out
    }
}
