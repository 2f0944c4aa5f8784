//! Whitespace tokenization into indexed word tokens

use phrasal_core::Token;

/// Split text on whitespace, numbering words from zero
///
/// Punctuation stays attached to its word unless separated by spaces.
pub fn tokenize(text: &str) -> Vec<Token> {
    Token::sequence(text.split_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_numbers_words() {
        let tokens = tokenize("  Der Hase\nläuft ,\tschnell. ");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Der", "Hase", "läuft", ",", "schnell."]);
        assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
    }

    #[test]
    fn test_tokenize_blank_text() {
        assert!(tokenize(" \n\t ").is_empty());
    }
}
