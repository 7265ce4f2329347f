//! Tokenizer for Solvent expressions
//!
//! Scans characters left to right, coalescing runs of same-class characters
//! into tokens. A name run immediately followed by `(` flushes as a
//! function name rather than a variable; that one-step lookahead is how
//! `sin(` is told apart from the bare variable `sin`.

use crate::classifier::{classify, CharClass};
use crate::token::{Token, TokenType};

/// Accumulates same-class characters and flushes them as complete tokens.
#[derive(Debug, Default)]
struct TokenBuffer {
    tokens: Vec<Token>,
    pending_type: Option<TokenType>,
    pending: String,
}

impl TokenBuffer {
    /// Add one classified character. If it begins a new token, the pending
    /// run is flushed first; a pending variable run followed by `(` is
    /// reclassified to a function name before the flush.
    fn write(&mut self, incoming: TokenType, c: char) {
        let begins_new_token = match self.pending_type {
            Some(current) => current != incoming || current.is_single_char(),
            None => false,
        };
        if begins_new_token {
            if self.pending_type == Some(TokenType::Variable) && incoming == TokenType::LeftParen {
                self.pending_type = Some(TokenType::Function);
            }
            self.flush();
        }
        self.pending_type = Some(incoming);
        self.pending.push(c);
    }

    /// Complete the pending run, if any, as one token.
    fn flush(&mut self) {
        if let Some(token_type) = self.pending_type.take() {
            if !self.pending.is_empty() {
                let lexeme = std::mem::take(&mut self.pending);
                self.tokens.push(Token::new(token_type, lexeme));
            }
        }
        self.pending.clear();
    }
}

/// Tokenize expression text into an ordered sequence of tokens.
///
/// Whitespace and unrecognized characters are discarded before token
/// assembly, order-preserving for everything else. Empty input yields an
/// empty sequence; whether that is an error is the parser's call.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut buffer = TokenBuffer::default();

    for c in source.chars() {
        let token_type = match classify(c) {
            CharClass::Digit => TokenType::Literal,
            CharClass::Letter => TokenType::Variable,
            CharClass::Operator => TokenType::Operator,
            CharClass::Delimiter => TokenType::Delimiter,
            CharClass::LeftParen => TokenType::LeftParen,
            CharClass::RightParen => TokenType::RightParen,
            CharClass::Ignored => continue,
        };
        buffer.write(token_type, c);
    }

    // The last run is still pending at end of input.
    buffer.flush();

    #[cfg(feature = "logging")]
    log::debug!("tokenized {} token(s)", buffer.tokens.len());

    buffer.tokens
}
