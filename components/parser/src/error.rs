//! Parser error types and helpers
//!
//! Builds [`SyntaxError`] values from catalog codes and tokens. The parser
//! is the only caller.

use crate::lexer::{Token, TokenClass, TokenKind};
use core_types::{is_strict_mode_reserved_word, ErrorMessage, SourcePosition, SyntaxError};

/// Create a syntax error at a given position
pub fn create_error(message: ErrorMessage, args: &[&str], position: SourcePosition) -> SyntaxError {
    SyntaxError::new(message, args, position)
}

/// Create a syntax error located at the start of `token`
pub fn create_error_with_token(token: &Token<'_>, message: ErrorMessage, args: &[&str]) -> SyntaxError {
    SyntaxError::new(message, args, token.start)
}

/// Create the error for a token the grammar cannot accept here
pub fn create_unexpected(token: &Token<'_>, strict: bool) -> SyntaxError {
    let message = match token.kind.class() {
        TokenClass::Eos => ErrorMessage::UnexpectedEos,
        TokenClass::NumericLiteral => ErrorMessage::UnexpectedNumber,
        TokenClass::StringLiteral => ErrorMessage::UnexpectedString,
        TokenClass::Ident if strict && is_strict_mode_reserved_word(token.name()) => {
            ErrorMessage::StrictReservedWord
        }
        TokenClass::Ident => ErrorMessage::UnexpectedIdentifier,
        TokenClass::Keyword if token.kind == TokenKind::FutureReservedWord => {
            ErrorMessage::UnexpectedReservedWord
        }
        TokenClass::Illegal => ErrorMessage::UnexpectedIllegalToken,
        _ => return create_error_with_token(token, ErrorMessage::UnexpectedToken, &[token.text]),
    };
    create_error_with_token(token, message, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, TokenSource};

    fn first_token(source: &str) -> Token<'_> {
        Lexer::new(source).unwrap().lookahead().clone()
    }

    #[test]
    fn test_create_error() {
        let err = create_error(ErrorMessage::IllegalBreak, &[], SourcePosition::START);
        assert_eq!(err.message, ErrorMessage::IllegalBreak);
        assert_eq!(err.description, "Illegal break statement");
    }

    #[test]
    fn test_unexpected_by_class() {
        assert_eq!(create_unexpected(&first_token(""), false).message, ErrorMessage::UnexpectedEos);
        assert_eq!(create_unexpected(&first_token("1"), false).message, ErrorMessage::UnexpectedNumber);
        assert_eq!(create_unexpected(&first_token("'s'"), false).message, ErrorMessage::UnexpectedString);
        assert_eq!(create_unexpected(&first_token("x"), false).message, ErrorMessage::UnexpectedIdentifier);
        assert_eq!(create_unexpected(&first_token("enum"), false).message, ErrorMessage::UnexpectedReservedWord);
        assert_eq!(create_unexpected(&first_token("#"), false).message, ErrorMessage::UnexpectedIllegalToken);
    }

    #[test]
    fn test_unexpected_token_uses_lexeme() {
        let err = create_unexpected(&first_token("  }"), false);
        assert_eq!(err.message, ErrorMessage::UnexpectedToken);
        assert_eq!(err.description, "Unexpected token }");
        assert_eq!(err.position.column, 3);
    }

    #[test]
    fn test_strict_reserved_word() {
        let token = first_token("yield");
        assert_eq!(create_unexpected(&token, false).message, ErrorMessage::UnexpectedIdentifier);
        assert_eq!(create_unexpected(&token, true).message, ErrorMessage::StrictReservedWord);
    }
}
