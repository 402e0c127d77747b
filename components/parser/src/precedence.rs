//! Operator precedence ranks

use crate::lexer::TokenKind;

/// Precedence ranks from lowest (sequence) to highest (primary)
pub struct Precedence;

#[allow(missing_docs)]
impl Precedence {
    pub const SEQUENCE: u8 = 0;
    pub const ASSIGNMENT: u8 = 1;
    pub const CONDITIONAL: u8 = 2;
    pub const LOGICAL_OR: u8 = 3;
    pub const LOGICAL_AND: u8 = 4;
    pub const BITWISE_OR: u8 = 5;
    pub const BITWISE_XOR: u8 = 6;
    pub const BITWISE_AND: u8 = 7;
    pub const EQUALITY: u8 = 8;
    pub const RELATIONAL: u8 = 9;
    pub const BITWISE_SHIFT: u8 = 10;
    pub const ADDITIVE: u8 = 11;
    pub const MULTIPLICATIVE: u8 = 12;
    pub const UNARY: u8 = 13;
    pub const POSTFIX: u8 = 14;
    pub const CALL: u8 = 15;
    pub const NEW: u8 = 16;
    pub const TAGGED_TEMPLATE: u8 = 17;
    pub const MEMBER: u8 = 18;
    pub const PRIMARY: u8 = 19;
}

/// Rank of a binary operator token, `None` for anything else.
///
/// `in` is listed here; the parser decides whether it may act as an
/// operator in the current context.
pub fn binary_precedence(kind: TokenKind) -> Option<u8> {
    use TokenKind::*;
    let precedence = match kind {
        Or => Precedence::LOGICAL_OR,
        And => Precedence::LOGICAL_AND,
        BitOr => Precedence::BITWISE_OR,
        BitXor => Precedence::BITWISE_XOR,
        BitAnd => Precedence::BITWISE_AND,
        Eq | Ne | EqStrict | NeStrict => Precedence::EQUALITY,
        Lt | Gt | Lte | Gte | In | Instanceof => Precedence::RELATIONAL,
        Shl | Shr | ShrUnsigned => Precedence::BITWISE_SHIFT,
        Add | Sub => Precedence::ADDITIVE,
        Mul | Div | Mod => Precedence::MULTIPLICATIVE,
        _ => return None,
    };
    Some(precedence)
}
