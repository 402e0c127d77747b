//! ES5 Lexer - tokenizes source code into tokens
//!
//! The lexer always holds one scanned token of lookahead. The parser drives
//! it through the [`TokenSource`] trait, which also exposes the re-scanning
//! primitives needed to read `/` as the start of a regular expression.

use core_types::{ErrorMessage, SourcePosition, Span, SyntaxError};

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// End of input
    Eos,
    /// Identifier
    Ident,
    /// Keyword or future reserved word
    Keyword,
    /// Operator or delimiter
    Punctuator,
    /// String literal
    StringLiteral,
    /// Numeric literal
    NumericLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// `null`
    NullLiteral,
    /// Regular expression literal
    RegularExpression,
    /// Character that cannot start a token
    Illegal,
}

/// Terminal symbol of the ES5 grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Period,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `?`
    Conditional,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `=`
    Assign,
    /// `|=`
    AssignBitOr,
    /// `^=`
    AssignBitXor,
    /// `&=`
    AssignBitAnd,
    /// `<<=`
    AssignShl,
    /// `>>=`
    AssignShr,
    /// `>>>=`
    AssignShrUnsigned,
    /// `+=`
    AssignAdd,
    /// `-=`
    AssignSub,
    /// `*=`
    AssignMul,
    /// `/=`
    AssignDiv,
    /// `%=`
    AssignMod,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    ShrUnsigned,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `===`
    EqStrict,
    /// `!==`
    NeStrict,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// break keyword
    Break,
    /// case keyword
    Case,
    /// catch keyword
    Catch,
    /// continue keyword
    Continue,
    /// debugger keyword
    Debugger,
    /// default keyword
    Default,
    /// delete keyword
    Delete,
    /// do keyword
    Do,
    /// else keyword
    Else,
    /// finally keyword
    Finally,
    /// for keyword
    For,
    /// function keyword
    Function,
    /// if keyword
    If,
    /// in keyword
    In,
    /// instanceof keyword
    Instanceof,
    /// new keyword
    New,
    /// return keyword
    Return,
    /// switch keyword
    Switch,
    /// this keyword
    This,
    /// throw keyword
    Throw,
    /// try keyword
    Try,
    /// typeof keyword
    Typeof,
    /// var keyword
    Var,
    /// void keyword
    Void,
    /// while keyword
    While,
    /// with keyword
    With,
    /// let keyword
    Let,
    /// const keyword
    Const,
    /// `class`, `enum`, `export`, `extends`, `import` or `super`
    FutureReservedWord,
    /// true literal
    True,
    /// false literal
    False,
    /// null literal
    Null,
    /// Identifier name
    Identifier,
    /// String literal
    String,
    /// Numeric literal
    Number,
    /// Regular expression literal
    RegularExpression,
    /// End of input
    Eos,
    /// Unrecognized character
    Illegal,
}

impl TokenKind {
    /// Lexical class of this terminal
    pub fn class(self) -> TokenClass {
        use TokenKind::*;
        match self {
            Break | Case | Catch | Continue | Debugger | Default | Delete | Do | Else
            | Finally | For | Function | If | In | Instanceof | New | Return | Switch | This
            | Throw | Try | Typeof | Var | Void | While | With | Let | Const
            | FutureReservedWord => TokenClass::Keyword,
            True | False => TokenClass::BooleanLiteral,
            Null => TokenClass::NullLiteral,
            Identifier => TokenClass::Ident,
            String => TokenClass::StringLiteral,
            Number => TokenClass::NumericLiteral,
            RegularExpression => TokenClass::RegularExpression,
            Eos => TokenClass::Eos,
            Illegal => TokenClass::Illegal,
            _ => TokenClass::Punctuator,
        }
    }

    /// Lexeme for punctuators and keywords, a descriptive name otherwise
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            LBracket => "[",
            RBracket => "]",
            Period => ".",
            Semicolon => ";",
            Comma => ",",
            Colon => ":",
            Conditional => "?",
            Inc => "++",
            Dec => "--",
            Assign => "=",
            AssignBitOr => "|=",
            AssignBitXor => "^=",
            AssignBitAnd => "&=",
            AssignShl => "<<=",
            AssignShr => ">>=",
            AssignShrUnsigned => ">>>=",
            AssignAdd => "+=",
            AssignSub => "-=",
            AssignMul => "*=",
            AssignDiv => "/=",
            AssignMod => "%=",
            Or => "||",
            And => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Shl => "<<",
            Shr => ">>",
            ShrUnsigned => ">>>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Eq => "==",
            Ne => "!=",
            EqStrict => "===",
            NeStrict => "!==",
            Lt => "<",
            Gt => ">",
            Lte => "<=",
            Gte => ">=",
            Not => "!",
            BitNot => "~",
            Break => "break",
            Case => "case",
            Catch => "catch",
            Continue => "continue",
            Debugger => "debugger",
            Default => "default",
            Delete => "delete",
            Do => "do",
            Else => "else",
            Finally => "finally",
            For => "for",
            Function => "function",
            If => "if",
            In => "in",
            Instanceof => "instanceof",
            New => "new",
            Return => "return",
            Switch => "switch",
            This => "this",
            Throw => "throw",
            Try => "try",
            Typeof => "typeof",
            Var => "var",
            Void => "void",
            While => "while",
            With => "with",
            Let => "let",
            Const => "const",
            FutureReservedWord => "FutureReservedWord",
            True => "true",
            False => "false",
            Null => "null",
            Identifier => "Identifier",
            String => "String",
            Number => "Numeric",
            RegularExpression => "RegularExpression",
            Eos => "EOS",
            Illegal => "ILLEGAL",
        }
    }
}

/// Map a word to its keyword kind, if it is one
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    let kind = match word {
        "break" => Break,
        "case" => Case,
        "catch" => Catch,
        "continue" => Continue,
        "debugger" => Debugger,
        "default" => Default,
        "delete" => Delete,
        "do" => Do,
        "else" => Else,
        "finally" => Finally,
        "for" => For,
        "function" => Function,
        "if" => If,
        "in" => In,
        "instanceof" => Instanceof,
        "new" => New,
        "return" => Return,
        "switch" => Switch,
        "this" => This,
        "throw" => Throw,
        "try" => Try,
        "typeof" => Typeof,
        "var" => Var,
        "void" => Void,
        "while" => While,
        "with" => With,
        "let" => Let,
        "const" => Const,
        "class" | "enum" | "export" | "extends" | "import" | "super" => FutureReservedWord,
        "true" => True,
        "false" => False,
        "null" => Null,
        _ => return None,
    };
    Some(kind)
}

/// Cooked value carried by a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// No value beyond the raw text
    None,
    /// Identifier name with escapes decoded
    Name(String),
    /// String literal contents with escapes decoded
    String(String),
    /// Numeric literal value
    Number(f64),
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// Terminal symbol
    pub kind: TokenKind,
    /// Cooked value
    pub value: TokenValue,
    /// Raw source text of the token
    pub text: &'a str,
    /// Byte range of the token
    pub span: Span,
    /// Position of the first character
    pub start: SourcePosition,
    /// Legacy octal literal or octal escape sequence
    pub octal: bool,
}

impl<'a> Token<'a> {
    /// True for a plain identifier
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// True for anything usable as an IdentifierName (property names,
    /// member access): identifiers, keywords, reserved words and the
    /// boolean/null literals.
    pub fn is_identifier_like(&self) -> bool {
        matches!(
            self.kind.class(),
            TokenClass::Ident
                | TokenClass::Keyword
                | TokenClass::BooleanLiteral
                | TokenClass::NullLiteral
        )
    }

    /// Identifier name (escapes decoded) or the raw text for other tokens
    pub fn name(&self) -> &str {
        match &self.value {
            TokenValue::Name(name) => name,
            _ => self.text,
        }
    }

    /// Decoded string literal contents
    pub fn string_value(&self) -> &str {
        match &self.value {
            TokenValue::String(value) => value,
            _ => self.text,
        }
    }

    /// Numeric literal value, NaN for non-numeric tokens
    pub fn number_value(&self) -> f64 {
        match self.value {
            TokenValue::Number(value) => value,
            _ => f64::NAN,
        }
    }
}

/// The tokenizer interface the parser consumes.
///
/// `lex` hands out the current lookahead and scans the next one.
/// `skip_comment` followed by `scan_regexp` re-reads the lookahead as a
/// regular expression literal when the parser expects an operand at `/`.
pub trait TokenSource<'a> {
    /// Current unconsumed token
    fn lookahead(&self) -> &Token<'a>;

    /// Consume the lookahead and scan the next token
    fn lex(&mut self) -> Result<Token<'a>, SyntaxError>;

    /// True once the lookahead is end of input
    fn eof(&self) -> bool {
        self.lookahead().kind == TokenKind::Eos
    }

    /// True if a line terminator separates the last consumed token from
    /// the lookahead
    fn has_line_terminator_before_next(&self) -> bool;

    /// Opaque marker for the start of the lookahead
    fn location(&self) -> SourcePosition {
        self.lookahead().start
    }

    /// Rewind to the end of the last consumed token and skip whitespace
    /// and comments
    fn skip_comment(&mut self) -> Result<(), SyntaxError>;

    /// Scan a regular expression literal at the cursor and install it as
    /// the lookahead
    fn scan_regexp(&mut self) -> Result<Token<'a>, SyntaxError>;

    /// Full source text
    fn source(&self) -> &'a str;

    /// Byte offset just past the last consumed token
    fn index(&self) -> usize;

    /// True if the lookahead is `kind`
    fn matches(&self, kind: TokenKind) -> bool {
        self.lookahead().kind == kind
    }

    /// Consume the lookahead only if it is `kind`
    fn eat(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, SyntaxError> {
        if self.matches(kind) {
            self.lex().map(Some)
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    offset: usize,
    line: u32,
    line_start: usize,
}

impl Cursor {
    const START: Cursor = Cursor {
        offset: 0,
        line: 1,
        line_start: 0,
    };
}

/// Lexer for ES5 source code
pub struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor,
    lookahead: Token<'a>,
    /// Cursor just past the lookahead
    lookahead_end: Cursor,
    /// Cursor just past the last consumed token
    last_end: Cursor,
    line_terminator_before_next: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer and scan the first token
    pub fn new(source: &'a str) -> Result<Self, SyntaxError> {
        let mut lexer = Self {
            source,
            cursor: Cursor::START,
            lookahead: Token {
                kind: TokenKind::Eos,
                value: TokenValue::None,
                text: "",
                span: Span::default(),
                start: SourcePosition::START,
                octal: false,
            },
            lookahead_end: Cursor::START,
            last_end: Cursor::START,
            line_terminator_before_next: false,
        };
        lexer.lookahead = lexer.advance()?;
        lexer.lookahead_end = lexer.cursor;
        Ok(lexer)
    }

    /// Tokenize the whole source, excluding the end-of-input token.
    ///
    /// `/` is always read as division here; only the parser knows where a
    /// regular expression may start.
    pub fn tokenize(source: &'a str) -> Result<Vec<Token<'a>>, SyntaxError> {
        let mut lexer = Lexer::new(source)?;
        let mut tokens = Vec::new();
        while !lexer.eof() {
            tokens.push(lexer.lex()?);
        }
        Ok(tokens)
    }

    fn advance(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.line_terminator_before_next = false;
        self.skip_whitespace_and_comments()?;

        let start = self.cursor.offset;
        let start_pos = self.current_position();
        let Some(ch) = self.bump() else {
            return Ok(self.make_token(TokenKind::Eos, TokenValue::None, start, start_pos, false));
        };

        use TokenKind::*;
        let kind = match ch {
            '(' => LParen,
            ')' => RParen,
            '{' => LBrace,
            '}' => RBrace,
            '[' => LBracket,
            ']' => RBracket,
            ';' => Semicolon,
            ',' => Comma,
            ':' => Colon,
            '?' => Conditional,
            '~' => BitNot,
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return self.scan_number(ch, start, start_pos);
                }
                Period
            }
            '=' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        EqStrict
                    } else {
                        Eq
                    }
                } else {
                    Assign
                }
            }
            '!' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        NeStrict
                    } else {
                        Ne
                    }
                } else {
                    Not
                }
            }
            '+' => {
                if self.match_char('+') {
                    Inc
                } else if self.match_char('=') {
                    AssignAdd
                } else {
                    Add
                }
            }
            '-' => {
                if self.match_char('-') {
                    Dec
                } else if self.match_char('=') {
                    AssignSub
                } else {
                    Sub
                }
            }
            '*' => {
                if self.match_char('=') {
                    AssignMul
                } else {
                    Mul
                }
            }
            '/' => {
                if self.match_char('=') {
                    AssignDiv
                } else {
                    Div
                }
            }
            '%' => {
                if self.match_char('=') {
                    AssignMod
                } else {
                    Mod
                }
            }
            '<' => {
                if self.match_char('<') {
                    if self.match_char('=') {
                        AssignShl
                    } else {
                        Shl
                    }
                } else if self.match_char('=') {
                    Lte
                } else {
                    Lt
                }
            }
            '>' => {
                if self.match_char('>') {
                    if self.match_char('>') {
                        if self.match_char('=') {
                            AssignShrUnsigned
                        } else {
                            ShrUnsigned
                        }
                    } else if self.match_char('=') {
                        AssignShr
                    } else {
                        Shr
                    }
                } else if self.match_char('=') {
                    Gte
                } else {
                    Gt
                }
            }
            '&' => {
                if self.match_char('&') {
                    And
                } else if self.match_char('=') {
                    AssignBitAnd
                } else {
                    BitAnd
                }
            }
            '|' => {
                if self.match_char('|') {
                    Or
                } else if self.match_char('=') {
                    AssignBitOr
                } else {
                    BitOr
                }
            }
            '^' => {
                if self.match_char('=') {
                    AssignBitXor
                } else {
                    BitXor
                }
            }
            '\'' | '"' => return self.scan_string(ch, start, start_pos),
            '0'..='9' => return self.scan_number(ch, start, start_pos),
            c if c == '\\' || is_identifier_start(c) => {
                return self.scan_identifier(ch, start, start_pos)
            }
            _ => Illegal,
        };

        Ok(self.make_token(kind, TokenValue::None, start, start_pos, false))
    }

    fn make_token(
        &self,
        kind: TokenKind,
        value: TokenValue,
        start: usize,
        start_pos: SourcePosition,
        octal: bool,
    ) -> Token<'a> {
        let span = Span::new(start, self.cursor.offset);
        Token {
            kind,
            value,
            text: span.text(self.source),
            span,
            start: start_pos,
            octal,
        }
    }

    fn scan_identifier(
        &mut self,
        first: char,
        start: usize,
        start_pos: SourcePosition,
    ) -> Result<Token<'a>, SyntaxError> {
        let mut escaped = false;
        let mut name = String::new();

        if first == '\\' {
            let ch = self.scan_identifier_escape()?;
            if !is_identifier_start(ch) {
                return Err(self.illegal_at(start_pos));
            }
            name.push(ch);
            escaped = true;
        } else {
            name.push(first);
        }

        loop {
            match self.peek() {
                Some('\\') => {
                    let escape_pos = self.current_position();
                    self.bump();
                    let ch = self.scan_identifier_escape()?;
                    if !is_identifier_part(ch) {
                        return Err(self.illegal_at(escape_pos));
                    }
                    name.push(ch);
                    escaped = true;
                }
                Some(ch) if is_identifier_part(ch) => {
                    self.bump();
                    name.push(ch);
                }
                _ => break,
            }
        }

        // An escaped word never acts as a keyword
        let kind = if escaped {
            TokenKind::Identifier
        } else {
            keyword_kind(&name).unwrap_or(TokenKind::Identifier)
        };
        let value = if kind == TokenKind::Identifier {
            TokenValue::Name(name)
        } else {
            TokenValue::None
        };
        Ok(self.make_token(kind, value, start, start_pos, false))
    }

    /// Reads `uXXXX` after a backslash in an identifier
    fn scan_identifier_escape(&mut self) -> Result<char, SyntaxError> {
        if !self.match_char('u') {
            return Err(self.illegal());
        }
        self.scan_hex_escape(4).ok_or_else(|| self.illegal())
    }

    fn scan_hex_escape(&mut self, digits: usize) -> Option<char> {
        let rest = &self.source[self.cursor.offset..];
        let hex = rest.get(..digits)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let code = u32::from_str_radix(hex, 16).ok()?;
        self.cursor.offset += digits;
        // Lone surrogates have no char; substitute the replacement character
        Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn scan_number(
        &mut self,
        first: char,
        start: usize,
        start_pos: SourcePosition,
    ) -> Result<Token<'a>, SyntaxError> {
        let mut octal = false;
        let value;

        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.bump();
            let digits_start = self.cursor.offset;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.bump();
            }
            let digits = &self.source[digits_start..self.cursor.offset];
            if digits.is_empty() {
                return Err(self.illegal());
            }
            value = digits.bytes().fold(0.0, |acc, b| {
                acc * 16.0 + f64::from((b as char).to_digit(16).unwrap_or(0))
            });
        } else if first == '0' && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            // Legacy octal; a literal containing 8 or 9 is read as decimal
            octal = true;
            let digits_start = self.cursor.offset;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
            let digits = &self.source[digits_start..self.cursor.offset];
            value = if digits.bytes().all(|b| b < b'8') {
                digits
                    .bytes()
                    .fold(0.0, |acc, b| acc * 8.0 + f64::from(b - b'0'))
            } else {
                self.source[start..self.cursor.offset]
                    .parse()
                    .map_err(|_| self.illegal())?
            };
        } else {
            if first != '.' {
                self.skip_decimal_digits();
                if self.match_char('.') {
                    self.skip_decimal_digits();
                }
            } else {
                self.skip_decimal_digits();
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(self.illegal());
                }
                self.skip_decimal_digits();
            }
            value = self.source[start..self.cursor.offset]
                .parse()
                .map_err(|_| self.illegal())?;
        }

        if self
            .peek()
            .is_some_and(|c| c == '\\' || c.is_ascii_digit() || is_identifier_start(c))
        {
            return Err(self.illegal());
        }

        Ok(self.make_token(
            TokenKind::Number,
            TokenValue::Number(value),
            start,
            start_pos,
            octal,
        ))
    }

    fn skip_decimal_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn scan_string(
        &mut self,
        quote: char,
        start: usize,
        start_pos: SourcePosition,
    ) -> Result<Token<'a>, SyntaxError> {
        let mut value = String::new();
        let mut octal = false;

        loop {
            let Some(ch) = self.peek() else {
                return Err(self.illegal());
            };
            if ch == quote {
                self.bump();
                break;
            }
            if is_line_terminator(ch) {
                return Err(self.illegal());
            }
            self.bump();
            if ch != '\\' {
                value.push(ch);
                continue;
            }

            let Some(escaped) = self.bump() else {
                return Err(self.illegal());
            };
            match escaped {
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'b' => value.push('\u{0008}'),
                'f' => value.push('\u{000C}'),
                'v' => value.push('\u{000B}'),
                'x' => {
                    let ch = self.scan_hex_escape(2).ok_or_else(|| self.illegal())?;
                    value.push(ch);
                }
                'u' => {
                    let ch = self.scan_hex_escape(4).ok_or_else(|| self.illegal())?;
                    value.push(ch);
                }
                '\r' => {
                    self.match_char('\n');
                    self.new_line();
                }
                '\n' | '\u{2028}' | '\u{2029}' => self.new_line(),
                '0'..='7' => {
                    let first = escaped as u32 - '0' as u32;
                    if first == 0 && !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        value.push('\0');
                        continue;
                    }
                    octal = true;
                    let max_len = if first <= 3 { 3 } else { 2 };
                    let mut code = first;
                    let mut len = 1;
                    while len < max_len {
                        match self.peek() {
                            Some(c @ '0'..='7') => {
                                self.bump();
                                code = code * 8 + (c as u32 - '0' as u32);
                                len += 1;
                            }
                            _ => break,
                        }
                    }
                    value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                other => value.push(other),
            }
        }

        Ok(self.make_token(
            TokenKind::String,
            TokenValue::String(value),
            start,
            start_pos,
            octal,
        ))
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), SyntaxError> {
        while let Some(ch) = self.peek() {
            match ch {
                '\r' => {
                    self.bump();
                    self.match_char('\n');
                    self.new_line();
                    self.line_terminator_before_next = true;
                }
                '\n' | '\u{2028}' | '\u{2029}' => {
                    self.bump();
                    self.new_line();
                    self.line_terminator_before_next = true;
                }
                '/' => match self.peek_next() {
                    Some('/') => {
                        while self.peek().is_some_and(|c| !is_line_terminator(c)) {
                            self.bump();
                        }
                    }
                    Some('*') => self.skip_block_comment()?,
                    _ => break,
                },
                c if is_whitespace(c) => {
                    self.bump();
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn skip_block_comment(&mut self) -> Result<(), SyntaxError> {
        let comment_start = self.current_position();
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                None => return Err(self.illegal_at(comment_start)),
                Some('*') if self.match_char('/') => return Ok(()),
                Some('\r') => {
                    self.match_char('\n');
                    self.new_line();
                    self.line_terminator_before_next = true;
                }
                Some('\n' | '\u{2028}' | '\u{2029}') => {
                    self.new_line();
                    self.line_terminator_before_next = true;
                }
                Some(_) => {}
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.cursor.offset..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.cursor.offset..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.cursor.offset += ch.len_utf8();
        Some(ch)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Record that the cursor sits at the start of a new line
    fn new_line(&mut self) {
        self.cursor.line += 1;
        self.cursor.line_start = self.cursor.offset;
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.cursor.line,
            column: (self.cursor.offset - self.cursor.line_start) as u32 + 1,
            offset: self.cursor.offset,
        }
    }

    fn illegal(&self) -> SyntaxError {
        self.illegal_at(self.current_position())
    }

    fn illegal_at(&self, position: SourcePosition) -> SyntaxError {
        SyntaxError::new(ErrorMessage::UnexpectedIllegalToken, &[], position)
    }
}

impl<'a> TokenSource<'a> for Lexer<'a> {
    fn lookahead(&self) -> &Token<'a> {
        &self.lookahead
    }

    fn lex(&mut self) -> Result<Token<'a>, SyntaxError> {
        let previous_end = self.lookahead_end;
        self.cursor = previous_end;
        let next = self.advance()?;
        self.lookahead_end = self.cursor;
        self.last_end = previous_end;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    fn has_line_terminator_before_next(&self) -> bool {
        self.line_terminator_before_next
    }

    fn skip_comment(&mut self) -> Result<(), SyntaxError> {
        self.cursor = self.last_end;
        self.line_terminator_before_next = false;
        self.skip_whitespace_and_comments()
    }

    fn scan_regexp(&mut self) -> Result<Token<'a>, SyntaxError> {
        let start = self.cursor.offset;
        let start_pos = self.current_position();
        let unterminated = SyntaxError::new(ErrorMessage::UnterminatedRegExp, &[], start_pos);

        if !self.match_char('/') {
            return Err(self.illegal());
        }
        let mut in_class = false;
        loop {
            match self.bump() {
                None => return Err(unterminated),
                Some(c) if is_line_terminator(c) => return Err(unterminated),
                Some('\\') => match self.bump() {
                    Some(c) if !is_line_terminator(c) => {}
                    _ => return Err(unterminated),
                },
                Some('[') => in_class = true,
                Some(']') => in_class = false,
                Some('/') if !in_class => break,
                Some(_) => {}
            }
        }
        while let Some(ch) = self.peek() {
            if ch == '\\' {
                return Err(self.illegal());
            }
            if !is_identifier_part(ch) {
                break;
            }
            self.bump();
        }

        let token = self.make_token(
            TokenKind::RegularExpression,
            TokenValue::None,
            start,
            start_pos,
            false,
        );
        self.lookahead = token.clone();
        self.lookahead_end = self.cursor;
        Ok(token)
    }

    fn source(&self) -> &'a str {
        self.source
    }

    fn index(&self) -> usize {
        self.last_end.offset
    }
}

/// Line terminators: LF, CR, LS and PS
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// ES5 WhiteSpace: TAB, VT, FF, SP, NBSP, BOM and the Zs category
fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// ES5 IdentifierStart: `$`, `_` and Unicode letters
fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic() || ch == '$' || ch == '_';
    }
    // U+309B and U+309C are ID_Start but not XID_Start
    matches!(ch, '\u{309B}' | '\u{309C}') || unicode_ident::is_xid_start(ch)
}

/// ES5 IdentifierPart: adds combining marks, digits, connector
/// punctuation, ZWNJ and ZWJ
fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '$' || ch == '_';
    }
    matches!(ch, '\u{200C}' | '\u{200D}' | '\u{309B}' | '\u{309C}')
        || unicode_ident::is_xid_continue(ch)
}
