//! Regular expression literal validation
//!
//! Checks that a `/pattern/flags` literal is a well-formed ES5 pattern with
//! valid flags. Only syntax is checked; nothing is compiled.

use thiserror::Error;

/// Why a regular expression literal was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegExpError {
    /// Literal is not of the form `/pattern/flags`
    #[error("malformed regular expression literal")]
    Malformed,
    /// Flag other than `g`, `i` or `m`
    #[error("invalid flag '{0}'")]
    InvalidFlag(char),
    /// Flag given twice
    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),
    /// `(` without a matching `)`
    #[error("unterminated group")]
    UnterminatedGroup,
    /// `)` without a matching `(`
    #[error("unmatched ')'")]
    UnmatchedParen,
    /// `[` without a matching `]`
    #[error("unterminated character class")]
    UnterminatedClass,
    /// Class range whose start is above its end
    #[error("range out of order in character class")]
    RangeOutOfOrder,
    /// Quantifier that follows nothing quantifiable
    #[error("nothing to repeat")]
    NothingToRepeat,
    /// `{n,m}` with n greater than m
    #[error("numbers out of order in {{}} quantifier")]
    QuantifierOutOfOrder,
    /// Pattern ends with `\`
    #[error("\\ at end of pattern")]
    TrailingBackslash,
    /// Groups nested past [`MAX_GROUP_DEPTH`]
    #[error("groups nested too deeply")]
    GroupsTooDeep,
}

/// Deepest group nesting a pattern may use
pub const MAX_GROUP_DEPTH: usize = 256;

/// Validate a full regular expression literal such as `/a+b/gi`
pub fn validate_regexp(literal: &str) -> Result<(), RegExpError> {
    let body = literal.strip_prefix('/').ok_or(RegExpError::Malformed)?;
    let last_slash = body.rfind('/').ok_or(RegExpError::Malformed)?;
    validate_flags(&body[last_slash + 1..])?;
    validate_pattern(&body[..last_slash])
}

/// Validate a flag string: `g`, `i` and `m`, each at most once
pub fn validate_flags(flags: &str) -> Result<(), RegExpError> {
    let mut seen = [false; 3];
    for flag in flags.chars() {
        let slot = match flag {
            'g' => 0,
            'i' => 1,
            'm' => 2,
            other => return Err(RegExpError::InvalidFlag(other)),
        };
        if seen[slot] {
            return Err(RegExpError::DuplicateFlag(flag));
        }
        seen[slot] = true;
    }
    Ok(())
}

/// Validate the pattern between the slashes
pub fn validate_pattern(pattern: &str) -> Result<(), RegExpError> {
    let mut validator = PatternValidator {
        chars: pattern.chars().collect(),
        position: 0,
        depth: 0,
    };
    validator.disjunction()?;
    match validator.peek() {
        None => Ok(()),
        Some(')') => Err(RegExpError::UnmatchedParen),
        // disjunction only stops at `)` or end of input
        Some(_) => Err(RegExpError::Malformed),
    }
}

struct PatternValidator {
    chars: Vec<char>,
    position: usize,
    depth: usize,
}

impl PatternValidator {
    fn disjunction(&mut self) -> Result<(), RegExpError> {
        self.alternative()?;
        while self.match_char('|') {
            self.alternative()?;
        }
        Ok(())
    }

    fn alternative(&mut self) -> Result<(), RegExpError> {
        while let Some(ch) = self.peek() {
            if ch == '|' || ch == ')' {
                break;
            }
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), RegExpError> {
        let quantifiable = match self.peek() {
            Some('^' | '$') => {
                self.advance();
                false
            }
            Some('\\') if matches!(self.peek_next(), Some('b' | 'B')) => {
                self.position += 2;
                false
            }
            Some('*' | '+' | '?') => return Err(RegExpError::NothingToRepeat),
            Some('{') if self.quantifier_ahead() => return Err(RegExpError::NothingToRepeat),
            _ => {
                self.atom()?;
                true
            }
        };
        if self.quantifier()? && !quantifiable {
            return Err(RegExpError::NothingToRepeat);
        }
        Ok(())
    }

    fn atom(&mut self) -> Result<(), RegExpError> {
        match self.advance() {
            Some('(') => {
                if self.peek() == Some('?') {
                    match self.peek_next() {
                        Some(':' | '=' | '!') => self.position += 2,
                        _ => return Err(RegExpError::NothingToRepeat),
                    }
                }
                if self.depth >= MAX_GROUP_DEPTH {
                    return Err(RegExpError::GroupsTooDeep);
                }
                self.depth += 1;
                let body = self.disjunction();
                self.depth -= 1;
                body?;
                if !self.match_char(')') {
                    return Err(RegExpError::UnterminatedGroup);
                }
                Ok(())
            }
            Some('[') => self.class(),
            Some('\\') => self.escape().map(|_| ()),
            Some(_) => Ok(()),
            None => Err(RegExpError::Malformed),
        }
    }

    /// Parses a quantifier if one follows; returns whether it did
    fn quantifier(&mut self) -> Result<bool, RegExpError> {
        match self.peek() {
            Some('*' | '+' | '?') => {
                self.advance();
            }
            Some('{') if self.quantifier_ahead() => {
                self.advance();
                let min = self.decimal();
                let max = if self.match_char(',') {
                    self.decimal()
                } else {
                    min
                };
                self.advance();
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(RegExpError::QuantifierOutOfOrder);
                    }
                }
            }
            _ => return Ok(false),
        }
        self.match_char('?');
        Ok(true)
    }

    /// True if the text at the cursor is `{n}`, `{n,}` or `{n,m}`
    fn quantifier_ahead(&self) -> bool {
        let rest = &self.chars[self.position..];
        if rest.first() != Some(&'{') {
            return false;
        }
        let mut i = 1;
        let digits_start = i;
        while rest.get(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        if i == digits_start {
            return false;
        }
        if rest.get(i) == Some(&',') {
            i += 1;
            while rest.get(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
        }
        rest.get(i) == Some(&'}')
    }

    /// Reads decimal digits; `None` if there are none. Saturates on overflow.
    fn decimal(&mut self) -> Option<u64> {
        let mut value: Option<u64> = None;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            self.advance();
            value = Some(
                value
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(u64::from(digit)),
            );
        }
        value
    }

    fn class(&mut self) -> Result<(), RegExpError> {
        self.match_char('^');
        loop {
            let start = match self.peek() {
                None => return Err(RegExpError::UnterminatedClass),
                Some(']') => {
                    self.advance();
                    return Ok(());
                }
                _ => self.class_atom()?,
            };
            if self.peek() == Some('-') && !matches!(self.peek_next(), Some(']') | None) {
                self.advance();
                let end = self.class_atom()?;
                if let (Some(start), Some(end)) = (start, end) {
                    if start > end {
                        return Err(RegExpError::RangeOutOfOrder);
                    }
                }
            }
        }
    }

    /// One class member; `None` for a class escape such as `\d`
    fn class_atom(&mut self) -> Result<Option<u32>, RegExpError> {
        match self.advance() {
            None => Err(RegExpError::UnterminatedClass),
            Some('\\') => {
                if self.peek() == Some('b') {
                    self.advance();
                    return Ok(Some(0x08));
                }
                self.escape()
            }
            Some(ch) => Ok(Some(ch as u32)),
        }
    }

    /// Reads the escape after `\`; returns the code point it denotes, or
    /// `None` for a character-class escape or back-reference
    fn escape(&mut self) -> Result<Option<u32>, RegExpError> {
        let ch = self.advance().ok_or(RegExpError::TrailingBackslash)?;
        let value = match ch {
            'd' | 'D' | 's' | 'S' | 'w' | 'W' => None,
            'n' => Some(0x0A),
            'r' => Some(0x0D),
            't' => Some(0x09),
            'v' => Some(0x0B),
            'f' => Some(0x0C),
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => Some(0),
            '1'..='9' => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                None
            }
            'c' => match self.peek() {
                Some(letter) if letter.is_ascii_alphabetic() => {
                    self.advance();
                    Some(letter as u32 % 32)
                }
                _ => Some('c' as u32),
            },
            'x' => Some(self.hex_escape(2).unwrap_or('x' as u32)),
            'u' => Some(self.hex_escape(4).unwrap_or('u' as u32)),
            other => Some(other as u32),
        };
        Ok(value)
    }

    fn hex_escape(&mut self, digits: usize) -> Option<u32> {
        let hex: String = self.chars.get(self.position..self.position + digits)?.iter().collect();
        let value = u32::from_str_radix(&hex, 16).ok()?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        self.position += digits;
        Some(value)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_literals() {
        for literal in [
            "/a/",
            "/ab/g",
            "/a|b|/gim",
            "/(?:x)+?/",
            "/(?=a)(?!b)c/",
            "/[a-z0-9_]+/i",
            "/[^\\]]/",
            "/[\\d-z]/",
            "/a{2,3}b{4}c{5,}/",
            "/a{/",
            "/x{a}/",
            "/}]/",
            "/\\bword\\B/",
            "/^$/m",
            "/\\u0041\\x41\\cJ\\0/",
            "/(a)\\1/",
            "//",
        ] {
            assert_eq!(validate_regexp(literal), Ok(()), "{}", literal);
        }
    }

    #[test]
    fn test_invalid_flags() {
        assert_eq!(validate_regexp("/a/gg"), Err(RegExpError::DuplicateFlag('g')));
        assert_eq!(validate_regexp("/a/y"), Err(RegExpError::InvalidFlag('y')));
    }

    #[test]
    fn test_unbalanced_groups() {
        assert_eq!(validate_regexp("/(/"), Err(RegExpError::UnterminatedGroup));
        assert_eq!(validate_regexp("/a)/"), Err(RegExpError::UnmatchedParen));
        assert_eq!(validate_regexp("/[a/"), Err(RegExpError::UnterminatedClass));
    }

    #[test]
    fn test_nothing_to_repeat() {
        for literal in ["/*/", "/a**/", "/+a/", "/?/", "/a|*/", "/^*/", "/{2}/", "/a{2}{3}/"] {
            assert_eq!(
                validate_regexp(literal),
                Err(RegExpError::NothingToRepeat),
                "{}",
                literal
            );
        }
    }

    #[test]
    fn test_out_of_order() {
        assert_eq!(validate_regexp("/[z-a]/"), Err(RegExpError::RangeOutOfOrder));
        assert_eq!(
            validate_regexp("/a{3,2}/"),
            Err(RegExpError::QuantifierOutOfOrder)
        );
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(validate_pattern("a\\"), Err(RegExpError::TrailingBackslash));
    }

    #[test]
    fn test_group_depth_limit() {
        let nested = |n: usize| format!("{}a{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(validate_pattern(&nested(MAX_GROUP_DEPTH)), Ok(()));
        assert_eq!(
            validate_pattern(&nested(10_000)),
            Err(RegExpError::GroupsTooDeep)
        );
    }
}
