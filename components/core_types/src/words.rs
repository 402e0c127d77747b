//! Identifier classes that strict mode treats specially.

/// Words reserved only in strict-mode code (ES5 7.6.1.2, plus `let`).
pub const STRICT_MODE_RESERVED_WORDS: [&str; 9] = [
    "implements",
    "interface",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "let",
];

/// True for `eval` and `arguments`, which strict code may not bind or assign.
pub fn is_restricted_word(name: &str) -> bool {
    matches!(name, "eval" | "arguments")
}

/// True for a word reserved only in strict-mode code.
pub fn is_strict_mode_reserved_word(name: &str) -> bool {
    STRICT_MODE_RESERVED_WORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_words() {
        assert!(is_restricted_word("eval"));
        assert!(is_restricted_word("arguments"));
        assert!(!is_restricted_word("Eval"));
        assert!(!is_restricted_word("args"));
    }

    #[test]
    fn test_strict_mode_reserved_words() {
        for word in STRICT_MODE_RESERVED_WORDS {
            assert!(is_strict_mode_reserved_word(word));
        }
        assert!(!is_strict_mode_reserved_word("class"));
        assert!(!is_strict_mode_reserved_word("foo"));
    }
}
