//! Unit tests for strict-mode word classes

use core_types::{is_restricted_word, is_strict_mode_reserved_word};

#[cfg(test)]
mod word_tests {
    use super::*;

    #[test]
    fn test_eval_and_arguments_are_restricted() {
        assert!(is_restricted_word("eval"));
        assert!(is_restricted_word("arguments"));
    }

    #[test]
    fn test_keywords_are_not_strict_reserved() {
        assert!(!is_strict_mode_reserved_word("var"));
        assert!(!is_strict_mode_reserved_word("function"));
    }

    #[test]
    fn test_yield_and_let_are_strict_reserved() {
        assert!(is_strict_mode_reserved_word("yield"));
        assert!(is_strict_mode_reserved_word("let"));
        assert!(is_strict_mode_reserved_word("implements"));
    }
}
