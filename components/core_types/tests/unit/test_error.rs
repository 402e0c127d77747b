//! Unit tests for ErrorMessage and SyntaxError

use core_types::{ErrorMessage, SourcePosition, SyntaxError};

#[cfg(test)]
mod error_message_tests {
    use super::*;

    #[test]
    fn test_every_template_is_nonempty() {
        let all = [
            ErrorMessage::UnexpectedToken,
            ErrorMessage::UnexpectedIllegalToken,
            ErrorMessage::UnexpectedNumber,
            ErrorMessage::UnexpectedString,
            ErrorMessage::UnexpectedIdentifier,
            ErrorMessage::UnexpectedReservedWord,
            ErrorMessage::UnexpectedEos,
            ErrorMessage::NewlineAfterThrow,
            ErrorMessage::InvalidRegularExpression,
            ErrorMessage::UnterminatedRegExp,
            ErrorMessage::InvalidLhsInAssignment,
            ErrorMessage::InvalidLhsInForIn,
            ErrorMessage::MultipleDefaultsInSwitch,
            ErrorMessage::NoCatchOrFinally,
            ErrorMessage::UnknownLabel,
            ErrorMessage::LabelRedeclaration,
            ErrorMessage::IllegalContinue,
            ErrorMessage::IllegalBreak,
            ErrorMessage::IllegalReturn,
            ErrorMessage::StrictModeWith,
            ErrorMessage::StrictCatchVariable,
            ErrorMessage::StrictVarName,
            ErrorMessage::StrictParamName,
            ErrorMessage::StrictParamDupe,
            ErrorMessage::StrictFunctionName,
            ErrorMessage::StrictOctalLiteral,
            ErrorMessage::StrictDelete,
            ErrorMessage::StrictDuplicateProperty,
            ErrorMessage::AccessorDataProperty,
            ErrorMessage::AccessorGetSet,
            ErrorMessage::StrictLhsAssignment,
            ErrorMessage::StrictLhsPostfix,
            ErrorMessage::StrictLhsPrefix,
            ErrorMessage::StrictReservedWord,
            ErrorMessage::InvalidPropertyName,
            ErrorMessage::NestingTooDeep,
        ];
        for message in all {
            assert!(!message.template().is_empty(), "{:?}", message);
        }
    }

    #[test]
    fn test_unknown_label_substitution() {
        assert_eq!(
            ErrorMessage::UnknownLabel.format(&["done"]),
            "Undefined label 'done'"
        );
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(
            ErrorMessage::IllegalBreak.format(&["x", "y"]),
            "Illegal break statement"
        );
    }
}

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    #[test]
    fn test_syntax_error_fields() {
        let position = SourcePosition {
            line: 1,
            column: 5,
            offset: 4,
        };
        let error = SyntaxError::new(ErrorMessage::UnexpectedToken, &["{"], position);
        assert_eq!(error.message, ErrorMessage::UnexpectedToken);
        assert_eq!(error.description, "Unexpected token {");
        assert_eq!(error.position, position);
    }

    #[test]
    fn test_syntax_error_is_std_error() {
        let error = SyntaxError::new(ErrorMessage::UnexpectedEos, &[], SourcePosition::START);
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert_eq!(
            boxed.to_string(),
            "Line 1, column 1: Unexpected end of input"
        );
    }
}
