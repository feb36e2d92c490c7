//! Source parsing and patching errors

use super::CoregenError;

/// Creates a syntax error at a 1-based line and column
pub fn syntax_error(path: impl Into<String>, line: usize, column: usize) -> CoregenError {
    CoregenError::SyntaxError {
        path: path.into(),
        line,
        column,
    }
}

/// Creates a target not found error
pub fn target_not_found(path: impl Into<String>, target: impl Into<String>) -> CoregenError {
    CoregenError::TargetNotFound {
        path: path.into(),
        target: target.into(),
    }
}

/// Creates an invalid insertion error
pub fn invalid_insertion(path: impl Into<String>, position: usize, length: usize) -> CoregenError {
    CoregenError::InvalidInsertion {
        path: path.into(),
        position,
        length,
    }
}
