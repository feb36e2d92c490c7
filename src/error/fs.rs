//! Project tree and file system errors

use super::CoregenError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> CoregenError {
    CoregenError::FileNotFound { path: path.into() }
}

/// Creates a file already exists error
pub fn already_exists(path: impl Into<String>) -> CoregenError {
    CoregenError::FileAlreadyExists { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CoregenError {
    CoregenError::IoError {
        message: message.into(),
    }
}
