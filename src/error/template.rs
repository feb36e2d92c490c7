//! Template rendering and post-generation task errors

use super::CoregenError;

/// Creates a template render failed error
pub fn render_failed(template: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::TemplateFailed {
        template: template.into(),
        reason: reason.into(),
    }
}

/// Creates a task failed error
pub fn task_failed(command: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::TaskFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
