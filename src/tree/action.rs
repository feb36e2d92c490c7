//! Action log for tree mutations
//!
//! Every successful `create`, `overwrite` and committed update session is
//! recorded so that a run can report what it changed, and so that a dry run
//! can show what it would have written.

/// Kind of mutation applied to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Overwrite,
    Update,
}

impl ActionKind {
    /// Label used in run summaries
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Create => "CREATE",
            ActionKind::Overwrite | ActionKind::Update => "UPDATE",
        }
    }
}

/// A single recorded mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub path: String,
    /// Size of the content after the mutation
    pub size: usize,
}

impl Action {
    pub fn new(kind: ActionKind, path: impl Into<String>, size: usize) -> Self {
        Self {
            kind,
            path: path.into(),
            size,
        }
    }
}

/// Collapse an action log into one entry per path
///
/// Paths keep the order in which they were first touched. A path created
/// during the run stays a `Create` whatever happened to it afterwards; the
/// reported size is the final one.
pub fn summarize(actions: &[Action]) -> Vec<Action> {
    let mut summary: Vec<Action> = Vec::new();
    for action in actions {
        match summary.iter_mut().find(|a| a.path == action.path) {
            Some(existing) => {
                existing.size = action.size;
                if existing.kind != ActionKind::Create {
                    existing.kind = action.kind;
                }
            }
            None => summary.push(action.clone()),
        }
    }
    summary
}
