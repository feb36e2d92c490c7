//! Update sessions over a single file

use crate::error::{self, Result};

/// A pending set of insertions against one file's original content
///
/// Offsets always refer to the content read when the session was opened.
/// Insertions at the same offset land in the order they were recorded.
#[derive(Debug, Clone)]
pub struct UpdateRecorder {
    path: String,
    original: Vec<u8>,
    insertions: Vec<(usize, String)>,
}

impl UpdateRecorder {
    pub(crate) fn new(path: String, original: Vec<u8>) -> Self {
        Self {
            path,
            original,
            insertions: Vec::new(),
        }
    }

    /// Record text to insert to the left of `position`
    pub fn insert_left(&mut self, position: usize, text: impl Into<String>) -> &mut Self {
        self.insertions.push((position, text.into()));
        self
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    /// Validate every offset and produce the updated content
    pub(crate) fn finish(self) -> Result<(String, Vec<u8>)> {
        let length = self.original.len();
        let text = std::str::from_utf8(&self.original).ok();

        for (position, _) in &self.insertions {
            let on_boundary = text.is_none_or(|t| t.is_char_boundary(*position));
            if *position > length || !on_boundary {
                return Err(error::invalid_insertion(&self.path, *position, length));
            }
        }

        let mut ordered: Vec<&(usize, String)> = self.insertions.iter().collect();
        // stable: equal offsets keep recording order
        ordered.sort_by_key(|(position, _)| *position);

        let added: usize = ordered.iter().map(|(_, text)| text.len()).sum();
        let mut content = Vec::with_capacity(length + added);
        let mut cursor = 0;
        for (position, text) in ordered {
            content.extend_from_slice(&self.original[cursor..*position]);
            content.extend_from_slice(text.as_bytes());
            cursor = *position;
        }
        content.extend_from_slice(&self.original[cursor..]);

        Ok((self.path, content))
    }
}
