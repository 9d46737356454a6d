//! In-memory navigation history with push and replace transitions

/// Ordered list of visited paths plus a cursor, like the browser's session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Fresh history sitting at "/"
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_string()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a new entry, dropping anything forward of the cursor
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor += 1;
    }

    /// Overwrite the current entry without growing the stack
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    /// Returns false when already at the oldest entry
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns false when already at the newest entry
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
