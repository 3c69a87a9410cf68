use super::QueryResult;

/// Successful lookups retained for replay, with a browsing cursor.
///
/// Entries are unique per (domain, kind) and keep their original insertion
/// position. `cursor() == None` means the user is not browsing.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<QueryResult>,
    cursor: Option<usize>,
}

impl History {
    /// Appends `result` unless an entry with the same (domain, kind) exists.
    /// Returns `false` for duplicates.
    pub fn insert(&mut self, result: QueryResult) -> bool {
        if self.entries.iter().any(|entry| entry.same_lookup(&result)) {
            return false;
        }
        self.entries.push(result);
        true
    }

    /// Moves towards older entries. From "not browsing" it lands on the most
    /// recent entry; it never moves past the first one.
    pub fn back(&mut self) -> Option<&QueryResult> {
        if self.entries.is_empty() {
            return None;
        }

        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index)
    }

    /// Moves towards newer entries. Stepping past the last entry leaves
    /// browsing and returns `None`.
    pub fn forward(&mut self) -> Option<&QueryResult> {
        let index = self.cursor?;
        if index + 1 < self.entries.len() {
            self.cursor = Some(index + 1);
            self.entries.get(index + 1)
        } else {
            self.cursor = None;
            None
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn current(&self) -> Option<&QueryResult> {
        self.cursor.and_then(|index| self.entries.get(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryResult> {
        self.entries.iter()
    }
}
