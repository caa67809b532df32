//! Named-field records built from table rows.

use crate::cell::Cell;

/// A table row as a mapping from column name to cell.
///
/// Keys keep the order of the header row. Inserting a duplicate key
/// overwrites the cell but keeps the key's first position, matching the
/// behavior of a dictionary built by zipping headers against a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Cell)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, overwriting the cell if the key already exists.
    pub fn insert(&mut self, name: String, cell: Cell) {
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = cell,
            None => self.fields.push((name, cell)),
        }
    }

    /// Looks up a field by exact column name.
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, cell)| cell)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates fields in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.fields.iter().map(|(key, cell)| (key.as_str(), cell))
    }

    /// Iterates column names in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    fn text_cell(col: u32, value: &str) -> Cell {
        Cell::new(col, CellValue::Text(value.to_string()))
    }

    #[test]
    fn test_insert_and_get() {
        let mut record = Record::new();
        record.insert("Name".to_string(), text_cell(0, "Ivanov"));
        record.insert("Role".to_string(), text_cell(1, "Engineer"));

        assert_eq!(record.len(), 2);
        assert_eq!(
            record.get("Role").map(|c| c.value.render()),
            Some("Engineer".to_string())
        );
        assert!(record.get("Salary").is_none());
    }

    #[test]
    fn test_duplicate_key_overwrites_but_keeps_position() {
        let mut record = Record::new();
        record.insert("A".to_string(), text_cell(0, "first"));
        record.insert("B".to_string(), text_cell(1, "middle"));
        record.insert("A".to_string(), text_cell(2, "second"));

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(
            record.get("A").map(|c| c.value.render()),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut record = Record::new();
        record.insert("Name".to_string(), text_cell(0, "x"));
        assert!(record.contains("Name"));
        assert!(!record.contains("name"));
    }
}
