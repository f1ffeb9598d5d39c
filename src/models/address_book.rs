//! AddressBook: the in-memory collection of records.

use super::record::Record;
use crate::domain::{Field, RecordId};
use crate::error::{BookError, BookResult};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An ordered collection of [`Record`]s.
///
/// Lookups are linear scans by name in insertion order. Several records may
/// share a name; name-based operations act on the first of them. The live
/// record count belongs to each book.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: Vec<(RecordId, Record)>,
    next_id: u64,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and return the id assigned to it.
    ///
    /// Never fails. A record whose name is already present is stored
    /// alongside the existing one.
    pub fn add_record(&mut self, record: Record) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        tracing::info!(%id, name = %record.name(), "Record added");
        self.entries.push((id, record));
        id
    }

    /// First record named `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Mutable access to the first record named `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let idx = self.position(name)?;
        Some(&mut self.entries[idx].1)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, record)| record)
    }

    /// Remove the first record named `name` and return it.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if no record has that name. The book is unchanged.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let idx = self
            .position(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        let (id, record) = self.entries.remove(idx);
        tracing::info!(%id, name, remaining = self.entries.len(), "Record deleted");
        Ok(record)
    }

    /// Number of live records in this book.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> + '_ {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.entries.iter().map(|(_, record)| record)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(_, record)| record.name().matches(name))
    }
}

// Serialized as a plain array of records; ids are not part of the wire form.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for record in self.records() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add_record(record("John", "1234567890"));
        book.add_record(record("Jane", "9876543210"));

        assert_eq!(book.len(), 2);
        let jane = book.find("Jane").unwrap();
        assert_eq!(jane.phones()[0].as_str(), "9876543210");
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn test_ids_are_sequential_and_not_reused() {
        let mut book = AddressBook::new();
        let a = book.add_record(Record::new("A"));
        let b = book.add_record(Record::new("B"));
        assert!(a < b);

        book.delete("B").unwrap();
        let c = book.add_record(Record::new("C"));
        assert!(b < c);
        assert_eq!(book.get(a).unwrap().name().as_str(), "A");
        assert!(book.get(b).is_none());
    }

    #[test]
    fn test_same_name_records_coexist() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1111111111"));
        book.add_record(record("John", "2222222222"));
        assert_eq!(book.len(), 2);

        // First match wins for lookups and deletes
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "1111111111"
        );
        let removed = book.delete("John").unwrap();
        assert_eq!(removed.phones()[0].as_str(), "1111111111");
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "2222222222"
        );
    }

    #[test]
    fn test_delete_missing_name() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));

        let err = book.delete("Jane").unwrap_err();
        assert_eq!(err, BookError::RecordNotFound("Jane".to_string()));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_counts_are_per_book() {
        let mut first = AddressBook::new();
        let mut second = AddressBook::new();
        first.add_record(Record::new("John"));
        first.add_record(Record::new("Jane"));
        second.add_record(Record::new("Bob"));

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1112223333"
        );
    }

    #[test]
    fn test_iteration_order() {
        let book: AddressBook = ["C", "A", "B"].into_iter().map(Record::new).collect();
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);

        let ids: Vec<u64> = book.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn test_book_serialization() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", "9876543210"));
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"name": "Jane", "phones": ["9876543210"]}])
        );
    }
}
