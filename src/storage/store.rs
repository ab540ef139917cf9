//! In-memory store of student records
//!
//! The [`RecordStore`] knows nothing about forms or the terminal. It keeps
//! validated [`Student`]s in insertion order and enforces that student IDs
//! are unique.

use thiserror::Error;
use tracing::instrument;

use crate::domain::{Student, StudentId};

/// An in-memory, insertion-ordered collection of students.
///
/// There are no secondary indices; lookups scan the list. The store lives for
/// as long as its owner and is never persisted, only exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    students: Vec<Student>,
}

/// Errors that can occur when mutating or exporting a [`RecordStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A student with this ID is already stored.
    #[error("Student ID {0} already exists")]
    DuplicateKey(StudentId),
    /// No student with this ID is stored.
    #[error("student {0} not found")]
    NotFound(StudentId),
    /// There is nothing to export.
    #[error("No student records to save!")]
    EmptyStore,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// The students, in the order they were added.
    #[must_use]
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// The number of stored students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns `true` if no students are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Retrieves a student by ID.
    #[must_use]
    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id() == id)
    }

    /// Returns `true` if a student with this ID is stored.
    #[must_use]
    pub fn contains(&self, id: &StudentId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &StudentId) -> Option<usize> {
        self.students.iter().position(|student| student.id() == id)
    }

    /// Appends a student.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a student with the same ID is
    /// already stored. The store is left unchanged.
    #[instrument(level = "debug", skip_all, fields(id = %student.id()))]
    pub fn add(&mut self, student: Student) -> Result<(), StoreError> {
        if self.contains(student.id()) {
            tracing::debug!("rejected duplicate student");
            return Err(StoreError::DuplicateKey(student.id().clone()));
        }

        self.students.push(student);
        tracing::info!(total = self.students.len(), "added student");
        Ok(())
    }

    /// Replaces the student stored under `original_id` with `student`,
    /// keeping its position.
    ///
    /// The replacement may carry a different ID, as long as that ID is not
    /// used by another student.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if no student has `original_id`.
    /// - [`StoreError::DuplicateKey`] if the replacement's ID belongs to a
    ///   different stored student.
    ///
    /// The store is left unchanged on error.
    #[instrument(level = "debug", skip(self, student), fields(id = %student.id()))]
    pub fn update(&mut self, original_id: &StudentId, student: Student) -> Result<(), StoreError> {
        let Some(index) = self.position(original_id) else {
            tracing::warn!("no student to update");
            return Err(StoreError::NotFound(original_id.clone()));
        };

        if student.id() != original_id && self.contains(student.id()) {
            return Err(StoreError::DuplicateKey(student.id().clone()));
        }

        self.students[index] = student;
        tracing::info!("updated student");
        Ok(())
    }

    /// Removes the student with this ID, returning it.
    ///
    /// Does nothing if no such student is stored.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &StudentId) -> Option<Student> {
        let index = self.position(id)?;
        let removed = self.students.remove(index);
        tracing::info!(total = self.students.len(), "deleted student");
        Some(removed)
    }

    /// Serializes every student, in order, as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyStore`] if there are no students.
    ///
    /// # Panics
    ///
    /// Panics if JSON serialization fails (which should never happen for this
    /// data structure).
    pub fn export(&self) -> Result<String, StoreError> {
        if self.is_empty() {
            return Err(StoreError::EmptyStore);
        }

        Ok(serde_json::to_string_pretty(&self.students)
            .expect("student records always serialize"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        student::tests::{jane, student},
        StudentForm,
    };

    fn id(s: &str) -> StudentId {
        StudentId::try_from(s).unwrap()
    }

    fn store_of(ids: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for (i, s) in ids.iter().enumerate() {
            store.add(student(s, &format!("Student{i}"))).unwrap();
        }
        store
    }

    fn ids(store: &RecordStore) -> Vec<&str> {
        store.list().iter().map(|s| s.id().as_str()).collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = store_of(&["ccc333", "aaa111", "bbb222"]);
        assert_eq!(ids(&store), ["ccc333", "aaa111", "bbb222"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicate_add_fails_without_mutating() {
        let mut store = RecordStore::new();
        store.add(jane().into_student().unwrap()).unwrap();
        let before = store.clone();

        let again = StudentForm {
            first_name: "Someone".to_string(),
            student_phone: "1234567890".to_string(),
            ..jane()
        }
        .into_student()
        .unwrap();

        assert_eq!(
            store.add(again),
            Err(StoreError::DuplicateKey(id("abc123")))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn ids_are_case_sensitive() {
        let mut store = store_of(&["abc123"]);
        assert!(store.add(student("ABC123", "Upper")).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = store_of(&["aaa111", "bbb222", "ccc333"]);

        let replacement = student("bbb222", "Replaced");
        store.update(&id("bbb222"), replacement.clone()).unwrap();

        assert_eq!(ids(&store), ["aaa111", "bbb222", "ccc333"]);
        assert_eq!(store.list()[1], replacement);
        assert_eq!(store.get(&id("bbb222")).unwrap().first_name(), "Replaced");
    }

    #[test]
    fn update_may_change_the_id() {
        let mut store = store_of(&["aaa111", "bbb222"]);

        store
            .update(&id("aaa111"), student("zzz999", "Renamed"))
            .unwrap();

        assert_eq!(ids(&store), ["zzz999", "bbb222"]);
        assert!(!store.contains(&id("aaa111")));
    }

    #[test]
    fn update_rejects_id_of_another_student() {
        let mut store = store_of(&["aaa111", "bbb222"]);
        let before = store.clone();

        assert_eq!(
            store.update(&id("aaa111"), student("bbb222", "Clash")),
            Err(StoreError::DuplicateKey(id("bbb222")))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = store_of(&["aaa111"]);
        let before = store.clone();

        assert_eq!(
            store.update(&id("zzz999"), student("zzz999", "Ghost")),
            Err(StoreError::NotFound(id("zzz999")))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_matching_student() {
        let mut store = store_of(&["aaa111", "bbb222", "ccc333"]);

        let removed = store.delete(&id("bbb222")).unwrap();

        assert_eq!(removed.id(), &id("bbb222"));
        assert_eq!(ids(&store), ["aaa111", "ccc333"]);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = store_of(&["aaa111", "bbb222"]);
        let before = store.clone();

        assert!(store.delete(&id("zzz999")).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn export_empty_store_fails() {
        assert_eq!(RecordStore::new().export(), Err(StoreError::EmptyStore));
    }

    #[test]
    fn export_round_trips() {
        let store = store_of(&["ccc333", "aaa111"]);

        let payload = store.export().unwrap();
        let parsed: Vec<Student> = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed, store.list());
    }

    #[test]
    fn export_is_indented_by_two_spaces() {
        let mut store = RecordStore::new();
        store.add(jane().into_student().unwrap()).unwrap();

        let payload = store.export().unwrap();
        let expected = r#"[
  {
    "studentId": "abc123",
    "firstName": "Jane",
    "lastName": "",
    "studentEmail": "jane@x.com",
    "studentPhone": "9876543210",
    "gender": "female",
    "address": {
      "fullAddress": "12 Main St",
      "town": "Springfield",
      "pincode": "123456"
    }
  }
]"#;
        assert_eq!(payload, expected);
    }
}
