//! Student Records
//!
//! Validation and in-memory management of student records, with export to a
//! pretty-printed JSON text file.

pub mod domain;
pub use domain::{
    Address, AddressField, AddressForm, Config, Field, FieldError, FieldErrorKind, Gender,
    Student, StudentForm, StudentId, ValidationErrors,
};

/// In-memory record storage and export.
pub mod storage;
pub use storage::{ExportError, RecordStore, StoreError};

pub mod session;
pub use session::{Mode, Session, SubmitError, Submitted};
