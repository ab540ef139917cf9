//! Domain models for student records.
//!
//! This module contains the core domain types including students, their
//! addresses, validated student IDs, and the field validator.

/// Student and address records, validated and raw.
pub mod student;
pub use student::{Address, AddressForm, Gender, InvalidGenderError, Student, StudentForm};

mod config;
pub use config::{Config, ConfigError};

/// Validated student identifiers.
pub mod student_id;
pub use student_id::{InvalidStudentIdError, StudentId};

/// Typed form field paths.
pub mod field;
pub use field::{AddressField, Field};

/// Field-by-field validation of a [`StudentForm`].
pub mod validation;
pub use validation::{FieldError, FieldErrorKind, ValidationErrors};
