//! The form controller for a single editing session.
//!
//! A [`Session`] owns a [`RecordStore`] and remembers whether the form is
//! being used to create a new student or to edit an existing one. Submitting
//! a form validates it, checks for duplicate IDs when creating, and then adds
//! or updates the record.

use thiserror::Error;
use tracing::instrument;

use crate::{
    domain::{Field, FieldError, FieldErrorKind, StudentForm, StudentId, ValidationErrors},
    storage::{RecordStore, StoreError},
};

/// What a submitted form will do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// The form creates a new student.
    #[default]
    Creating,
    /// The form replaces the student that had `original_id` when editing
    /// started.
    Editing {
        /// ID of the student being edited.
        original_id: StudentId,
    },
}

/// The result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// A new student was appended.
    Added(StudentId),
    /// An existing student was replaced.
    Updated(StudentId),
}

/// Why a submit was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more fields failed, including a student ID that belongs to
    /// another stored student.
    #[error("{0}")]
    Invalid(ValidationErrors),
    /// The store rejected the change.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// The field errors to display next to the form, if any.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Store(_) => None,
        }
    }
}

fn duplicate_id() -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    errors.insert(
        Field::StudentId,
        FieldError::new(FieldErrorKind::DuplicateKey, "Student ID already exists!"),
    );
    errors
}

/// A form session over an in-memory store of students.
#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
    mode: Mode,
}

impl Session {
    /// Starts a session with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// What the next submit will do.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns `true` if an existing student is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Validates the form and applies it to the store.
    ///
    /// When creating, the student is appended. When editing, the student being
    /// edited is replaced in place and the session goes back to creating.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Invalid`] if any field fails validation, or if the
    ///   student ID belongs to another stored student. The store and the mode
    ///   are unchanged.
    /// - [`SubmitError::Store`] if the edited student no longer exists.
    #[instrument(level = "debug", skip_all, fields(mode = ?self.mode))]
    pub fn submit(&mut self, form: StudentForm) -> Result<Submitted, SubmitError> {
        let student = form.into_student().map_err(SubmitError::Invalid)?;
        let id = student.id().clone();

        let taken = match &self.mode {
            Mode::Creating => self.store.contains(&id),
            Mode::Editing { original_id } => &id != original_id && self.store.contains(&id),
        };
        if taken {
            tracing::debug!(%id, "student id already taken");
            return Err(SubmitError::Invalid(duplicate_id()));
        }

        match &self.mode {
            Mode::Creating => {
                self.store.add(student)?;
                Ok(Submitted::Added(id))
            }
            Mode::Editing { original_id } => {
                self.store.update(original_id, student)?;
                self.mode = Mode::Creating;
                Ok(Submitted::Updated(id))
            }
        }
    }

    /// Starts editing the student with this ID.
    ///
    /// Returns the form prefilled with the student's current values, or `None`
    /// (leaving the mode unchanged) if there is no such student.
    pub fn begin_edit(&mut self, id: &StudentId) -> Option<StudentForm> {
        let form = StudentForm::from(self.store.get(id)?);
        tracing::debug!(%id, "editing student");
        self.mode = Mode::Editing {
            original_id: id.clone(),
        };
        Some(form)
    }

    /// Abandons any edit in progress.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Creating;
    }

    /// Deletes the student with this ID, if present.
    ///
    /// Deleting the student currently being edited also cancels the edit.
    pub fn delete(&mut self, id: &StudentId) -> bool {
        if matches!(&self.mode, Mode::Editing { original_id } if original_id == id) {
            self.cancel_edit();
        }
        self.store.delete(id).is_some()
    }

    /// Serializes every student for download.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyStore`] if there are no students.
    pub fn export(&self) -> Result<String, StoreError> {
        self.store.export()
    }
}
