use std::{fmt, ops::Deref, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

static STUDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3}[0-9]{3}$").expect("student id pattern is valid"));

/// Returns `true` if the string is a well-formed student ID.
///
/// A student ID is three ASCII letters followed by three digits, for example
/// `abc123` or `XYZ001`. Letter case is preserved and significant.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    STUDENT_ID.is_match(s)
}

/// The unique key of a [`Student`](super::Student).
///
/// Format: `{LETTERS}{DIGITS}` where `LETTERS` is exactly three ASCII letters
/// (either case) and `DIGITS` is exactly three decimal digits.
///
/// Examples: `abc123`, `XYZ001`, `Kit042`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Creates a new `StudentId` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStudentIdError` if the string is not three letters
    /// followed by three digits.
    pub fn new(s: String) -> Result<Self, InvalidStudentIdError> {
        if is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidStudentIdError(s))
        }
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error returned when a string is not a well-formed student ID.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid student ID '{0}': expected three letters followed by three digits (e.g. abc123)")]
pub struct InvalidStudentIdError(String);

impl TryFrom<String> for StudentId {
    type Error = InvalidStudentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StudentId {
    type Error = InvalidStudentIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for StudentId {
    type Err = InvalidStudentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for StudentId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for StudentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StudentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
