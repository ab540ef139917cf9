use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;

use crate::domain::{student_id, AddressField, Field, Gender, StudentForm};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));
static PINCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("pincode pattern is valid"));

/// Returns `true` if the string looks like an email address (`local@domain.tld`,
/// no whitespace, exactly one `@`).
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Returns `true` if the string is exactly ten ASCII digits.
#[must_use]
pub fn is_valid_phone(s: &str) -> bool {
    PHONE.is_match(s)
}

/// Returns `true` if the string is exactly six ASCII digits.
#[must_use]
pub fn is_valid_pincode(s: &str) -> bool {
    PINCODE.is_match(s)
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// A required field was empty or whitespace.
    RequiredFieldMissing,
    /// A field was filled in but did not match its expected format.
    FormatMismatch,
    /// The student ID is already taken by another record.
    DuplicateKey,
}

/// A single failing field, with the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    kind: FieldErrorKind,
    message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The kind of failure.
    #[must_use]
    pub const fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    /// A user-facing description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The outcome of validating a [`StudentForm`]: every failing field, keyed by
/// field.
///
/// An empty map means the form is valid. Iteration is in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The error recorded for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Removes the error for a field, e.g. once the user starts editing it.
    ///
    /// Returns the removed error, if there was one.
    pub fn clear(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// Iterates over the failing fields in form order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn required(&mut self, field: Field, message: &str) {
        self.insert(
            field,
            FieldError::new(FieldErrorKind::RequiredFieldMissing, message),
        );
    }

    fn format(&mut self, field: Field, message: &str) {
        self.insert(field, FieldError::new(FieldErrorKind::FormatMismatch, message));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl StudentForm {
    /// Checks every field in a single pass.
    ///
    /// Required fields are checked for blankness (after trimming) first. Only
    /// a non-blank value is checked against its format, against the value as
    /// entered.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if is_blank(&self.student_id) {
            errors.required(Field::StudentId, "Student ID is required");
        } else if !student_id::is_valid(&self.student_id) {
            errors.format(Field::StudentId, "Student Id Format abc123");
        }

        if is_blank(&self.first_name) {
            errors.required(Field::FirstName, "First Name is required");
        }

        if is_blank(&self.student_email) {
            errors.required(Field::StudentEmail, "Email is required");
        } else if !is_valid_email(&self.student_email) {
            errors.format(Field::StudentEmail, "Please enter a valid email");
        }

        if is_blank(&self.student_phone) {
            errors.required(Field::StudentPhone, "Phone number is required");
        } else if !is_valid_phone(&self.student_phone) {
            errors.format(Field::StudentPhone, "Phone number must be 10 digits");
        }

        if is_blank(&self.gender) {
            errors.required(Field::Gender, "Gender is required");
        } else if self.gender.parse::<Gender>().is_err() {
            errors.format(Field::Gender, "Gender must be male, female or other");
        }

        if is_blank(&self.address.full_address) {
            errors.required(
                Field::Address(AddressField::FullAddress),
                "Address is required",
            );
        }

        if is_blank(&self.address.town) {
            errors.required(Field::Address(AddressField::Town), "City is required");
        }

        let pincode = Field::Address(AddressField::Pincode);
        if is_blank(&self.address.pincode) {
            errors.required(pincode, "Pincode is required");
        } else if !is_valid_pincode(&self.address.pincode) {
            errors.format(pincode, "Pincode must be 6 digits");
        }

        if !errors.is_empty() {
            tracing::debug!(failing = errors.len(), "student form failed validation");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::student::tests::jane;

    fn kind_of(form: &StudentForm, field: Field) -> Option<FieldErrorKind> {
        form.validate().get(field).map(FieldError::kind)
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = jane().validate();
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn last_name_is_unconstrained() {
        let mut form = jane();
        form.last_name = "  ".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = StudentForm::default().validate();

        let failing: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        let required: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(failing, required);
        assert!(
            errors
                .iter()
                .all(|(_, e)| e.kind() == FieldErrorKind::RequiredFieldMissing)
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut form = jane();
        form.first_name = " \t".to_string();
        form.address.town = "\n".to_string();

        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::FirstName).unwrap().message(),
            "First Name is required"
        );
        assert_eq!(
            errors
                .get(Field::Address(AddressField::Town))
                .unwrap()
                .message(),
            "City is required"
        );
    }

    #[test_case("ab12"; "too short")]
    #[test_case("ABC1234"; "too long")]
    #[test_case("123ABC"; "digits first")]
    #[test_case(" abc123"; "padded")]
    fn malformed_student_id(id: &str) {
        let form = StudentForm {
            student_id: id.to_string(),
            ..jane()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        let error = errors.get(Field::StudentId).unwrap();
        assert_eq!(error.kind(), FieldErrorKind::FormatMismatch);
        assert_eq!(error.message(), "Student Id Format abc123");
    }

    #[test_case("jane@x.com", true; "simple")]
    #[test_case("first.last@sub.example.org", true; "dotted")]
    #[test_case("jane@x", false; "no tld")]
    #[test_case("jane x@x.com", false; "whitespace")]
    #[test_case("jane@@x.com", false; "double at")]
    #[test_case("@x.com", false; "no local part")]
    fn email_format(email: &str, valid: bool) {
        assert_eq!(is_valid_email(email), valid);
        let form = StudentForm {
            student_email: email.to_string(),
            ..jane()
        };
        let expected = (!valid).then_some(FieldErrorKind::FormatMismatch);
        assert_eq!(kind_of(&form, Field::StudentEmail), expected);
    }

    #[test_case("9876543210", true; "ten digits")]
    #[test_case("987654321", false; "nine digits")]
    #[test_case("98765432101", false; "eleven digits")]
    #[test_case("98765-4321", false; "punctuation")]
    #[test_case("९८७६५४३२१०", false; "non ascii digits")]
    fn phone_format(phone: &str, valid: bool) {
        assert_eq!(is_valid_phone(phone), valid);
    }

    #[test_case("123456", true; "six digits")]
    #[test_case("12345", false; "five digits")]
    #[test_case("1234567", false; "seven digits")]
    #[test_case("12a456", false; "letter")]
    fn pincode_format(pincode: &str, valid: bool) {
        assert_eq!(is_valid_pincode(pincode), valid);
        let mut form = jane();
        form.address.pincode = pincode.to_string();
        let expected = (!valid).then_some(FieldErrorKind::FormatMismatch);
        assert_eq!(
            kind_of(&form, Field::Address(AddressField::Pincode)),
            expected
        );
    }

    #[test]
    fn unknown_gender_is_a_format_mismatch() {
        let form = StudentForm {
            gender: "robot".to_string(),
            ..jane()
        };
        assert_eq!(
            kind_of(&form, Field::Gender),
            Some(FieldErrorKind::FormatMismatch)
        );
    }

    #[test_case("MALE"; "uppercase")]
    #[test_case("Female"; "capitalised")]
    #[test_case(" other"; "padded")]
    fn gender_must_match_exactly(gender: &str) {
        let form = StudentForm {
            gender: gender.to_string(),
            ..jane()
        };
        assert_eq!(
            kind_of(&form, Field::Gender),
            Some(FieldErrorKind::FormatMismatch)
        );
    }

    #[test_case("ABC123", "male", "", "jane@x.com"; "uppercase id")]
    #[test_case("aBc999", "female", "", "jane@x.com"; "mixed case id")]
    #[test_case("xyz000", "other", "", "jane@x.com"; "other gender")]
    #[test_case("abc123", "male", "Doe", "jane@x.com"; "with last name")]
    #[test_case("abc123", "female", "Doe-Smith", "first.last@sub.example.org"; "dotted email")]
    fn whole_valid_forms_pass(id: &str, gender: &str, last_name: &str, email: &str) {
        let form = StudentForm {
            student_id: id.to_string(),
            gender: gender.to_string(),
            last_name: last_name.to_string(),
            student_email: email.to_string(),
            ..jane()
        };

        let errors = form.validate();
        assert!(errors.is_empty(), "unexpected errors: {errors}");

        let student = form.into_student().unwrap();
        assert_eq!(student.id().as_str(), id);
        assert_eq!(student.gender().as_str(), gender);
        assert_eq!(student.last_name(), last_name);
        assert_eq!(student.email(), email);
    }

    #[test]
    fn clearing_a_field_removes_only_its_error() {
        let mut errors = StudentForm::default().validate();
        let before = errors.len();

        assert!(errors.clear(Field::StudentPhone).is_some());
        assert!(errors.clear(Field::StudentPhone).is_none());
        assert_eq!(errors.len(), before - 1);
        assert!(errors.get(Field::StudentId).is_some());
    }

    #[test]
    fn errors_display_with_dotted_paths() {
        let mut form = jane();
        form.student_phone = "1".to_string();
        form.address.pincode = String::new();

        assert_eq!(
            form.validate().to_string(),
            "studentPhone: Phone number must be 10 digits\naddress.pincode: Pincode is required"
        );
    }
}
