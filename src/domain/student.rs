use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{AddressField, Field, StudentId, ValidationErrors};

/// A student's self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// male
    Male,
    /// female
    Female,
    /// other
    Other,
}

impl Gender {
    /// All choices, in the order they are offered.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// The serialized (lowercase) name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// The capitalised name, as shown in a selection list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of `male`, `female` or `other`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid gender '{0}': expected one of male, female, other")]
pub struct InvalidGenderError(String);

impl FromStr for Gender {
    type Err = InvalidGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| InvalidGenderError(s.to_string()))
    }
}

/// A validated postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    full_address: String,
    town: String,
    pincode: String,
}

impl Address {
    /// House number, street and area.
    #[must_use]
    pub fn full_address(&self) -> &str {
        &self.full_address
    }

    /// Town or city.
    #[must_use]
    pub fn town(&self) -> &str {
        &self.town
    }

    /// Six digit postal code.
    #[must_use]
    pub fn pincode(&self) -> &str {
        &self.pincode
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.full_address, self.town, self.pincode)
    }
}

/// A validated student record.
///
/// Students are only constructed from a [`StudentForm`] that passed
/// validation (see [`StudentForm::into_student`]), so every field satisfies
/// its rule. The serialized field names match the exported JSON
/// (`studentId`, `firstName`, ... and a nested `address` object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)] // names fixed by the export format
pub struct Student {
    student_id: StudentId,
    first_name: String,
    last_name: String,
    student_email: String,
    student_phone: String,
    gender: Gender,
    address: Address,
}

impl Student {
    /// The unique student ID.
    #[must_use]
    pub const fn id(&self) -> &StudentId {
        &self.student_id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name. Empty if none was given.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.student_email
    }

    /// Ten digit phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.student_phone
    }

    /// Gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Postal address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

/// The raw, unvalidated address fields of a [`StudentForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressForm {
    /// House number, street and area.
    pub full_address: String,
    /// Town or city.
    pub town: String,
    /// Six digit postal code.
    pub pincode: String,
}

impl AddressForm {
    /// Returns the current value of an address field.
    #[must_use]
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FullAddress => &self.full_address,
            AddressField::Town => &self.town,
            AddressField::Pincode => &self.pincode,
        }
    }

    /// Sets the value of an address field.
    pub fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::FullAddress => self.full_address = value,
            AddressField::Town => self.town = value,
            AddressField::Pincode => self.pincode = value,
        }
    }
}

/// The raw field set a caller collects before validation.
///
/// Every value is kept exactly as entered. `Default` is the blank form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_field_names)] // mirrors `Student`
pub struct StudentForm {
    /// Candidate student ID.
    pub student_id: String,
    /// Candidate given name.
    pub first_name: String,
    /// Candidate family name.
    pub last_name: String,
    /// Candidate email.
    pub student_email: String,
    /// Candidate phone number.
    pub student_phone: String,
    /// Candidate gender; empty when nothing is selected.
    pub gender: String,
    /// Candidate address fields.
    pub address: AddressForm,
}

impl StudentForm {
    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::StudentId => &self.student_id,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::StudentEmail => &self.student_email,
            Field::StudentPhone => &self.student_phone,
            Field::Gender => &self.gender,
            Field::Address(field) => self.address.get(field),
        }
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::StudentId => self.student_id = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::StudentEmail => self.student_email = value,
            Field::StudentPhone => self.student_phone = value,
            Field::Gender => self.gender = value,
            Field::Address(field) => self.address.set(field, value),
        }
    }

    /// Validates the form and converts it into a [`Student`].
    ///
    /// # Errors
    ///
    /// Returns every failing field if the form does not validate.
    ///
    /// # Panics
    ///
    /// Never in practice: the student ID and gender are parsed only after the
    /// validator has accepted them.
    pub fn into_student(self) -> Result<Student, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let student_id = StudentId::new(self.student_id).expect("validated above");
        let gender = Gender::from_str(&self.gender).expect("validated above");

        Ok(Student {
            student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            student_email: self.student_email,
            student_phone: self.student_phone,
            gender,
            address: Address {
                full_address: self.address.full_address,
                town: self.address.town,
                pincode: self.address.pincode,
            },
        })
    }
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.student_id.to_string(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            student_email: student.student_email.clone(),
            student_phone: student.student_phone.clone(),
            gender: student.gender.to_string(),
            address: AddressForm {
                full_address: student.address.full_address.clone(),
                town: student.address.town.clone(),
                pincode: student.address.pincode.clone(),
            },
        }
    }
}
