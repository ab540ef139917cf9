use std::{fmt, str::FromStr};

/// A field of the nested [`Address`](super::Address) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressField {
    /// House number, street and area.
    FullAddress,
    /// Town or city.
    Town,
    /// Six digit postal code.
    Pincode,
}

impl AddressField {
    /// All address fields, in form order.
    pub const ALL: [Self; 3] = [Self::FullAddress, Self::Town, Self::Pincode];

    /// The serialized name of the field within the address object.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullAddress => "fullAddress",
            Self::Town => "town",
            Self::Pincode => "pincode",
        }
    }
}

/// A field of a [`StudentForm`](super::StudentForm).
///
/// Nested address fields are addressed by [`Field::Address`] rather than by
/// a dotted string. The dotted path (e.g. `address.pincode`) is still
/// available through [`fmt::Display`] and [`FromStr`] for callers that key
/// errors by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// The unique student ID.
    StudentId,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact email.
    StudentEmail,
    /// Ten digit phone number.
    StudentPhone,
    /// Gender selection.
    Gender,
    /// A field of the nested address.
    Address(AddressField),
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 9] = [
        Self::StudentId,
        Self::FirstName,
        Self::LastName,
        Self::StudentEmail,
        Self::StudentPhone,
        Self::Gender,
        Self::Address(AddressField::FullAddress),
        Self::Address(AddressField::Town),
        Self::Address(AddressField::Pincode),
    ];

    /// A human readable label for the field, as shown next to a form input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StudentId => "Student ID",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::StudentEmail => "Student Email",
            Self::StudentPhone => "Student Phone",
            Self::Gender => "Gender",
            Self::Address(AddressField::FullAddress) => "Address (House No, Street, Area)",
            Self::Address(AddressField::Town) => "City",
            Self::Address(AddressField::Pincode) => "Pincode",
        }
    }

    /// Whether the field must be filled in.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::LastName)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::StudentId => f.write_str("studentId"),
            Self::FirstName => f.write_str("firstName"),
            Self::LastName => f.write_str("lastName"),
            Self::StudentEmail => f.write_str("studentEmail"),
            Self::StudentPhone => f.write_str("studentPhone"),
            Self::Gender => f.write_str("gender"),
            Self::Address(field) => write!(f, "address.{}", field.name()),
        }
    }
}

/// Error returned when a string is not a known field path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown field '{0}'")]
pub struct UnknownFieldError(String);

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.to_string() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}
