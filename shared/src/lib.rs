use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod form;
pub mod validation;

pub use form::CreateAccountForm;
pub use validation::{
    ConfirmPasswordError, DateOfBirthError, EmailError, PasswordError, UsernameError,
};

/// Raw values entered into the create account form.
///
/// Serialized with camelCase keys so the snapshot handed to the submit
/// handler has the same shape as the form's input names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub username: String,
    /// Either `YYYY-MM-DD` (date picker) or `DD / MM / YYYY` (typed)
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// Current validation message for each field. An empty string means the
/// field passed its rule the last time it changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub username: String,
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Rendered under the terms checkbox but never written by any handler
    pub terms: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, message: String) {
        match field {
            Field::Username => self.username = message,
            Field::DateOfBirth => self.date_of_birth = message,
            Field::Email => self.email = message,
            Field::Password => self.password = message,
            Field::ConfirmPassword => self.confirm_password = message,
        }
    }

    /// True when no field, terms included, carries a message
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty()) && self.terms.is_empty()
    }
}

/// The text inputs of the create account form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    DateOfBirth,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::DateOfBirth,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// The `name` attribute of the matching input element
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::DateOfBirth => "dateOfBirth",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| UnknownFieldError(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownFieldError {}

/// Presentation mode of the date of birth input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DobInputMode {
    /// Free text with a `DD / MM / YYYY` placeholder
    #[default]
    Text,
    /// Native date picker
    Date,
}

impl DobInputMode {
    /// Value for the input's `type` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            DobInputMode::Text => "text",
            DobInputMode::Date => "date",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            DobInputMode::Text => Some("DD / MM / YYYY"),
            DobInputMode::Date => None,
        }
    }
}
