//! # Create Account Form State
//!
//! Holds the values typed into the create account page together with the
//! messages shown under each input and the purely presentational flags
//! (password masking, date of birth input mode).
//!
//! ## Responsibilities:
//! - Store a field's new value and recompute that field's message only
//! - Track terms acceptance and visibility toggles
//! - Answer whether submit is enabled and hand out the submitted snapshot
//!
//! Messages for other fields are carried over untouched on every update. In
//! particular, editing the password does not re-check an existing confirm
//! password, so its message can go stale until the confirm field is edited
//! again. The submit gate is computed from the raw values and is unaffected.

use chrono::NaiveDate;
use log::{debug, info};

use crate::validation::{self, message};
use crate::{DobInputMode, Field, FieldErrors, FormData};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAccountForm {
    pub data: FormData,
    pub errors: FieldErrors,
    pub accepted_terms: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub dob_input_mode: DobInputMode,
}

impl CreateAccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every value, message and flag
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Store `value` for `field` and recompute that field's message.
    ///
    /// `today` is only consulted for the date of birth.
    pub fn update_field(&mut self, field: Field, value: String, today: NaiveDate) {
        self.data.set(field, value);

        let value = self.data.get(field);
        let error = match field {
            Field::Username => message(validation::validate_username(value)),
            Field::DateOfBirth => message(validation::validate_date_of_birth(value, today)),
            Field::Email => message(validation::validate_email(value)),
            Field::Password => message(validation::validate_password(value)),
            Field::ConfirmPassword => message(validation::validate_confirm_password(
                value,
                &self.data.password,
            )),
        };

        debug!("Field {} updated, valid: {}", field, error.is_empty());
        self.errors.set(field, error);
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.accepted_terms = accepted;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    /// Switch to the native date picker
    pub fn focus_date_of_birth(&mut self) {
        self.dob_input_mode = DobInputMode::Date;
    }

    /// Fall back to the text input, unless a date was picked
    pub fn blur_date_of_birth(&mut self) {
        if self.data.date_of_birth.is_empty() {
            self.dob_input_mode = DobInputMode::Text;
        }
    }

    pub fn can_submit(&self, today: NaiveDate) -> bool {
        validation::is_form_valid(&self.data, self.accepted_terms, today)
    }

    /// Snapshot of the entered values, or `None` while submit is disabled
    pub fn submit(&self, today: NaiveDate) -> Option<FormData> {
        if !self.can_submit(today) {
            debug!("Submit ignored, form is not valid");
            return None;
        }

        info!("Submitting create account form");
        Some(self.data.clone())
    }
}
