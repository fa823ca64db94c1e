use std::rc::Rc;

use chrono::NaiveDate;
use shared::{CreateAccountForm, Field, FormData};
use yew::prelude::*;

use crate::services::{date_utils, logging::Logger};

const COMPONENT: &str = "CreateAccountForm";

/// Events the create account page feeds into its form state
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    FieldChanged {
        field: Field,
        value: String,
        today: NaiveDate,
    },
    TermsChanged(bool),
    TogglePasswordVisibility,
    ToggleConfirmPasswordVisibility,
    DobFocused,
    DobBlurred,
    Reset,
}

/// Yew wrapper so every action is applied to the latest state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore {
    pub form: CreateAccountForm,
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        match action {
            FormAction::FieldChanged { field, value, today } => {
                form.update_field(field, value, today)
            }
            FormAction::TermsChanged(accepted) => form.set_accepted_terms(accepted),
            FormAction::TogglePasswordVisibility => form.toggle_password_visibility(),
            FormAction::ToggleConfirmPasswordVisibility => {
                form.toggle_confirm_password_visibility()
            }
            FormAction::DobFocused => form.focus_date_of_birth(),
            FormAction::DobBlurred => form.blur_date_of_birth(),
            FormAction::Reset => form.clear(),
        }
        Rc::new(FormStore { form })
    }
}

pub struct UseCreateAccountFormResult {
    pub form: CreateAccountForm,
    /// Recomputed from the raw values on every render
    pub can_submit: bool,
    pub actions: UseCreateAccountFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCreateAccountFormActions {
    /// Input `name` attribute and its new value
    pub on_field_change: Callback<(String, String)>,
    pub on_terms_change: Callback<bool>,
    pub toggle_password_visibility: Callback<()>,
    pub toggle_confirm_password_visibility: Callback<()>,
    pub on_dob_focus: Callback<()>,
    pub on_dob_blur: Callback<()>,
    /// Hands the current values to `on_submit` if the form is valid
    pub submit: Callback<()>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_create_account_form(on_submit: Callback<FormData>) -> UseCreateAccountFormResult {
    let store = use_reducer(FormStore::default);
    let dispatcher = store.dispatcher();

    let on_field_change = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |(name, value): (String, String)| {
            match name.parse::<Field>() {
                Ok(field) => dispatcher.dispatch(FormAction::FieldChanged {
                    field,
                    value,
                    today: date_utils::today(),
                }),
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_terms_change = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |accepted: bool| {
            dispatcher.dispatch(FormAction::TermsChanged(accepted));
        })
    };

    let toggle_password_visibility = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(FormAction::TogglePasswordVisibility))
    };

    let toggle_confirm_password_visibility = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(FormAction::ToggleConfirmPasswordVisibility))
    };

    let on_dob_focus = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(FormAction::DobFocused))
    };

    let on_dob_blur = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(FormAction::DobBlurred))
    };

    let reset = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(FormAction::Reset))
    };

    let submit = {
        let store = store.clone();
        Callback::from(move |_| match store.form.submit(date_utils::today()) {
            Some(snapshot) => on_submit.emit(snapshot),
            None => Logger::debug_with_component(COMPONENT, "Submit pressed while form is invalid"),
        })
    };

    let can_submit = store.form.can_submit(date_utils::today());

    let actions = UseCreateAccountFormActions {
        on_field_change,
        on_terms_change,
        toggle_password_visibility,
        toggle_confirm_password_visibility,
        on_dob_focus,
        on_dob_blur,
        submit,
        reset,
    };

    UseCreateAccountFormResult {
        form: store.form.clone(),
        can_submit,
        actions,
    }
}
