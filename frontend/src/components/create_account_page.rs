use shared::FormData;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::PasswordInput;
use crate::hooks::use_create_account_form;
use crate::services::logging::Logger;

const COMPONENT: &str = "CreateAccountPage";

#[derive(Properties, PartialEq)]
pub struct CreateAccountPageProps {
    /// Receives the entered values once the form is valid and submitted.
    /// Without it the page logs the values and shows a confirmation alert.
    #[prop_or_default]
    pub on_submit: Option<Callback<FormData>>,
    #[prop_or(AttrValue::Static("/login"))]
    pub login_href: AttrValue,
    #[prop_or(AttrValue::Static("/terms"))]
    pub terms_href: AttrValue,
    #[prop_or(AttrValue::Static("/privacy-policy"))]
    pub privacy_href: AttrValue,
}

fn default_submit(data: FormData) {
    match serde_json::to_string(&data) {
        Ok(json) => Logger::info_with_component(COMPONENT, &json),
        Err(e) => Logger::error_with_component(COMPONENT, &format!("Failed to serialize form: {}", e)),
    }
    gloo::dialogs::alert("Operation successful!");
}

fn error_text(message: &str) -> Html {
    if message.is_empty() {
        html! {}
    } else {
        html! { <p class="field-error">{message}</p> }
    }
}

#[function_component(CreateAccountPage)]
pub fn create_account_page(props: &CreateAccountPageProps) -> Html {
    let on_submit = props
        .on_submit
        .clone()
        .unwrap_or_else(|| Callback::from(default_submit));
    let form_state = use_create_account_form(on_submit);
    let form = &form_state.form;
    let actions = form_state.actions.clone();

    let on_input = {
        let on_field_change = actions.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((input.name(), input.value()));
        })
    };

    let on_terms_change = {
        let on_terms_change = actions.on_terms_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_terms_change.emit(input.checked());
        })
    };

    let on_dob_focus = {
        let on_dob_focus = actions.on_dob_focus.clone();
        Callback::from(move |_: FocusEvent| on_dob_focus.emit(()))
    };

    let on_dob_blur = {
        let on_dob_blur = actions.on_dob_blur.clone();
        Callback::from(move |_: FocusEvent| on_dob_blur.emit(()))
    };

    let on_form_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let password_hint_class = if form.errors.password.is_empty() {
        "password-hint"
    } else {
        "password-hint field-error"
    };

    html! {
        <div class="create-account-page">
            <div class="create-account-header">
                <h1>{"Let's get you started"}</h1>
                <p>
                    {"Already have an account? "}
                    <a href={props.login_href.clone()}>{"Login"}</a>
                </p>
            </div>

            <form class="create-account-form" onsubmit={on_form_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        id="username"
                        type="text"
                        name="username"
                        required=true
                        placeholder="Enter username"
                        class="form-input"
                        value={form.data.username.clone()}
                        oninput={on_input.clone()}
                    />
                    {error_text(&form.errors.username)}
                </div>

                <div class="form-group">
                    <label for="dateOfBirth">{"Date of birth"}</label>
                    <input
                        id="dateOfBirth"
                        type={form.dob_input_mode.input_type()}
                        name="dateOfBirth"
                        required=true
                        placeholder={form.dob_input_mode.placeholder()}
                        class="form-input"
                        value={form.data.date_of_birth.clone()}
                        oninput={on_input.clone()}
                        onfocus={on_dob_focus}
                        onblur={on_dob_blur}
                    />
                    {error_text(&form.errors.date_of_birth)}
                </div>

                <div class="form-group">
                    <label for="email">{"Email address"}</label>
                    <input
                        id="email"
                        type="email"
                        name="email"
                        required=true
                        placeholder="Enter email address"
                        class="form-input"
                        value={form.data.email.clone()}
                        oninput={on_input.clone()}
                    />
                    {error_text(&form.errors.email)}
                </div>

                <div class="form-group">
                    <label>{"Password"}</label>
                    <PasswordInput
                        name="password"
                        value={form.data.password.clone()}
                        placeholder="Enter password"
                        visible={form.show_password}
                        oninput={on_input.clone()}
                        on_toggle_visibility={actions.toggle_password_visibility.clone()}
                    />
                    <p class={password_hint_class}>
                        {"Password should contain at least 8 characters, 1 special symbol character, 1 number, 1 uppercase letter"}
                    </p>
                </div>

                <div class="form-group">
                    <label>{"Confirm password"}</label>
                    <PasswordInput
                        name="confirmPassword"
                        value={form.data.confirm_password.clone()}
                        placeholder="Confirm password"
                        visible={form.show_confirm_password}
                        oninput={on_input}
                        on_toggle_visibility={actions.toggle_confirm_password_visibility.clone()}
                    />
                    {error_text(&form.errors.confirm_password)}
                </div>

                <div class="form-group terms">
                    <input
                        id="terms"
                        type="checkbox"
                        checked={form.accepted_terms}
                        onchange={on_terms_change}
                    />
                    <label for="terms">
                        {"I agree to the "}
                        <a href={props.terms_href.clone()}>{"Terms and Conditions"}</a>
                        {" and "}
                        <a href={props.privacy_href.clone()}>{"Privacy Policy"}</a>
                        {" of this app."}
                    </label>
                    {error_text(&form.errors.terms)}
                </div>

                <button
                    type="submit"
                    class="btn btn-primary create-account-btn"
                    disabled={!form_state.can_submit}
                >
                    {"Create Account"}
                </button>
            </form>
        </div>
    }
}
