use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub name: AttrValue,
    pub value: String,
    pub placeholder: AttrValue,
    /// Show the password as plain text
    pub visible: bool,

    pub oninput: Callback<InputEvent>,
    pub on_toggle_visibility: Callback<()>,
}

/// Password field with an eye icon that switches masking on and off
#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let on_toggle = {
        let on_toggle_visibility = props.on_toggle_visibility.clone();
        Callback::from(move |_: MouseEvent| on_toggle_visibility.emit(()))
    };

    html! {
        <div class="password-input">
            <input
                name={props.name.clone()}
                type={if props.visible { "text" } else { "password" }}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                required=true
                placeholder={props.placeholder.clone()}
                class="form-input"
            />
            <button type="button" class="visibility-toggle" onclick={on_toggle}>
                {if props.visible { "👁" } else { "🙈" }}
            </button>
        </div>
    }
}
