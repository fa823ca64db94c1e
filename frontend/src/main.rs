use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::CreateAccountPage;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    html! {
        <CreateAccountPage />
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("App", "Starting create account page");
    yew::Renderer::<App>::new().render();
}
