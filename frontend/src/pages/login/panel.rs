use crate::pages::login::{
    components::form::LoginForm,
    utils::LoginFormState,
    view_model::{use_login_view_model, LoginViewModel},
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    render_login_form(vm)
}

pub(crate) fn render_login_form(vm: LoginViewModel) -> impl IntoView {
    let state = vm.state;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    let username_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_username(value))
    };
    let password_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_password(value))
    };

    view! {
        <LoginForm
            username=Signal::derive(move || state.with(|s| s.username.clone()))
            password=Signal::derive(move || state.with(|s| s.password.clone()))
            submit_enabled=vm.submit_enabled
            button_label=Signal::derive(move || state.with(LoginFormState::button_label))
            error_visible=vm.error_visible
            fetched_name=Signal::derive(move || state.with(|s| s.fetched_name.clone()))
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
