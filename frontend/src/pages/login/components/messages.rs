use crate::pages::login::utils::ERROR_MESSAGE;
use leptos::*;

/// Error region that stays in the DOM and only toggles its visibility.
#[component]
pub fn InlineErrorMessage(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <span
            data-testid="error"
            role="alert"
            aria-hidden=move || (!visible.get()).to_string()
            class="block bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded"
            style=move || format!("visibility: {}", if visible.get() { "visible" } else { "hidden" })
        >
            {ERROR_MESSAGE}
        </span>
    }
}

#[component]
pub fn FetchedUserName(#[prop(into)] name: Signal<Option<String>>) -> impl IntoView {
    move || {
        name.get().map(|name| {
            view! {
                <span data-testid="user-name" class="block text-center text-lg font-semibold text-gray-900">
                    {name}
                </span>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, renders_user_name};

    #[test]
    fn inline_error_is_hidden_but_present() {
        let html = render_to_string(move || {
            let visible = create_rw_signal(false);
            view! { <InlineErrorMessage visible=visible /> }
        });
        assert!(html.contains("data-testid=\"error\""));
        assert!(html.contains("visibility: hidden"));
        assert!(html.contains(ERROR_MESSAGE));
    }

    #[test]
    fn inline_error_is_visible_when_flagged() {
        let html = render_to_string(move || {
            let visible = create_rw_signal(true);
            view! { <InlineErrorMessage visible=visible /> }
        });
        assert!(html.contains("visibility: visible"));
        assert!(!html.contains("visibility: hidden"));
    }

    #[test]
    fn fetched_name_renders_only_when_present() {
        let html = render_to_string(move || {
            let name = create_rw_signal(None::<String>);
            view! { <FetchedUserName name=name /> }
        });
        assert!(!renders_user_name(&html));

        let html = render_to_string(move || {
            let name = create_rw_signal(Some("John".to_string()));
            view! { <FetchedUserName name=name /> }
        });
        assert!(renders_user_name(&html));
        assert!(html.contains("John"));
    }
}
