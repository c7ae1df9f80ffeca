//! Login page backed by the [`LoginForm`] controller.
//!
//! A successful login performs a full page load of the dashboard so the
//! server-side guard sees the freshly stored session cookie.

use leptos::prelude::*;
use leptos_meta::Title;
use session::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());
    let submitting = move || form.with(LoginForm::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Re-entrancy guard: `None` while a login is already in flight.
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::session_client().login(&credentials).await;
            let outcome = form.try_update(|f| f.finish(result));
            if let Some(session::SubmitOutcome::Navigate(route)) = outcome {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(route);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <Title text="Login to RustyMine"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Login to RustyMine"</h1>
                <p class="login-card__subtitle">
                    "Enter your username and password to access the dashboard"
                </p>
                <form class="login-form" method="post" on:submit=on_submit>
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        class="login-input"
                        autocomplete="username"
                        required=true
                        disabled=submitting
                        prop:value=move || form.with(|f| f.username().to_owned())
                        on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class="login-input"
                        autocomplete="current-password"
                        required=true
                        disabled=submitting
                        prop:value=move || form.with(|f| f.password().to_owned())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                    <Show when=move || form.with(|f| f.error().is_some())>
                        <p class="login-message login-message--error" role="alert">
                            {move || form.with(|f| f.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>
            </div>
        </div>
    }
}
