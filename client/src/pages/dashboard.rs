//! Dashboard page, the protected landing route.
//!
//! On the server the host has already run the Route Guard, so the page only
//! renders for an authenticated request, and hydration reuses that result.
//! When the page is reached by client-side navigation there is no server
//! result; the browser then resolves the session with the ambient cookie jar
//! and redirects to `/login` when there is none.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use session::User;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    // Pending only when no server render supplied the guard result.
    #[cfg(feature = "hydrate")]
    {
        if auth.get_untracked().loading {
            leptos::task::spawn_local(async move {
                let client = crate::net::api::session_client();
                let state = session::RouteGuard::new(&client)
                    .resolve(session::CredentialCarrier::Ambient)
                    .await;
                auth.set(AuthState::from_guard(state));
            });
        }
    }

    view! {
        <Title text="RustyMine Dashboard"/>
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h1 title=move || auth.with(full_name)>{move || auth.with(greeting)}</h1>
            </header>
            <Show when=move || auth.with(|s| s.error.is_some())>
                <p class="dashboard-page__error" role="alert">
                    {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
        </main>
    }
}

/// Heading text for the current auth state.
pub(crate) fn greeting(state: &AuthState) -> String {
    match (&state.user, state.loading) {
        (Some(user), _) => format!("Hello {}", user.username),
        (None, true) => "Loading session...".to_owned(),
        (None, false) => String::new(),
    }
}

fn full_name(state: &AuthState) -> String {
    state.user.as_ref().map(User::display_name).unwrap_or_default()
}
