//! Main application component

use crate::components::*;
use crate::config::SiteConfig;
use crate::model::Credentials;
use crate::pages::*;
use crate::route::Page;
use leptos::*;

/// Default authentication collaborator. Records the hand-off only.
pub fn forward_credentials(credentials: Credentials) {
    tracing::info!(email = %credentials.email, "credentials handed to authentication service");
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let initial = match config.initial_page() {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(%err, "falling back to the home page");
            Page::Home
        }
    };
    let location = create_rw_signal(initial);

    view! {
        <AppShell
            brand=config.brand_name
            location=location
            on_login=Callback::new(forward_credentials)
        />
    }
}

/// Fixed page chrome around the routed page. `location` is the only
/// navigation state; the navbar writes it and the outlet reads it.
#[component]
pub fn AppShell(
    #[prop(into)] brand: String,
    location: RwSignal<Page>,
    #[prop(into)] on_login: Callback<Credentials>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Navbar brand=brand location=location.write_only()/>
            <main class="container mx-auto px-4 py-8">
                <PageOutlet location=location.read_only() on_login=on_login/>
            </main>
        </div>
    }
}

#[component]
pub fn PageOutlet(location: ReadSignal<Page>, on_login: Callback<Credentials>) -> impl IntoView {
    move || match location.get() {
        Page::Home => view! { <HomePage/> }.into_view(),
        Page::Login => view! { <LoginPage on_submit=on_login/> }.into_view(),
        Page::Signup => view! { <SignupPage/> }.into_view(),
    }
}
