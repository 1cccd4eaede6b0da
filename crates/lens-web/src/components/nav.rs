//! Navigation bar

use crate::route::{NavTrigger, Page};
use leptos::*;

/// Moves the location cell to the page `trigger` points at.
pub fn activate(location: WriteSignal<Page>, trigger: NavTrigger) {
    let target = trigger.target();
    tracing::debug!(path = %target.page, label = target.label, "navigating");
    location.set(target.page);
}

#[component]
pub fn Navbar(#[prop(into)] brand: String, location: WriteSignal<Page>) -> impl IntoView {
    let home = NavTrigger::Brand.target();
    let login = NavTrigger::Login.target();
    let signup = NavTrigger::Signup.target();

    view! {
        <nav class="bg-white shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a
                            href=home.path()
                            data-nav="brand"
                            class="text-xl font-bold text-gray-800"
                            on:click=move |ev| {
                                ev.prevent_default();
                                activate(location, NavTrigger::Brand);
                            }
                        >
                            {brand}
                        </a>
                    </div>

                    <div class="flex items-center space-x-4">
                        <button
                            data-nav="login"
                            class="px-4 py-2 text-sm font-medium text-gray-700 hover:text-gray-900"
                            on:click=move |_| activate(location, NavTrigger::Login)
                        >
                            {login.label}
                        </button>
                        <button
                            data-nav="signup"
                            class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
                            on:click=move |_| activate(location, NavTrigger::Signup)
                        >
                            {signup.label}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_sets_target_page() {
        let runtime = create_runtime();
        let (location, set_location) = create_signal(Page::Home);

        activate(set_location, NavTrigger::Login);
        assert_eq!(location.get_untracked(), Page::Login);

        activate(set_location, NavTrigger::Signup);
        assert_eq!(location.get_untracked(), Page::Signup);

        activate(set_location, NavTrigger::Brand);
        assert_eq!(location.get_untracked(), Page::Home);

        runtime.dispose();
    }

    #[test]
    fn test_activate_follows_trigger_target() {
        let runtime = create_runtime();
        let (location, set_location) = create_signal(Page::Home);

        for trigger in NavTrigger::ALL {
            activate(set_location, trigger);
            let target = trigger.target();
            assert_eq!(location.get_untracked(), target.page);
            assert_eq!(location.get_untracked().path(), target.path());
        }

        runtime.dispose();
    }

    #[test]
    fn test_activate_is_idempotent() {
        let runtime = create_runtime();
        let (location, set_location) = create_signal(Page::Login);

        activate(set_location, NavTrigger::Login);
        activate(set_location, NavTrigger::Login);
        assert_eq!(location.get_untracked(), Page::Login);

        runtime.dispose();
    }
}
