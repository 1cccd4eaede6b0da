//! Signup page placeholder

use leptos::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-gray-50" data-page="signup">
            <h2 class="text-2xl font-bold text-center text-gray-800">"Inscription"</h2>
        </div>
    }
}
