//! Icon rendering

use crate::icon::Icon;
use leptos::*;

/// Draws `icon` as an outline SVG sized by `class`.
#[component]
pub fn Glyph(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.name()
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=icon.path()/>
        </svg>
    }
}
