//! Card components for the overview panel and the features grid

use crate::components::Glyph;
use crate::icon::Icon;
use crate::model::{ensure_unique_keys, BarColor, Percent, ProgressMetric};
use leptos::*;

/// Countries shown in the presence card, in display order
pub const COUNTRIES: [&str; 3] = ["Belgique", "France", "Allemagne"];

#[component]
pub fn ProgressBar(label: &'static str, value: Percent, color: BarColor) -> impl IntoView {
    view! {
        <div data-metric=label>
            <div class="flex justify-between text-sm mb-1">
                <span class="text-gray-600">{label}</span>
                <span class=color.text_class()>{value.to_string()}</span>
            </div>
            <div class="h-2 bg-gray-100 rounded-full overflow-hidden">
                <div
                    class=format!("h-full {} rounded-full", color.fill_class())
                    style=format!("width: {}%", value.get())
                ></div>
            </div>
        </div>
    }
}

/// A labelled figure. `value` is rendered as given.
#[component]
pub fn StatCard(icon: Icon, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-xl shadow-sm" data-stat=label>
            <div class="flex items-center space-x-2">
                <Glyph icon=icon class="h-5 w-5 text-blue-600"/>
                <span class="text-sm text-gray-600">{label}</span>
            </div>
            <p class="mt-2 text-xl font-semibold text-gray-900">{value}</p>
        </div>
    }
}

#[component]
pub fn FeatureCard(name: &'static str, description: &'static str, icon: Icon) -> impl IntoView {
    view! {
        <div class="flex flex-col" data-feature=name>
            <dt class="flex items-center gap-x-3 text-base font-semibold leading-7 text-gray-900">
                <Glyph icon=icon class="h-5 w-5 flex-none text-blue-600"/>
                {name}
            </dt>
            <dd class="mt-4 flex flex-auto flex-col text-base leading-7 text-gray-600">
                <p class="flex-auto">{description}</p>
            </dd>
        </div>
    }
}

#[component]
pub fn CompanyHeader() -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <div class="flex items-center space-x-3">
                <div class="w-10 h-10 bg-blue-100 rounded-lg flex items-center justify-center">
                    <Glyph icon=Icon::BuildingOffice class="h-6 w-6 text-blue-600"/>
                </div>
                <div>
                    <h3 class="font-semibold text-gray-900">"Company Name"</h3>
                    <p class="text-sm text-gray-500">"BE0123456789"</p>
                </div>
            </div>
            <div class="flex space-x-2">
                <div class="px-3 py-1 bg-green-100 rounded-full">
                    <span class="text-sm font-medium text-green-700">"Active"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PerformanceCard(metrics: Vec<ProgressMetric>) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-xl shadow-sm">
            <div class="flex items-center justify-between mb-4">
                <h4 class="font-medium text-gray-900">"Performance"</h4>
                <Glyph icon=Icon::ArrowTrendingUp class="h-5 w-5 text-green-500"/>
            </div>
            <div class="space-y-3">
                {metrics.into_iter().map(|metric| view! {
                    <ProgressBar label=metric.label value=metric.value color=metric.color/>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn EuropeanPresenceCard() -> impl IntoView {
    debug_assert!(ensure_unique_keys(&COUNTRIES, |country| *country).is_ok());

    view! {
        <div class="bg-white p-4 rounded-xl shadow-sm">
            <div class="flex items-center space-x-2 mb-4">
                <Glyph icon=Icon::GlobeEuropeAfrica class="h-5 w-5 text-blue-600"/>
                <h4 class="font-medium text-gray-900">"Présence Européenne"</h4>
            </div>
            <div class="flex space-x-2">
                <For
                    each=move || COUNTRIES
                    key=|country| *country
                    children=move |country| view! {
                        <div class="px-3 py-1 bg-blue-100 rounded-full" data-country=country>
                            <span class="text-sm text-blue-700">{country}</span>
                        </div>
                    }
                />
            </div>
        </div>
    }
}
