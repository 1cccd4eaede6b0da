//! Home page

use crate::components::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="space-y-16">
            <HeroSection/>

            // Overview panel
            <div class="flex justify-center items-center py-12">
                <div class="w-full max-w-4xl bg-gradient-to-br from-white to-blue-50 rounded-2xl shadow-xl p-8">
                    <div class="grid grid-cols-2 gap-8">
                        <CompanyOverview/>
                        <AnalyticsSection/>
                    </div>
                </div>
            </div>

            <FeaturesSection/>
        </div>
    }
}
