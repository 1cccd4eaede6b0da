//! Page sections

use crate::components::*;
use crate::icon::Icon;
use crate::model::{ensure_unique_keys, BarColor, FeatureDatum, ProgressMetric, StatDatum};
use leptos::*;

pub const COMPANY_STATS: [StatDatum; 2] = [
    StatDatum {
        icon: Icon::CurrencyEuro,
        label: "Chiffre d'affaires",
        value: "€2.5M",
    },
    StatDatum {
        icon: Icon::UserGroup,
        label: "Employés",
        value: "45",
    },
];

pub const PERFORMANCE: [ProgressMetric; 2] = [
    ProgressMetric::new("Croissance", 75, BarColor::Green),
    ProgressMetric::new("Stabilité", 92, BarColor::Blue),
];

pub const FEATURES: [FeatureDatum; 4] = [
    FeatureDatum {
        name: "Informations Légales",
        description: "Accédez aux données légales complètes des entreprises",
        icon: Icon::BuildingOffice,
    },
    FeatureDatum {
        name: "Données Financières",
        description: "Analysez les performances financières et les bilans",
        icon: Icon::ChartBar,
    },
    FeatureDatum {
        name: "Actualités",
        description: "Restez informé des dernières nouvelles concernant l'entreprise",
        icon: Icon::Newspaper,
    },
    FeatureDatum {
        name: "Documents",
        description: "Consultez les documents officiels et rapports",
        icon: Icon::DocumentText,
    },
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="text-center">
            <h1 class="text-4xl font-bold tracking-tight text-gray-900 sm:text-6xl">
                "Analysez les entreprises en un coup d'œil"
            </h1>
            <p class="mt-6 text-lg leading-8 text-gray-600">
                "Obtenez des informations détaillées sur n'importe quelle entreprise belge "
                "en utilisant simplement son numéro de TVA."
            </p>
        </div>
    }
}

#[component]
pub fn CompanyOverview() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <CompanyHeader/>
            <div class="grid grid-cols-2 gap-4">
                {COMPANY_STATS.into_iter().map(|stat| view! {
                    <StatCard icon=stat.icon label=stat.label value=stat.value/>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn AnalyticsSection() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <PerformanceCard metrics=PERFORMANCE.to_vec()/>
            <EuropeanPresenceCard/>
        </div>
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    debug_assert!(ensure_unique_keys(&FEATURES, |feature| feature.name).is_ok());

    view! {
        <div class="py-24 sm:py-32">
            <div class="mx-auto max-w-7xl px-6 lg:px-8">
                <div class="mx-auto max-w-2xl lg:text-center">
                    <h2 class="text-base font-semibold leading-7 text-blue-600">"Fonctionnalités"</h2>
                    <p class="mt-2 text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">
                        "Tout ce dont vous avez besoin pour analyser une entreprise"
                    </p>
                </div>
                <div class="mx-auto mt-16 max-w-2xl sm:mt-20 lg:mt-24 lg:max-w-none">
                    <dl class="grid max-w-xl grid-cols-1 gap-x-8 gap-y-16 lg:max-w-none lg:grid-cols-4">
                        <For
                            each=move || FEATURES
                            key=|feature| feature.name
                            children=move |feature| view! {
                                <FeatureCard
                                    name=feature.name
                                    description=feature.description
                                    icon=feature.icon
                                />
                            }
                        />
                    </dl>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feature_order() {
        let names: Vec<_> = FEATURES.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["Informations Légales", "Données Financières", "Actualités", "Documents"]
        );
        assert!(ensure_unique_keys(&FEATURES, |f| f.name).is_ok());
    }

    #[test]
    fn test_performance_literals() {
        assert_eq!(PERFORMANCE[0].label, "Croissance");
        assert_eq!(PERFORMANCE[0].value.get(), 75);
        assert_eq!(PERFORMANCE[0].color, BarColor::Green);
        assert_eq!(PERFORMANCE[1].label, "Stabilité");
        assert_eq!(PERFORMANCE[1].value.get(), 92);
        assert_eq!(PERFORMANCE[1].color, BarColor::Blue);
    }

    #[test]
    fn test_company_stats() {
        let values: Vec<_> = COMPANY_STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["€2.5M", "45"]);
    }
}
