//! Company Lens web front-end
//!
//! Presentational views for the company lookup landing page, the login form
//! and the client-side navigation that switches between them.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod pages;
pub mod route;

pub use app::{App, AppShell, PageOutlet};
pub use config::SiteConfig;
pub use error::{ConfigError, Field, LoginError, ViewError};
pub use icon::Icon;
pub use model::{
    BarColor, Credentials, FeatureDatum, LoginForm, Percent, ProgressMetric, StatDatum,
};
pub use route::{NavTrigger, NavigationTarget, Page};
