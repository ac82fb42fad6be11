//! Core library for the `stylemate` outfit recommendation client.
//!
//! This crate defines:
//! - Configuration of the backend API root
//! - Abstraction over the recommendation backend, with an HTTP implementation
//! - Shared domain models (form input, weather, recommendations)
//! - The page model, its renderers and the controller driving them
//!
//! It is used by `stylemate-cli`, but the controller only depends on the
//! [`Presenter`] trait, so other front ends can draw the same page.

pub mod api;
pub mod config;
pub mod controller;
pub mod copy;
pub mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod ui;

pub use api::{HttpApi, StyleApi, api_from_config};
pub use config::{Config, DEFAULT_API_BASE_URL};
pub use controller::{HealthCheck, RecommendationController};
pub use error::ApiError;
pub use model::{Category, FormInput, HealthStatus, Item, RecommendationSet, WeatherInfo};
pub use page::{Page, Region, RegionId, UiState};
pub use render::{CategoryContent, ItemCard, Placeholder, WeatherCard};
pub use ui::{Presenter, Ui};
