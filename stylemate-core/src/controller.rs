//! The recommendation page controller.

use std::ops::{Deref, DerefMut};

use tracing::{info, warn};

use crate::{
    api::StyleApi,
    copy,
    model::FormInput,
    page::{Page, UiState},
    ui::{Presenter, Ui},
};

/// Outcome of the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCheck {
    Ready,
    ModelNotLoaded,
    Unreachable,
}

/// Mediates between the form, the backend and the rendered page.
///
/// Submissions take `&mut self`, so two flows on one controller can never
/// interleave.
#[derive(Debug)]
pub struct RecommendationController<A> {
    api: A,
    ui: Ui,
}

impl<A: StyleApi> RecommendationController<A> {
    pub fn new(api: A) -> Self {
        Self { api, ui: Ui::default() }
    }

    pub fn with_presenter(api: A, presenter: impl Presenter + 'static) -> Self {
        Self { api, ui: Ui::new(Some(Box::new(presenter))) }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &Page {
        self.ui.page()
    }

    pub fn state(&self) -> UiState {
        self.ui.page().ui_state()
    }

    /// Overwrite the form fields; they are read on the next submission.
    pub fn fill_form(&mut self, form: FormInput) {
        self.ui.page_mut().form = form;
    }

    /// Probe the backend once at startup. Problems become a warning in the
    /// error region; this never fails.
    pub async fn check_health(&mut self) -> HealthCheck {
        match self.api.health().await {
            Ok(status) if status.model_loaded => HealthCheck::Ready,
            Ok(_) => {
                self.ui.show_error(copy::MODEL_NOT_LOADED);
                HealthCheck::ModelNotLoaded
            }
            Err(err) => {
                warn!(error = %err, "health check failed");
                self.ui.show_error(copy::SERVER_UNREACHABLE);
                HealthCheck::Unreachable
            }
        }
    }

    /// Submit the form: best-effort weather first, then recommendations.
    ///
    /// The page leaves its loading state on every exit path, including when
    /// the returned future is dropped before completion.
    pub async fn get_recommendations(&mut self) -> UiState {
        let form = self.ui.page().form.clone();

        let mut ui = LoadingGuard::enter(&mut self.ui);
        ui.hide_error();
        ui.hide_results();

        match self.api.weather(&form.location).await {
            Ok(weather) => ui.display_weather_info(Some(&weather)),
            Err(err) => warn!(error = %err, location = %form.location, "weather lookup failed"),
        }

        match self.api.recommend(&form).await {
            Ok(set) => {
                ui.display_recommendations(&set);
                // The recommendation response is authoritative over the lookup above.
                ui.display_weather_info(set.weather_info.as_ref());
                info!(location = %form.location, "recommendations rendered");
            }
            Err(err) => {
                if err.is_rejection() {
                    info!(error = %err, "recommendation rejected");
                } else {
                    warn!(error = %err, "recommendation request failed");
                }
                ui.show_error(err.user_message());
            }
        }

        drop(ui);
        self.state()
    }
}

/// Keeps the page in its loading state for as long as it lives.
struct LoadingGuard<'a> {
    ui: &'a mut Ui,
}

impl<'a> LoadingGuard<'a> {
    fn enter(ui: &'a mut Ui) -> Self {
        ui.show_loading();
        Self { ui }
    }
}

impl Deref for LoadingGuard<'_> {
    type Target = Ui;

    fn deref(&self) -> &Ui {
        self.ui
    }
}

impl DerefMut for LoadingGuard<'_> {
    fn deref_mut(&mut self) -> &mut Ui {
        self.ui
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.ui.hide_loading();
    }
}
