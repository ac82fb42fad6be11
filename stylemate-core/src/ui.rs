//! Region operations on the page, each followed by a presenter notification.

use tracing::debug;

use crate::{
    copy,
    model::{Category, RecommendationSet, WeatherInfo},
    page::{Page, RegionId},
    render::{self, WeatherCard},
};

/// Draws regions after they change.
pub trait Presenter: Send {
    fn region_changed(&mut self, page: &Page, region: RegionId);
}

/// The page plus whoever is drawing it.
#[derive(Default)]
pub struct Ui {
    page: Page,
    presenter: Option<Box<dyn Presenter>>,
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("page", &self.page)
            .field("presenter", &self.presenter.is_some())
            .finish()
    }
}

impl Ui {
    pub fn new(presenter: Option<Box<dyn Presenter>>) -> Self {
        Self { page: Page::default(), presenter }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    fn changed(&mut self, region: RegionId) {
        debug!(?region, "region changed");
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.region_changed(&self.page, region);
        }
    }

    pub fn show_loading(&mut self) {
        self.page.spinner.show();
        self.changed(RegionId::Spinner);

        self.page.submit.disabled = true;
        self.page.submit.label = copy::SUBMIT_BUSY_LABEL;
        self.changed(RegionId::SubmitButton);
    }

    pub fn hide_loading(&mut self) {
        self.page.spinner.hide();
        self.changed(RegionId::Spinner);

        self.page.submit.disabled = false;
        self.page.submit.label = copy::SUBMIT_LABEL;
        self.changed(RegionId::SubmitButton);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.page.error.set_content(message.into());
        self.page.error.show();
        self.changed(RegionId::Error);
    }

    pub fn hide_error(&mut self) {
        self.page.error.hide();
        self.changed(RegionId::Error);
    }

    pub fn show_results(&mut self) {
        self.page.results.show();
        self.changed(RegionId::Results);
    }

    pub fn hide_results(&mut self) {
        self.page.results.hide();
        self.changed(RegionId::Results);
    }

    /// Render weather into its panel. `None` leaves the panel as it was.
    pub fn display_weather_info(&mut self, info: Option<&WeatherInfo>) {
        let Some(info) = info else {
            return;
        };

        self.page.weather.set_content(Some(WeatherCard::from(info)));
        self.page.weather.show();
        self.changed(RegionId::Weather);
    }

    /// Replace every category's content, then reveal the results container.
    pub fn display_recommendations(&mut self, set: &RecommendationSet) {
        for &category in Category::all() {
            *self.page.category_mut(category) = render::category_content(category, set.items(category));
            self.changed(RegionId::Category(category));
        }

        self.show_results();
    }
}
