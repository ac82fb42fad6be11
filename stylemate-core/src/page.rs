//! In-memory model of the recommendation page.
//!
//! Every output region is a typed field created once with the page, so the
//! controller never looks anything up by name.

use std::fmt;

use crate::{
    copy,
    model::{Category, FormInput},
    render::{CategoryContent, WeatherCard},
};

/// Identifies a region in change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    SubmitButton,
    Spinner,
    Error,
    Weather,
    Results,
    Category(Category),
}

/// Which display the page is in, derived from region visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    ShowingResults,
    ShowingError,
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::ShowingResults => "showing results",
            UiState::ShowingError => "showing error",
        };
        f.write_str(s)
    }
}

/// A region that can be shown or hidden independently of its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region<T> {
    visible: bool,
    content: T,
}

impl<T> Region<T> {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    pub(crate) fn set_content(&mut self, content: T) {
        self.content = content;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: &'static str,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self { disabled: false, label: copy::SUBMIT_LABEL }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub form: FormInput,
    pub(crate) submit: SubmitButton,
    pub(crate) spinner: Region<()>,
    pub(crate) error: Region<String>,
    pub(crate) weather: Region<Option<WeatherCard>>,
    pub(crate) results: Region<()>,
    pub(crate) categories: [CategoryContent; 3],
}

impl Page {
    pub fn submit(&self) -> &SubmitButton {
        &self.submit
    }

    pub fn spinner(&self) -> &Region<()> {
        &self.spinner
    }

    pub fn error(&self) -> &Region<String> {
        &self.error
    }

    pub fn weather(&self) -> &Region<Option<WeatherCard>> {
        &self.weather
    }

    pub fn results(&self) -> &Region<()> {
        &self.results
    }

    pub fn category(&self, category: Category) -> &CategoryContent {
        &self.categories[category.index()]
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut CategoryContent {
        &mut self.categories[category.index()]
    }

    pub fn ui_state(&self) -> UiState {
        if self.spinner.is_visible() {
            UiState::Loading
        } else if self.error.is_visible() {
            UiState::ShowingError
        } else if self.results.is_visible() {
            UiState::ShowingResults
        } else {
            UiState::Idle
        }
    }
}
