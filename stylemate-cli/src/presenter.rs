//! Draws page regions to the terminal as they change.

use colored::Colorize;
use stylemate_core::{Category, Page, Presenter, RegionId, WeatherCard};

/// Weather is drawn when a submission settles, so a lookup result that the
/// response replaces is never shown, and only when it differs from what was
/// last drawn.
#[derive(Debug, Clone, Default)]
pub struct TerminalPresenter {
    drawn_weather: Option<WeatherCard>,
}

impl Presenter for TerminalPresenter {
    fn region_changed(&mut self, page: &Page, region: RegionId) {
        match region {
            RegionId::SubmitButton if page.submit().disabled => {
                println!("{}", page.submit().label.dimmed());
            }
            RegionId::SubmitButton => self.draw_weather(page),
            RegionId::Error if page.error().is_visible() => {
                println!("{} {}", "⚠".yellow(), page.error().content().red());
            }
            RegionId::Results if page.results().is_visible() => {
                for &category in Category::all() {
                    println!("\n{}", category.as_str().bold().underline());
                    println!("{}", category_text(page, category));
                }
            }
            _ => {}
        }
    }
}

impl TerminalPresenter {
    fn draw_weather(&mut self, page: &Page) {
        if let Some(text) = self.weather_update(page) {
            println!("\n{}\n{}", "Cuaca".bold(), text);
        }
    }

    /// Text for the weather panel if it is visible and not drawn yet.
    fn weather_update(&mut self, page: &Page) -> Option<String> {
        let weather = page.weather();
        if !weather.is_visible() {
            return None;
        }

        let card = weather.content().as_ref()?;
        if self.drawn_weather.as_ref() == Some(card) {
            return None;
        }

        self.drawn_weather = Some(card.clone());
        Some(indent(&card.to_string()))
    }
}

fn category_text(page: &Page, category: Category) -> String {
    indent(&page.category(category).to_string())
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {line}")).collect::<Vec<_>>().join("\n")
}
