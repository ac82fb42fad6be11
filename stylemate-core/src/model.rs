use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Values read from the recommendation form at submission time.
///
/// The server expects the Indonesian field names `tema` and `warna` for the
/// theme and colour preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub location: String,
    pub gender: String,
    #[serde(rename = "tema")]
    pub theme: String,
    #[serde(rename = "warna")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temperature: f64,
    pub description: String,
    pub location: String,
    pub season: String,
}

impl WeatherInfo {
    /// Temperature in whole degrees Celsius, or `None` if it isn't finite.
    /// Halves round toward positive infinity, so `-2.5` becomes `-2` and
    /// `2.5` becomes `3`.
    pub fn rounded_temperature(&self) -> Option<i64> {
        let t = self.temperature;
        if !t.is_finite() {
            return None;
        }

        let r = t.round();
        let r = if t - r == 0.5 { r + 1.0 } else { r };
        Some(r as i64)
    }
}

/// One recommended product.
///
/// Catalogue attributes are often missing; a `null` or absent text field
/// decodes to an empty string so one sparse item can't sink its whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_display_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base_colour: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub season: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub usage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Item {
    /// External product link, if the item carries a non-blank one.
    pub fn product_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.trim().is_empty())
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wardrobe categories the server groups recommendations into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Atasan,
    Bawahan,
    Sepatu,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Atasan => "Atasan",
            Category::Bawahan => "Bawahan",
            Category::Sepatu => "Sepatu",
        }
    }

    /// Categories in rendering order.
    pub const fn all() -> &'static [Category] {
        &[Category::Atasan, Category::Bawahan, Category::Sepatu]
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Atasan => 0,
            Category::Bawahan => 1,
            Category::Sepatu => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Items grouped by category, as returned under `recommendations`.
///
/// A missing or `null` category decodes to `None` and is treated exactly like
/// an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    #[serde(rename = "Atasan", default, skip_serializing_if = "Option::is_none")]
    pub atasan: Option<Vec<Item>>,
    #[serde(rename = "Bawahan", default, skip_serializing_if = "Option::is_none")]
    pub bawahan: Option<Vec<Item>>,
    #[serde(rename = "Sepatu", default, skip_serializing_if = "Option::is_none")]
    pub sepatu: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_info: Option<WeatherInfo>,
}

impl RecommendationSet {
    pub fn items(&self, category: Category) -> &[Item] {
        let items = match category {
            Category::Atasan => &self.atasan,
            Category::Bawahan => &self.bawahan,
            Category::Sepatu => &self.sepatu,
        };
        items.as_deref().unwrap_or(&[])
    }

    pub fn set_items(&mut self, category: Category, items: Vec<Item>) {
        let slot = match category {
            Category::Atasan => &mut self.atasan,
            Category::Bawahan => &mut self.bawahan,
            Category::Sepatu => &mut self.sepatu,
        };
        *slot = Some(items);
    }
}

/// Payload of `GET /health`. A missing flag counts as "not loaded".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub model_loaded: bool,
}
