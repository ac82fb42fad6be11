//! Pure renderers turning API data into displayable cards.

use std::fmt;

use crate::{
    copy,
    model::{Category, Item, WeatherInfo},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    /// `None` when the reported temperature isn't a finite number.
    pub temperature_c: Option<i64>,
    pub description: String,
    pub location: String,
    pub season: String,
}

impl From<&WeatherInfo> for WeatherCard {
    fn from(info: &WeatherInfo) -> Self {
        Self {
            temperature_c: info.rounded_temperature(),
            description: info.description.clone(),
            location: info.location.clone(),
            season: info.season.clone(),
        }
    }
}

impl fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.temperature_c {
            Some(t) => writeln!(f, "{t}°C")?,
            None => writeln!(f, "-°C")?,
        }
        writeln!(f, "{}", self.description)?;
        writeln!(f, "{}", self.location)?;
        write!(f, "Season: {}", self.season)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub title: String,
    /// Colour, season and usage, in that order.
    pub badges: [String; 3],
    pub link: Option<String>,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            title: item.product_display_name.clone(),
            badges: [item.base_colour.clone(), item.season.clone(), item.usage.clone()],
            link: item.product_link().map(str::to_owned),
        }
    }
}

impl fmt::Display for ItemCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        write!(f, "\n  [{}] [{}] [{}]", self.badges[0], self.badges[1], self.badges[2])?;
        if let Some(link) = &self.link {
            write!(f, "\n  {}: {}", copy::PRODUCT_LINK_LABEL, link)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub message: String,
    pub hint: &'static str,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.message, self.hint)
    }
}

/// What one category container currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryContent {
    /// Nothing rendered yet.
    #[default]
    Blank,
    Items(Vec<ItemCard>),
    NoMatch(Placeholder),
}

impl CategoryContent {
    pub fn cards(&self) -> &[ItemCard] {
        match self {
            CategoryContent::Items(cards) => cards,
            _ => &[],
        }
    }
}

impl fmt::Display for CategoryContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryContent::Blank => Ok(()),
            CategoryContent::NoMatch(placeholder) => fmt::Display::fmt(placeholder, f),
            CategoryContent::Items(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    fmt::Display::fmt(card, f)?;
                }
                Ok(())
            }
        }
    }
}

/// Render one category: a card per item, or the "no match" placeholder.
pub fn category_content(category: Category, items: &[Item]) -> CategoryContent {
    if items.is_empty() {
        CategoryContent::NoMatch(Placeholder {
            message: copy::no_match(category.as_str()),
            hint: copy::NO_MATCH_HINT,
        })
    } else {
        CategoryContent::Items(items.iter().map(ItemCard::from).collect())
    }
}
