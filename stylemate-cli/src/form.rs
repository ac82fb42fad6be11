//! Filling in the recommendation form from flags and prompts.

use anyhow::Context;
use clap::Args;
use inquire::{Confirm, Select, Text, required};
use stylemate_core::FormInput;

/// Gender values the catalogue is tagged with.
pub const GENDERS: &[&str] = &["Men", "Women", "Boys", "Girls", "Unisex"];

/// Usage tags the catalogue is tagged with.
pub const THEMES: &[&str] =
    &["Casual", "Formal", "Sports", "Ethnic", "Smart Casual", "Party", "Travel", "Home"];

#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// City or area used for the weather lookup.
    #[arg(long)]
    pub location: Option<String>,

    /// e.g. "Men" or "Women".
    #[arg(long)]
    pub gender: Option<String>,

    /// Occasion or style, e.g. "Casual".
    #[arg(long)]
    pub theme: Option<String>,

    /// Preferred base colour, e.g. "Blue".
    #[arg(long)]
    pub color: Option<String>,
}

impl FormArgs {
    /// The form, if every field was given on the command line.
    pub fn complete(&self) -> Option<FormInput> {
        Some(FormInput {
            location: self.location.clone()?,
            gender: self.gender.clone()?,
            theme: self.theme.clone()?,
            color: self.color.clone()?,
        })
    }

    /// Partial input used as prompt defaults.
    pub fn into_defaults(self) -> FormInput {
        FormInput {
            location: self.location.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            theme: self.theme.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
        }
    }
}

/// Ask for every field, pre-filled from `defaults`.
pub fn prompt_form(defaults: &FormInput) -> anyhow::Result<FormInput> {
    let location = Text::new("Lokasi:")
        .with_default(&defaults.location)
        .with_validator(required!("Lokasi wajib diisi"))
        .prompt()
        .context("Failed to read location")?;

    let gender = Select::new("Gender:", GENDERS.to_vec())
        .with_starting_cursor(starting_cursor(GENDERS, &defaults.gender))
        .prompt()
        .context("Failed to read gender")?;

    let theme = Select::new("Tema:", THEMES.to_vec())
        .with_starting_cursor(starting_cursor(THEMES, &defaults.theme))
        .prompt()
        .context("Failed to read theme")?;

    let color = Text::new("Warna:")
        .with_default(&defaults.color)
        .prompt()
        .context("Failed to read colour")?;

    Ok(FormInput {
        location: location.trim().to_string(),
        gender: gender.to_string(),
        theme: theme.to_string(),
        color: color.trim().to_string(),
    })
}

pub fn ask_again() -> anyhow::Result<bool> {
    Confirm::new("Cari rekomendasi lain?")
        .with_default(false)
        .prompt()
        .context("Failed to read answer")
}

fn starting_cursor(options: &[&str], current: &str) -> usize {
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(current))
        .unwrap_or(0)
}
